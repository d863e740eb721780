//! Error types. None of these reach callers of `resolve_topics`; the resolver
//! recovers from all of them, but they are logged with their full context.

use thiserror::Error;

/// Problems with curriculum or book catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("curriculum asset is not valid JSON: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("failed to read curriculum asset {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("unsupported curriculum asset version {found} (expected {expected})")]
  Version { found: u32, expected: u32 },
  #[error("duplicate {completeness} entry for {grade} / {subject}")]
  DuplicateEntry { grade: String, subject: String, completeness: String },
  #[error("entry {grade} / {subject} has no topics")]
  EmptyEntry { grade: String, subject: String },
  #[error("entry {grade} / {subject} lists topic {topic:?} twice")]
  DuplicateTopic { grade: String, subject: String, topic: String },
  #[error("entry {grade} / {subject}: topic {topic:?} has no description")]
  MissingDescription { grade: String, subject: String, topic: String },
  #[error("entry {grade} / {subject}: description for unlisted topic {topic:?}")]
  OrphanDescription { grade: String, subject: String, topic: String },
  #[error("malformed book entry for {course} / {subject}: {reason}")]
  MalformedBook { course: String, subject: String, reason: String },
}

/// Problems loading the TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

/// Anything that interrupts the tiered resolution of a topic list.
#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("book catalog lookup failed: {0}")]
  Catalog(#[from] CatalogError),
  #[error("curriculum tier returned an unusable topic set: {0}")]
  InvalidTopicSet(String),
}
