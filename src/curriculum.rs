//! Curriculum catalog: the versioned data asset behind the first two tiers.
//!
//! One JSON asset holds every authored entry, keyed by canonical grade and
//! subject. Each entry declares its completeness:
//!   - `described`: ordered topics plus a description for each (curated tier)
//!   - `topics_only`: a flat ordered list (legacy tier)
//!
//! The built-in asset is embedded at compile time; a replacement can be loaded
//! from disk through configuration. Assets are validated when loaded, so a
//! `described` entry always covers each of its topics.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::classify::{classify_curriculum_subject, classify_grade, classify_legacy_subject};
use crate::domain::{CurriculumSubject, Grade, Language, TopicDescription, TopicSet};
use crate::error::CatalogError;

/// Asset schema version this build understands.
pub const ASSET_VERSION: u32 = 2;

static BUILTIN_ASSET: &str = include_str!("../data/curriculum.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
  Described,
  TopicsOnly,
}

impl Completeness {
  fn as_str(&self) -> &'static str {
    match self {
      Completeness::Described => "described",
      Completeness::TopicsOnly => "topics_only",
    }
  }
}

#[derive(Deserialize)]
struct Asset {
  version: u32,
  #[serde(default)]
  language: Language,
  entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
  grade: Grade,
  subject: CurriculumSubject,
  completeness: Completeness,
  topics: Vec<String>,
  #[serde(default)]
  descriptions: Vec<TopicDescription>,
}

type Key = (Grade, CurriculumSubject);

#[derive(Clone, Debug)]
pub struct CurriculumCatalog {
  version: u32,
  language: Language,
  described: HashMap<Key, TopicSet>,
  topics_only: HashMap<Key, Vec<String>>,
}

impl CurriculumCatalog {
  /// Catalog from the asset compiled into the binary.
  pub fn builtin() -> Result<Self, CatalogError> {
    Self::from_json_str(BUILTIN_ASSET)
  }

  /// Catalog from an asset file on disk.
  #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
      path: path.display().to_string(),
      source,
    })?;
    Self::from_json_str(&raw)
  }

  /// Parse and validate an asset.
  pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
    let asset: Asset = serde_json::from_str(raw)?;
    if asset.version != ASSET_VERSION {
      return Err(CatalogError::Version { found: asset.version, expected: ASSET_VERSION });
    }

    let mut described = HashMap::new();
    let mut topics_only = HashMap::new();

    for entry in asset.entries {
      let grade = entry.grade.key().to_string();
      let subject = entry.subject.key().to_string();
      let key = (entry.grade, entry.subject);

      if entry.topics.is_empty() {
        return Err(CatalogError::EmptyEntry { grade, subject });
      }
      let mut seen = HashSet::new();
      for t in &entry.topics {
        if !seen.insert(t.as_str()) {
          return Err(CatalogError::DuplicateTopic { grade, subject, topic: t.clone() });
        }
      }

      let duplicate = match entry.completeness {
        Completeness::Described => described.contains_key(&key),
        Completeness::TopicsOnly => topics_only.contains_key(&key),
      };
      if duplicate {
        return Err(CatalogError::DuplicateEntry {
          grade,
          subject,
          completeness: entry.completeness.as_str().to_string(),
        });
      }

      match entry.completeness {
        Completeness::Described => {
          let mut map = BTreeMap::new();
          for d in entry.descriptions {
            if !seen.contains(d.topic.as_str()) {
              return Err(CatalogError::OrphanDescription { grade, subject, topic: d.topic });
            }
            map.insert(d.topic.clone(), d);
          }
          if let Some(missing) = entry.topics.iter().find(|t| !map.contains_key(*t)) {
            return Err(CatalogError::MissingDescription { grade, subject, topic: missing.clone() });
          }
          described.insert(key, TopicSet { topics: entry.topics, descriptions: Some(map) });
        }
        Completeness::TopicsOnly => {
          if !entry.descriptions.is_empty() {
            warn!(target: "curriculum", %grade, %subject, "descriptions on a topics_only entry are ignored");
          }
          topics_only.insert(key, entry.topics);
        }
      }
    }

    info!(
      target: "curriculum",
      version = asset.version,
      language = %asset.language,
      described = described.len(),
      topics_only = topics_only.len(),
      "Curriculum catalog loaded"
    );

    Ok(Self { version: asset.version, language: asset.language, described, topics_only })
  }

  pub fn version(&self) -> u32 {
    self.version
  }

  /// Language the asset's content is written in.
  pub fn language(&self) -> Language {
    self.language
  }

  /// Number of (described, topics_only) entries.
  pub fn entry_counts(&self) -> (usize, usize) {
    (self.described.len(), self.topics_only.len())
  }

  fn key_for(course_name: &str, subject_name: &str) -> Option<Key> {
    let grade = classify_grade(course_name)?;
    let subject = classify_curriculum_subject(subject_name)?;
    Some((grade, subject))
  }

  fn legacy_key_for(course_name: &str, subject_name: &str) -> Option<Key> {
    let grade = classify_grade(course_name)?;
    let subject = classify_legacy_subject(subject_name)?;
    Some((grade, subject))
  }

  /// Curated tier: topics with descriptions for a course and subject.
  pub fn lookup_curated(&self, course_name: &str, subject_name: &str) -> Option<TopicSet> {
    let key = Self::key_for(course_name, subject_name)?;
    let found = self.described.get(&key).cloned();
    debug!(target: "curriculum", grade = %key.0, subject = %key.1, hit = found.is_some(), "curated lookup");
    found
  }

  /// Legacy tier: a flat topic list for a course and subject. Subjects are
  /// matched on single keywords ("Ciencias", "Geografía"), looser than the
  /// curated tier.
  ///
  /// `language` does not select content: topics-only entries exist in the
  /// asset's language only, and are served as such.
  pub fn lookup_legacy(&self, course_name: &str, subject_name: &str, language: Language) -> Option<Vec<String>> {
    let key = Self::legacy_key_for(course_name, subject_name)?;
    let found = self.topics_only.get(&key).cloned();
    debug!(
      target: "curriculum",
      grade = %key.0,
      subject = %key.1,
      requested = %language,
      content = %self.language,
      hit = found.is_some(),
      "legacy lookup"
    );
    found
  }

  /// Description of one topic of a course and subject.
  pub fn topic_description(&self, course_name: &str, subject_name: &str, topic: &str) -> Option<TopicDescription> {
    let key = Self::key_for(course_name, subject_name)?;
    self.described.get(&key)?.descriptions.as_ref()?.get(topic).cloned()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn builtin() -> CurriculumCatalog {
    CurriculumCatalog::builtin().expect("builtin asset must load")
  }

  #[test]
  fn builtin_asset_loads_with_full_coverage() {
    let cat = builtin();
    assert_eq!(cat.version(), ASSET_VERSION);
    assert_eq!(cat.language(), Language::Es);
    let (described, topics_only) = cat.entry_counts();
    assert_eq!(described, 52);
    assert_eq!(topics_only, 12);
    for set in cat.described.values() {
      assert!(set.is_fully_described());
    }
  }

  #[test]
  fn first_grade_math_starts_with_numbers_to_ten() {
    let set = builtin().lookup_curated("1ro Básico", "Matemáticas").expect("entry");
    assert_eq!(set.topics[0], "Números hasta el 10");
    let d = set.descriptions.as_ref().unwrap();
    assert_eq!(d["Números hasta el 10"].unit, "Unidad 1: Mi colegio");
  }

  #[test]
  fn philosophy_fourth_medio() {
    let set = builtin().lookup_curated("4to Medio", "Filosofía").expect("entry");
    assert_eq!(set.topics, vec!["Ética y Política", "Estética", "Filosofía y Sociedad Actual"]);
  }

  #[test]
  fn second_grade_history_is_not_science() {
    let set = builtin()
      .lookup_curated("2do Básico", "Historia, Geografía y Ciencias Sociales")
      .expect("entry");
    assert_eq!(set.topics[0], "Planos y Orientación");
    assert_eq!(set.topics.len(), 6);
  }

  #[test]
  fn coverage_is_partial() {
    let cat = builtin();
    assert!(cat.lookup_curated("1ro Básico", "Filosofía").is_none());
    assert!(cat.lookup_curated("1ro Medio", "Ciencias Naturales").is_none());
    assert!(cat.lookup_curated("Curso Inexistente", "Matemáticas").is_none());
    assert!(cat.lookup_curated("1ro Básico", "Educación Física").is_none());
  }

  #[test]
  fn legacy_entries_are_flat_lists() {
    let topics = builtin()
      .lookup_legacy("3ro Básico", "Historia, Geografía y Ciencias Sociales", Language::En)
      .expect("entry");
    assert_eq!(topics[0], "Pueblos originarios de América");
  }

  #[test]
  fn legacy_tier_answers_loose_subject_names() {
    let cat = builtin();
    assert!(cat.lookup_curated("2do Básico", "Ciencias").is_none());
    let topics = cat.lookup_legacy("2do Básico", "Ciencias", Language::Es).expect("entry");
    assert_eq!(topics[0], "Sistemas del cuerpo humano");
    let topics = cat.lookup_legacy("1ro Básico", "Geografía", Language::Es).expect("entry");
    assert_eq!(topics[0], "Mi familia y yo");
    assert!(cat.lookup_legacy("5to Básico", "Ciencias", Language::Es).is_none());
  }

  #[test]
  fn single_description_lookup() {
    let cat = builtin();
    let d = cat.topic_description("2° Medio", "Física", "Fuerza y Leyes de Newton").expect("description");
    assert_eq!(d.topic, "Fuerza y Leyes de Newton");
    assert!(!d.unit.is_empty());
    assert!(cat.topic_description("2do Medio", "Física", "No existe").is_none());
    assert!(cat.topic_description("2do Medio", "Música", "Fuerza y Leyes de Newton").is_none());
  }

  #[test]
  fn rejects_uncovered_topics() {
    let raw = r#"{"version":2,"entries":[{"grade":"1ro basico","subject":"matematicas","completeness":"described",
      "topics":["A","B"],"descriptions":[{"topic":"A","unit":"U1","description":"d"}]}]}"#;
    let err = CurriculumCatalog::from_json_str(raw).unwrap_err();
    assert!(matches!(err, CatalogError::MissingDescription { ref topic, .. } if topic == "B"));
  }

  #[test]
  fn rejects_orphans_duplicates_and_versions() {
    let orphan = r#"{"version":2,"entries":[{"grade":"1ro basico","subject":"matematicas","completeness":"described",
      "topics":["A"],"descriptions":[{"topic":"A","unit":"U","description":"d"},{"topic":"Z","unit":"U","description":"d"}]}]}"#;
    assert!(matches!(CurriculumCatalog::from_json_str(orphan), Err(CatalogError::OrphanDescription { .. })));

    let dup = r#"{"version":2,"entries":[
      {"grade":"1ro basico","subject":"filosofia","completeness":"topics_only","topics":["A"]},
      {"grade":"1ro basico","subject":"filosofia","completeness":"topics_only","topics":["B"]}]}"#;
    assert!(matches!(CurriculumCatalog::from_json_str(dup), Err(CatalogError::DuplicateEntry { .. })));

    let twice = r#"{"version":2,"entries":[{"grade":"1ro basico","subject":"filosofia","completeness":"topics_only","topics":["A","A"]}]}"#;
    assert!(matches!(CurriculumCatalog::from_json_str(twice), Err(CatalogError::DuplicateTopic { .. })));

    let old = r#"{"version":1,"entries":[]}"#;
    assert!(matches!(CurriculumCatalog::from_json_str(old), Err(CatalogError::Version { found: 1, .. })));

    assert!(matches!(CurriculumCatalog::from_json_str("not json"), Err(CatalogError::Parse(_))));
  }
}
