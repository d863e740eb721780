//! Loading application configuration (cache, curriculum asset, prompts, book
//! catalog) from TOML.
//!
//! Example:
//! ```toml
//! curriculum_path = "data/curriculum.json"
//!
//! [cache]
//! ttl_secs = 1800
//! capacity = 512
//!
//! [[books]]
//! course = "1ro Básico"
//! subject = "Matemáticas"
//! title = "Sumo Primero 1° Básico"
//! pdf_url = "https://example.org/mate-1.pdf"
//! ```

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info};

use crate::books::BookEntry;
use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};
use crate::error::ConfigError;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub cache: CacheConfig,
  /// Replacement for the built-in curriculum asset.
  #[serde(default)]
  pub curriculum_path: Option<String>,
  #[serde(default)]
  pub prompts: Prompts,
  #[serde(default)]
  pub books: Vec<BookEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
  pub ttl_secs: u64,
  pub capacity: usize,
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self { ttl_secs: DEFAULT_TTL.as_secs(), capacity: DEFAULT_CAPACITY }
  }
}

impl CacheConfig {
  pub fn ttl(&self) -> Duration {
    Duration::from_secs(self.ttl_secs)
  }
}

/// Templates for the student-context block prepended to content-generation
/// prompts. Placeholders: {course}, {age}, {complexity}, {language_style},
/// {examples_style}, {content_guidelines}.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub instructions_es: String,
  pub instructions_en: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      instructions_es: "\
CONTEXTO DEL ESTUDIANTE:
- Curso: {course}
- Edad aproximada: {age} años
- Nivel de complejidad requerido: {complexity}

INSTRUCCIONES DE ADAPTACIÓN:
1. LENGUAJE: {language_style}
2. EJEMPLOS: {examples_style}
3. CONTENIDO: {content_guidelines}

IMPORTANTE: Adapta TODO el contenido al nivel cognitivo de un estudiante de {age} años.
- Si el curso es básico inicial (1ro-2do): usa lenguaje muy simple, muchos ejemplos concretos y visuales.
- Si el curso es básico intermedio (3ro-4to): introduce conceptos gradualmente con ejemplos cotidianos.
- Si el curso es básico avanzado (5to-8vo): usa terminología apropiada con explicaciones cuando sea necesario.
- Si el curso es de enseñanza media (1ro-4to medio): usa lenguaje académico y técnico apropiado.
"
      .into(),
      instructions_en: "\
STUDENT CONTEXT:
- Grade: {course}
- Approximate age: {age} years
- Required complexity level: {complexity}

ADAPTATION INSTRUCTIONS:
1. LANGUAGE: {language_style}
2. EXAMPLES: {examples_style}
3. CONTENT: {content_guidelines}

IMPORTANT: Adapt ALL content to the cognitive level of a {age}-year-old student.
- If elementary initial (1st-2nd grade): use very simple language, many concrete and visual examples.
- If elementary intermediate (3rd-4th grade): introduce concepts gradually with everyday examples.
- If elementary advanced (5th-8th grade): use appropriate terminology with explanations when necessary.
- If high school (9th-12th grade): use appropriate academic and technical language.
"
      .into(),
    }
  }
}

/// Parse a config file.
pub fn load_app_config(path: &str) -> Result<AppConfig, ConfigError> {
  let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_string(), source })?;
  toml::from_str::<AppConfig>(&raw).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
}

/// Attempt to load `AppConfig` from APP_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("APP_CONFIG_PATH").ok()?;
  match load_app_config(&path) {
    Ok(cfg) => {
      info!(target: "aula_backend", %path, books = cfg.books.len(), "Loaded app config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "aula_backend", %path, error = %e, "Failed to load config; using defaults");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_gives_defaults() {
    let cfg: AppConfig = toml::from_str("").unwrap();
    assert_eq!(cfg.cache.ttl(), DEFAULT_TTL);
    assert_eq!(cfg.cache.capacity, DEFAULT_CAPACITY);
    assert!(cfg.books.is_empty());
    assert!(cfg.curriculum_path.is_none());
    assert!(cfg.prompts.instructions_es.contains("{age}"));
  }

  #[test]
  fn parses_books_and_partial_sections() {
    let cfg: AppConfig = toml::from_str(
      r#"
        [cache]
        ttl_secs = 60

        [prompts]
        instructions_en = "Grade {course}"

        [[books]]
        course = "1ro Básico"
        subject = "Matemáticas"
        title = "Sumo Primero 1°"
      "#,
    )
    .unwrap();
    assert_eq!(cfg.cache.ttl_secs, 60);
    assert_eq!(cfg.cache.capacity, DEFAULT_CAPACITY);
    assert_eq!(cfg.prompts.instructions_en, "Grade {course}");
    assert!(cfg.prompts.instructions_es.starts_with("CONTEXTO"));
    assert_eq!(cfg.books[0].title, "Sumo Primero 1°");
    assert_eq!(cfg.books[0].pdf_url, "");
  }

  #[test]
  fn missing_file_is_a_read_error() {
    assert!(matches!(load_app_config("/nonexistent/aula.toml"), Err(ConfigError::Read { .. })));
  }
}
