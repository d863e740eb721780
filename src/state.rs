//! Application state: curriculum catalog, book catalog, topic cache, resolver
//! and prompts.
//!
//! Built once at startup and shared by every handler. The cache is the only
//! mutable part; `reset_cache` empties it (tests, admin tooling).

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::books::InMemoryBookCatalog;
use crate::cache::{LruTopicCache, SystemClock, TopicCache};
use crate::config::{load_app_config_from_env, AppConfig, Prompts};
use crate::curriculum::CurriculumCatalog;
use crate::error::CatalogError;
use crate::resolver::TopicResolver;

#[derive(Clone)]
pub struct AppState {
  pub resolver: TopicResolver,
  pub prompts: Prompts,
}

impl AppState {
  /// Build state from env: load config, the curriculum asset, books and cache.
  #[instrument(level = "info", skip_all)]
  pub fn new() -> Result<Self, CatalogError> {
    let cfg = load_app_config_from_env().unwrap_or_default();
    Self::from_config(cfg)
  }

  /// Build state from an explicit config. A configured curriculum file that
  /// fails to load falls back to the built-in asset.
  pub fn from_config(cfg: AppConfig) -> Result<Self, CatalogError> {
    let catalog = match &cfg.curriculum_path {
      Some(path) => match CurriculumCatalog::from_path(path) {
        Ok(c) => c,
        Err(e) => {
          error!(target: "aula_backend", %path, error = %e, "Curriculum file unusable; using built-in asset");
          CurriculumCatalog::builtin()?
        }
      },
      None => CurriculumCatalog::builtin()?,
    };

    let books = InMemoryBookCatalog::new(cfg.books.clone());
    if books.is_empty() {
      warn!(target: "aula_backend", "No books configured; titles will be synthesized");
    }

    let cache = LruTopicCache::new(cfg.cache.ttl(), cfg.cache.capacity, Arc::new(SystemClock));
    info!(
      target: "aula_backend",
      curriculum_version = catalog.version(),
      curriculum_language = %catalog.language(),
      books = books.len(),
      cache_ttl_secs = cache.ttl().as_secs(),
      cache_capacity = cache.capacity(),
      "State initialized"
    );

    Ok(Self::with_parts(
      TopicResolver::new(Arc::new(catalog), Arc::new(books), Arc::new(cache)),
      cfg.prompts,
    ))
  }

  pub fn with_parts(resolver: TopicResolver, prompts: Prompts) -> Self {
    Self { resolver, prompts }
  }

  pub fn cache(&self) -> &Arc<dyn TopicCache> {
    self.resolver.cache()
  }

  pub async fn reset_cache(&self) {
    self.cache().clear().await;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::books::BookEntry;
  use crate::domain::Language;

  #[tokio::test]
  async fn config_books_reach_the_resolver() {
    let cfg = AppConfig {
      books: vec![BookEntry {
        course: "2do Básico".into(),
        subject: "Historia, Geografía y Ciencias Sociales".into(),
        title: "Historia 2°".into(),
        pdf_url: String::new(),
      }],
      ..AppConfig::default()
    };
    let state = AppState::from_config(cfg).unwrap();
    let out = state
      .resolver
      .resolve_topics("2do Básico", "Historia, Geografía y Ciencias Sociales", Language::Es)
      .await;
    assert_eq!(out.book_title.as_deref(), Some("Historia 2°"));
    assert_eq!(state.cache().len().await, 1);
    state.reset_cache().await;
    assert_eq!(state.cache().len().await, 0);
  }

  #[test]
  fn bad_curriculum_path_falls_back_to_builtin() {
    let cfg = AppConfig { curriculum_path: Some("/nonexistent/curriculum.json".into()), ..AppConfig::default() };
    let state = AppState::from_config(cfg).unwrap();
    assert_eq!(state.resolver.catalog().entry_counts(), (52, 12));
  }
}
