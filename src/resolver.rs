//! Topic resolution: cache, then curated entries, then topics-only entries,
//! then generic heuristic lists.
//!
//! `resolve_topics` never fails. Internal errors are logged and answered with
//! heuristic topics, so callers always have something to offer the user; the
//! `source` field of the result tells which tier answered.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use crate::books::BookCatalog;
use crate::cache::{CacheEntry, CacheKey, TopicCache};
use crate::classify::{classify_grade_band, classify_subject};
use crate::curriculum::CurriculumCatalog;
use crate::domain::{Language, ResolvedTopics, TopicSet, TopicSource, MAX_TOPICS};
use crate::error::ResolveError;
use crate::heuristic::generate_heuristic;
use crate::util::fill_template;

const CURATED_TITLE_TEMPLATE: &str = "{subject} - {course}";
const HEURISTIC_TITLE_TEMPLATE: &str = "{subject} ({course})";

#[derive(Clone)]
pub struct TopicResolver {
  catalog: Arc<CurriculumCatalog>,
  books: Arc<dyn BookCatalog>,
  cache: Arc<dyn TopicCache>,
}

impl TopicResolver {
  pub fn new(catalog: Arc<CurriculumCatalog>, books: Arc<dyn BookCatalog>, cache: Arc<dyn TopicCache>) -> Self {
    Self { catalog, books, cache }
  }

  pub fn catalog(&self) -> &CurriculumCatalog {
    &self.catalog
  }

  pub fn cache(&self) -> &Arc<dyn TopicCache> {
    &self.cache
  }

  /// Topics for a course and subject in `language`. Always non-empty.
  #[instrument(level = "info", skip(self), fields(%course_name, %subject_name, %language))]
  pub async fn resolve_topics(&self, course_name: &str, subject_name: &str, language: Language) -> ResolvedTopics {
    let key = CacheKey::new(course_name, subject_name, language);

    if let Some(hit) = self.cache.get(&key).await {
      debug!(target: "topics", source = hit.source.as_str(), "cache hit");
      return self.from_cache(course_name, subject_name, hit);
    }

    match self.resolve_uncached(course_name, subject_name, language) {
      Ok(resolved) => {
        self
          .cache
          .set(
            key,
            CacheEntry {
              topics: resolved.topics.clone(),
              book_title: resolved.book_title.clone(),
              source: resolved.source,
            },
          )
          .await;
        info!(target: "topics", source = resolved.source.as_str(), count = resolved.topics.len(), "topics resolved");
        resolved
      }
      Err(e) => {
        error!(target: "topics", error = %e, "topic resolution failed; serving generic topics");
        self.recover(course_name, subject_name, language)
      }
    }
  }

  /// Same as `resolve_topics` with the subject fixed to mathematics.
  pub async fn resolve_math_topics(&self, course_name: &str, language: Language) -> ResolvedTopics {
    self.resolve_topics(course_name, "Matemáticas", language).await
  }

  fn from_cache(&self, course_name: &str, subject_name: &str, hit: CacheEntry) -> ResolvedTopics {
    let topic_descriptions = match hit.source {
      TopicSource::Curated => self
        .catalog
        .lookup_curated(course_name, subject_name)
        .and_then(|set| set.descriptions)
        .filter(|map| hit.topics.iter().all(|t| map.contains_key(t))),
      _ => None,
    };
    ResolvedTopics {
      topics: hit.topics,
      book_title: hit.book_title,
      topic_descriptions,
      source: hit.source,
      cached: true,
    }
  }

  fn resolve_uncached(
    &self,
    course_name: &str,
    subject_name: &str,
    language: Language,
  ) -> Result<ResolvedTopics, ResolveError> {
    let category = classify_subject(subject_name);
    let band = classify_grade_band(course_name);
    debug!(target: "topics", %category, %band, "classified");

    let book_title = self.books.find_title(course_name, subject_name)?;
    let pairs = [("subject", subject_name), ("course", course_name)];

    if let Some(set) = self.catalog.lookup_curated(course_name, subject_name) {
      if !set.topics.is_empty() {
        let set = checked(set)?;
        return Ok(ResolvedTopics {
          topics: cap(set.topics),
          book_title: Some(book_title.unwrap_or_else(|| fill_template(CURATED_TITLE_TEMPLATE, &pairs))),
          topic_descriptions: set.descriptions,
          source: TopicSource::Curated,
          cached: false,
        });
      }
    }

    if let Some(topics) = self.catalog.lookup_legacy(course_name, subject_name, language) {
      if !topics.is_empty() {
        return Ok(ResolvedTopics {
          topics: cap(topics),
          book_title: Some(book_title.unwrap_or_else(|| fill_template(CURATED_TITLE_TEMPLATE, &pairs))),
          topic_descriptions: None,
          source: TopicSource::Legacy,
          cached: false,
        });
      }
    }

    Ok(ResolvedTopics {
      topics: cap(generate_heuristic(category, band, language)),
      book_title: Some(book_title.unwrap_or_else(|| fill_template(HEURISTIC_TITLE_TEMPLATE, &pairs))),
      topic_descriptions: None,
      source: TopicSource::Heuristic,
      cached: false,
    })
  }

  /// Generic topics computed from scratch; not cached.
  fn recover(&self, course_name: &str, subject_name: &str, language: Language) -> ResolvedTopics {
    let category = classify_subject(subject_name);
    let band = classify_grade_band(course_name);
    ResolvedTopics {
      topics: cap(generate_heuristic(category, band, language)),
      book_title: Some(subject_name.to_string()),
      topic_descriptions: None,
      source: TopicSource::Fallback,
      cached: false,
    }
  }
}

fn cap(mut topics: Vec<String>) -> Vec<String> {
  topics.truncate(MAX_TOPICS);
  topics
}

fn checked(set: TopicSet) -> Result<TopicSet, ResolveError> {
  if set.is_fully_described() {
    Ok(set)
  } else {
    Err(ResolveError::InvalidTopicSet("curated topics without descriptions".into()))
  }
}
