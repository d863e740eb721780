//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Language, TopicDescription};
use crate::prompting::ContentContext;

#[derive(Debug, Deserialize)]
pub struct TopicsQuery {
  #[serde(default)]
  pub course: String,
  #[serde(default)]
  pub subject: String,
  #[serde(default)]
  pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct DescriptionQuery {
  pub course: String,
  pub subject: String,
  pub topic: String,
}

#[derive(Serialize)]
pub struct DescriptionOut {
  #[serde(flatten)]
  pub description: TopicDescription,
  /// Markdown rendering for display.
  pub formatted: String,
}

#[derive(Debug, Deserialize)]
pub struct ContextQuery {
  #[serde(default)]
  pub course: String,
  #[serde(default)]
  pub language: Language,
}

#[derive(Serialize)]
pub struct ContextOut {
  pub context: ContentContext,
  pub instructions: String,
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
  #[serde(rename = "curriculumVersion")]
  pub curriculum_version: u32,
}
