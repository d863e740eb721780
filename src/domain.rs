//! Domain models: languages, grades, subject categories, topic sets and the
//! resolver's output.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on the number of topics handed to callers.
pub const MAX_TOPICS: usize = 40;

/// Output language of generated topic lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  Es,
  En,
}

impl Language {
  pub fn as_str(&self) -> &'static str {
    match self {
      Language::Es => "es",
      Language::En => "en",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Coarse subject family used by the heuristic tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCategory {
  Math,
  LanguageArts,
  NaturalScience,
  Physics,
  Chemistry,
  Biology,
  History,
  Other,
}

impl SubjectCategory {
  /// Broader category whose generic topics also fit this one.
  pub fn parent(&self) -> Option<SubjectCategory> {
    match self {
      SubjectCategory::Physics | SubjectCategory::Chemistry | SubjectCategory::Biology => {
        Some(SubjectCategory::NaturalScience)
      }
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SubjectCategory::Math => "math",
      SubjectCategory::LanguageArts => "language_arts",
      SubjectCategory::NaturalScience => "natural_science",
      SubjectCategory::Physics => "physics",
      SubjectCategory::Chemistry => "chemistry",
      SubjectCategory::Biology => "biology",
      SubjectCategory::History => "history",
      SubjectCategory::Other => "other",
    }
  }
}

impl fmt::Display for SubjectCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Schooling band used by the heuristic tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeBand {
  Elementary,
  Secondary,
  Tertiary,
}

impl GradeBand {
  pub fn as_str(&self) -> &'static str {
    match self {
      GradeBand::Elementary => "elementary",
      GradeBand::Secondary => "secondary",
      GradeBand::Tertiary => "tertiary",
    }
  }
}

impl fmt::Display for GradeBand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Schooling stage of a canonical grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
  /// Enseñanza básica, grades 1 to 8.
  Basico,
  /// Enseñanza media, grades 1 to 4.
  Medio,
}

/// One of the twelve canonical grades the curriculum asset is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
  #[serde(rename = "1ro basico")] Basico1,
  #[serde(rename = "2do basico")] Basico2,
  #[serde(rename = "3ro basico")] Basico3,
  #[serde(rename = "4to basico")] Basico4,
  #[serde(rename = "5to basico")] Basico5,
  #[serde(rename = "6to basico")] Basico6,
  #[serde(rename = "7mo basico")] Basico7,
  #[serde(rename = "8vo basico")] Basico8,
  #[serde(rename = "1ro medio")] Medio1,
  #[serde(rename = "2do medio")] Medio2,
  #[serde(rename = "3ro medio")] Medio3,
  #[serde(rename = "4to medio")] Medio4,
}

impl Grade {
  pub fn from_parts(stage: Stage, ordinal: u8) -> Option<Grade> {
    match (stage, ordinal) {
      (Stage::Basico, 1) => Some(Grade::Basico1),
      (Stage::Basico, 2) => Some(Grade::Basico2),
      (Stage::Basico, 3) => Some(Grade::Basico3),
      (Stage::Basico, 4) => Some(Grade::Basico4),
      (Stage::Basico, 5) => Some(Grade::Basico5),
      (Stage::Basico, 6) => Some(Grade::Basico6),
      (Stage::Basico, 7) => Some(Grade::Basico7),
      (Stage::Basico, 8) => Some(Grade::Basico8),
      (Stage::Medio, 1) => Some(Grade::Medio1),
      (Stage::Medio, 2) => Some(Grade::Medio2),
      (Stage::Medio, 3) => Some(Grade::Medio3),
      (Stage::Medio, 4) => Some(Grade::Medio4),
      _ => None,
    }
  }

  /// Year within the stage (1-based).
  pub fn ordinal(&self) -> u8 {
    match self {
      Grade::Basico1 | Grade::Medio1 => 1,
      Grade::Basico2 | Grade::Medio2 => 2,
      Grade::Basico3 | Grade::Medio3 => 3,
      Grade::Basico4 | Grade::Medio4 => 4,
      Grade::Basico5 => 5,
      Grade::Basico6 => 6,
      Grade::Basico7 => 7,
      Grade::Basico8 => 8,
    }
  }

  /// Canonical key, as used in the curriculum asset.
  pub fn key(&self) -> &'static str {
    match self {
      Grade::Basico1 => "1ro basico",
      Grade::Basico2 => "2do basico",
      Grade::Basico3 => "3ro basico",
      Grade::Basico4 => "4to basico",
      Grade::Basico5 => "5to basico",
      Grade::Basico6 => "6to basico",
      Grade::Basico7 => "7mo basico",
      Grade::Basico8 => "8vo basico",
      Grade::Medio1 => "1ro medio",
      Grade::Medio2 => "2do medio",
      Grade::Medio3 => "3ro medio",
      Grade::Medio4 => "4to medio",
    }
  }
}

impl fmt::Display for Grade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Canonical subject keys of the curriculum asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurriculumSubject {
  #[serde(rename = "matematicas")] Mathematics,
  #[serde(rename = "lenguaje y comunicacion")] Language,
  #[serde(rename = "ciencias naturales")] NaturalSciences,
  #[serde(rename = "ciencias para la ciudadania")] ScienceForCitizenship,
  #[serde(rename = "educacion ciudadana")] CivicEducation,
  #[serde(rename = "filosofia")] Philosophy,
  #[serde(rename = "historia, geografia y ciencias sociales")] History,
  #[serde(rename = "biologia")] Biology,
  #[serde(rename = "fisica")] Physics,
  #[serde(rename = "quimica")] Chemistry,
  /// Recognized so it is never mistaken for physics; carries no curriculum data.
  #[serde(rename = "educacion fisica")] PhysicalEducation,
}

impl CurriculumSubject {
  pub fn key(&self) -> &'static str {
    match self {
      CurriculumSubject::Mathematics => "matematicas",
      CurriculumSubject::Language => "lenguaje y comunicacion",
      CurriculumSubject::NaturalSciences => "ciencias naturales",
      CurriculumSubject::ScienceForCitizenship => "ciencias para la ciudadania",
      CurriculumSubject::CivicEducation => "educacion ciudadana",
      CurriculumSubject::Philosophy => "filosofia",
      CurriculumSubject::History => "historia, geografia y ciencias sociales",
      CurriculumSubject::Biology => "biologia",
      CurriculumSubject::Physics => "fisica",
      CurriculumSubject::Chemistry => "quimica",
      CurriculumSubject::PhysicalEducation => "educacion fisica",
    }
  }
}

impl fmt::Display for CurriculumSubject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Authored explanation of one topic within a (grade, subject) bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDescription {
  pub topic: String,
  pub unit: String,
  pub description: String,
}

/// Ordered topics of one (grade, subject), optionally with descriptions.
/// Order is pedagogical sequence and must not be sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TopicSet {
  pub topics: Vec<String>,
  pub descriptions: Option<BTreeMap<String, TopicDescription>>,
}

impl TopicSet {
  /// Every topic has a description whenever descriptions are present.
  pub fn is_fully_described(&self) -> bool {
    match &self.descriptions {
      Some(map) => self.topics.iter().all(|t| map.contains_key(t)),
      None => true,
    }
  }
}

/// Which tier produced a topic list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSource {
  /// Hand-authored topics with descriptions.
  Curated,
  /// Topics-only entries of the curriculum asset.
  Legacy,
  /// Generic lists by subject category and grade band.
  Heuristic,
  /// Heuristic lists served after an internal error; never cached.
  Fallback,
}

impl TopicSource {
  pub fn as_str(&self) -> &'static str {
    match self {
      TopicSource::Curated => "curated",
      TopicSource::Legacy => "legacy",
      TopicSource::Heuristic => "heuristic",
      TopicSource::Fallback => "fallback",
    }
  }
}

/// Result of `TopicResolver::resolve_topics`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTopics {
  pub topics: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub book_title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub topic_descriptions: Option<BTreeMap<String, TopicDescription>>,
  pub source: TopicSource,
  /// Served from the memoization cache.
  pub cached: bool,
}
