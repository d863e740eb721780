//! Classification of free-text course and subject names.
//!
//! Subject names are matched against rule tables scored by specificity:
//! an exact match beats a multi-term phrase, which beats a single keyword.
//! The highest score wins and ties go to the earlier rule, so a compound name
//! such as "Historia, Geografía y Ciencias Sociales" resolves to history through
//! the "ciencias sociales" phrase even though it also contains "ciencia".
//!
//! Course names are matched on ordinal tokens ("4to", "4°", "cuarto") plus a
//! stage discriminator ("medio").

use tracing::trace;

use crate::domain::{CurriculumSubject, Grade, GradeBand, Stage, SubjectCategory};
use crate::util::normalize;

/// How a rule matches a normalized name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
  /// The whole name equals the term.
  Exact(&'static str),
  /// The name contains the term. Terms with a space count as phrases.
  Contains(&'static str),
  /// The name contains every term.
  AllOf(&'static [&'static str]),
  /// Like `Contains`, but never matches a name that also contains the second term.
  ContainsExcept(&'static str, &'static str),
}

impl Pattern {
  /// Specificity when matched, `None` otherwise.
  fn score(&self, name: &str) -> Option<u8> {
    match self {
      Pattern::Exact(term) => (name == *term).then_some(3),
      Pattern::Contains(term) => name.contains(term).then_some(if term.contains(' ') { 2 } else { 1 }),
      Pattern::AllOf(terms) => terms.iter().all(|t| name.contains(t)).then_some(2),
      Pattern::ContainsExcept(term, except) => {
        (name.contains(term) && !name.contains(except)).then_some(if term.contains(' ') { 2 } else { 1 })
      }
    }
  }
}

#[derive(Clone, Copy, Debug)]
pub struct Rule<T: 'static> {
  pub target: T,
  pub pattern: Pattern,
}

const fn rule<T>(target: T, pattern: Pattern) -> Rule<T> {
  Rule { target, pattern }
}

/// Best match of `name` (already normalized) against `rules`.
pub fn best_match<T: Copy>(rules: &[Rule<T>], name: &str) -> Option<T> {
  let mut best: Option<(u8, T)> = None;
  for r in rules {
    if let Some(score) = r.pattern.score(name) {
      if best.map_or(true, |(s, _)| score > s) {
        best = Some((score, r.target));
      }
    }
  }
  best.map(|(_, t)| t)
}

use Pattern::{AllOf, Contains, ContainsExcept, Exact};
use SubjectCategory as C;

pub static SUBJECT_RULES: &[Rule<SubjectCategory>] = &[
  rule(C::Math, Contains("matem")),
  rule(C::Math, Contains("math")),
  rule(C::Math, Contains("algebra")),
  rule(C::Math, Contains("geometr")),
  rule(C::Math, Contains("trigonom")),
  rule(C::Math, Contains("calculo")),
  rule(C::Math, Contains("aritmet")),
  rule(C::Math, Contains("matriz")),
  rule(C::Math, Contains("estadistic")),
  rule(C::Math, Contains("probabil")),
  rule(C::LanguageArts, Contains("lenguaje")),
  rule(C::LanguageArts, Contains("comunicacion")),
  rule(C::LanguageArts, Contains("language")),
  rule(C::LanguageArts, Contains("literatur")),
  rule(C::LanguageArts, Contains("gramatica")),
  rule(C::LanguageArts, Contains("ortografia")),
  rule(C::LanguageArts, Contains("lectura")),
  rule(C::LanguageArts, Contains("escritura")),
  rule(C::Physics, Exact("fisica")),
  rule(C::Physics, Exact("physics")),
  rule(C::Physics, Contains("fisica")),
  rule(C::Physics, Contains("physics")),
  rule(C::Chemistry, Exact("quimica")),
  rule(C::Chemistry, Exact("chemistry")),
  rule(C::Chemistry, Contains("quimic")),
  rule(C::Chemistry, Contains("chemistr")),
  rule(C::Biology, Exact("biologia")),
  rule(C::Biology, Exact("biology")),
  rule(C::Biology, Contains("biolog")),
  rule(C::Biology, Contains("anatomia")),
  rule(C::NaturalScience, Contains("ciencias naturales")),
  rule(C::NaturalScience, Contains("natural science")),
  rule(C::NaturalScience, Contains("ciencias para la ciudadania")),
  rule(C::NaturalScience, Contains("medio ambiente")),
  rule(C::NaturalScience, ContainsExcept("ciencia", "social")),
  rule(C::NaturalScience, ContainsExcept("science", "social")),
  rule(C::NaturalScience, ContainsExcept("natural", "social")),
  rule(C::NaturalScience, Contains("ecologia")),
  rule(C::History, Contains("ciencias sociales")),
  rule(C::History, Contains("social studies")),
  rule(C::History, Contains("social science")),
  rule(C::History, Contains("educacion ciudadana")),
  rule(C::History, Contains("historia")),
  rule(C::History, Contains("history")),
  rule(C::History, Contains("geografia")),
  rule(C::History, Contains("geography")),
  rule(C::History, Contains("social")),
  rule(C::History, Contains("civica")),
  rule(C::History, Contains("ciudadana")),
  rule(C::History, Contains("sociedad")),
  rule(C::Other, Contains("educacion fisica")),
  rule(C::Other, Contains("physical education")),
];

use CurriculumSubject as S;

pub static CURRICULUM_SUBJECT_RULES: &[Rule<CurriculumSubject>] = &[
  rule(S::Mathematics, Contains("matematica")),
  rule(S::Language, Contains("lenguaje")),
  rule(S::Language, Contains("comunicacion")),
  rule(S::Language, Contains("literatura")),
  rule(S::NaturalSciences, AllOf(&["ciencia", "natural"])),
  rule(S::ScienceForCitizenship, AllOf(&["ciencia", "ciudadania"])),
  rule(S::CivicEducation, AllOf(&["educacion", "ciudadana"])),
  rule(S::Philosophy, Contains("filosofia")),
  rule(S::History, Contains("ciencias sociales")),
  rule(S::History, Contains("historia")),
  rule(S::History, Contains("geografia")),
  rule(S::History, Contains("social")),
  rule(S::Biology, Exact("biologia")),
  rule(S::Biology, Contains("biologia")),
  rule(S::Physics, Exact("fisica")),
  rule(S::Physics, Contains("fisica")),
  rule(S::Chemistry, Exact("quimica")),
  rule(S::Chemistry, Contains("quimica")),
  rule(S::PhysicalEducation, AllOf(&["educacion", "fisica"])),
];

/// Looser keyword mapping for topics-only entries, which only exist for
/// language, natural sciences and history. "Ciencias" alone is enough here.
pub static LEGACY_SUBJECT_RULES: &[Rule<CurriculumSubject>] = &[
  rule(S::Language, Contains("lenguaje")),
  rule(S::Language, Contains("comunicacion")),
  rule(S::NaturalSciences, ContainsExcept("ciencia", "social")),
  rule(S::NaturalSciences, ContainsExcept("natural", "social")),
  rule(S::History, Contains("historia")),
  rule(S::History, Contains("social")),
  rule(S::History, Contains("geografia")),
];

/// Classify a subject name into a coarse category. Total: defaults to `Other`.
pub fn classify_subject(subject_name: &str) -> SubjectCategory {
  let name = normalize(subject_name);
  let category = best_match(SUBJECT_RULES, &name).unwrap_or(SubjectCategory::Other);
  trace!(target: "topics", %name, %category, "classified subject");
  category
}

/// Map a subject name onto a curriculum asset key, if it names one.
pub fn classify_curriculum_subject(subject_name: &str) -> Option<CurriculumSubject> {
  best_match(CURRICULUM_SUBJECT_RULES, &normalize(subject_name))
}

/// Map a subject name onto a topics-only asset key, if it names one.
pub fn classify_legacy_subject(subject_name: &str) -> Option<CurriculumSubject> {
  best_match(LEGACY_SUBJECT_RULES, &normalize(subject_name))
}

/// Classify a course name into a schooling band. Total: defaults to `Elementary`.
pub fn classify_grade_band(course_name: &str) -> GradeBand {
  let course = normalize(course_name);
  if ["medio", "secundaria", "high"].iter().any(|t| course.contains(t)) {
    GradeBand::Secondary
  } else if ["superior", "universitario", "university"].iter().any(|t| course.contains(t)) {
    GradeBand::Tertiary
  } else {
    GradeBand::Elementary
  }
}

/// Spelling variants of each ordinal, checked from the highest down.
const ORDINALS: [(u8, &[&str]); 8] = [
  (8, &["8vo", "8°", "8º", "octavo"]),
  (7, &["7mo", "7°", "7º", "septimo", "setimo"]),
  (6, &["6to", "6°", "6º", "sexto"]),
  (5, &["5to", "5°", "5º", "quinto"]),
  (4, &["4to", "4°", "4º", "cuarto"]),
  (3, &["3ro", "3°", "3º", "tercero", "tercer"]),
  (2, &["2do", "2°", "2º", "segundo"]),
  (1, &["1ro", "1°", "1º", "primero", "primer"]),
];

fn is_medio(course: &str) -> bool {
  course.contains("medio") || course.split(' ').any(|w| w == "media")
}

/// Map a course name onto one of the twelve canonical grades.
///
/// "medio"/"media" selects the secondary stage, which only has grades 1–4;
/// anything else is read as enseñanza básica.
pub fn classify_grade(course_name: &str) -> Option<Grade> {
  let course = normalize(course_name);
  let stage = if is_medio(&course) { Stage::Medio } else { Stage::Basico };
  let ordinal = ORDINALS
    .iter()
    .find(|(_, variants)| variants.iter().any(|v| course.contains(v)))
    .map(|(n, _)| *n)?;
  Grade::from_parts(stage, ordinal)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compound_history_name_is_not_science() {
    assert_eq!(classify_subject("Historia, Geografía y Ciencias Sociales"), SubjectCategory::History);
    assert_eq!(classify_subject("Ciencias Sociales"), SubjectCategory::History);
    assert_eq!(classify_subject("Social Science"), SubjectCategory::History);
  }

  #[test]
  fn generic_science_never_claims_social_names() {
    assert_eq!(classify_subject("Ciencia Social"), SubjectCategory::History);
    assert_eq!(classify_subject("Estudios Sociales y Ciencias"), SubjectCategory::History);
    assert_eq!(classify_subject("Ciencias y Sociedad Social"), SubjectCategory::History);
    assert_eq!(classify_subject("Ciencias"), SubjectCategory::NaturalScience);
    assert_eq!(classify_subject("Naturaleza"), SubjectCategory::NaturalScience);
  }

  #[test]
  fn legacy_subjects_match_on_single_keywords() {
    assert_eq!(classify_legacy_subject("Ciencias"), Some(CurriculumSubject::NaturalSciences));
    assert_eq!(classify_legacy_subject("Naturaleza"), Some(CurriculumSubject::NaturalSciences));
    assert_eq!(classify_legacy_subject("Comunicación"), Some(CurriculumSubject::Language));
    assert_eq!(classify_legacy_subject("Ciencias Sociales"), Some(CurriculumSubject::History));
    assert_eq!(classify_legacy_subject("Geografía"), Some(CurriculumSubject::History));
    assert_eq!(classify_legacy_subject("Matemáticas"), None);
    // the strict mapping still needs both words
    assert_eq!(classify_curriculum_subject("Ciencias"), None);
  }

  #[test]
  fn exact_sciences_beat_generic_science() {
    assert_eq!(classify_subject("Física"), SubjectCategory::Physics);
    assert_eq!(classify_subject("Química"), SubjectCategory::Chemistry);
    assert_eq!(classify_subject("Biología"), SubjectCategory::Biology);
    assert_eq!(classify_subject("Física 2"), SubjectCategory::Physics);
    assert_eq!(classify_subject("Ciencias Naturales"), SubjectCategory::NaturalScience);
    assert_eq!(classify_subject("Ciencias para la Ciudadanía"), SubjectCategory::NaturalScience);
  }

  #[test]
  fn physical_education_is_not_physics() {
    assert_eq!(classify_subject("Educación Física"), SubjectCategory::Other);
    assert_eq!(classify_curriculum_subject("Educación Física y Salud"), Some(CurriculumSubject::PhysicalEducation));
  }

  #[test]
  fn subject_classification_is_total() {
    assert_eq!(classify_subject(""), SubjectCategory::Other);
    assert_eq!(classify_subject("Asignatura Desconocida"), SubjectCategory::Other);
    assert_eq!(classify_subject("🎨✏️"), SubjectCategory::Other);
    assert_eq!(classify_subject("Matemáticas"), SubjectCategory::Math);
    assert_eq!(classify_subject("Lenguaje y Comunicación"), SubjectCategory::LanguageArts);
  }

  #[test]
  fn ties_go_to_the_earlier_rule() {
    assert_eq!(classify_subject("Física y Química"), SubjectCategory::Physics);
  }

  #[test]
  fn curriculum_subject_keys() {
    assert_eq!(classify_curriculum_subject("Matemáticas"), Some(CurriculumSubject::Mathematics));
    assert_eq!(classify_curriculum_subject("Lenguaje y Literatura"), Some(CurriculumSubject::Language));
    assert_eq!(classify_curriculum_subject("Ciencias Naturales"), Some(CurriculumSubject::NaturalSciences));
    assert_eq!(classify_curriculum_subject("Ciencias para la Ciudadanía"), Some(CurriculumSubject::ScienceForCitizenship));
    assert_eq!(classify_curriculum_subject("Educación Ciudadana"), Some(CurriculumSubject::CivicEducation));
    assert_eq!(classify_curriculum_subject("Filosofía"), Some(CurriculumSubject::Philosophy));
    assert_eq!(
      classify_curriculum_subject("Historia, Geografía y Ciencias Sociales"),
      Some(CurriculumSubject::History)
    );
    assert_eq!(classify_curriculum_subject("Física"), Some(CurriculumSubject::Physics));
    assert_eq!(classify_curriculum_subject("Música"), None);
  }

  #[test]
  fn grades_from_variants() {
    assert_eq!(classify_grade("1ro Básico"), Some(Grade::Basico1));
    assert_eq!(classify_grade("Primero básico"), Some(Grade::Basico1));
    assert_eq!(classify_grade("2° Básico"), Some(Grade::Basico2));
    assert_eq!(classify_grade("7º basico"), Some(Grade::Basico7));
    assert_eq!(classify_grade("Séptimo Básico"), Some(Grade::Basico7));
    assert_eq!(classify_grade("8vo Básico"), Some(Grade::Basico8));
    assert_eq!(classify_grade("4to Medio"), Some(Grade::Medio4));
    assert_eq!(classify_grade("Cuarto Medio"), Some(Grade::Medio4));
    assert_eq!(classify_grade("3° Enseñanza Media"), Some(Grade::Medio3));
    assert_eq!(classify_grade("1ro Medio"), Some(Grade::Medio1));
  }

  #[test]
  fn grades_outside_the_table() {
    assert_eq!(classify_grade("Curso Inexistente"), None);
    assert_eq!(classify_grade("5to Medio"), None);
    assert_eq!(classify_grade(""), None);
  }

  #[test]
  fn grade_bands() {
    assert_eq!(classify_grade_band("2do Medio"), GradeBand::Secondary);
    assert_eq!(classify_grade_band("High School"), GradeBand::Secondary);
    assert_eq!(classify_grade_band("Nivel Universitario"), GradeBand::Tertiary);
    assert_eq!(classify_grade_band("1ro Básico"), GradeBand::Elementary);
    assert_eq!(classify_grade_band(""), GradeBand::Elementary);
  }
}
