//! Student context for downstream content generation: how simple the language
//! should be, what kind of examples to use, and how much to pack per section,
//! by grade. Also renders topic descriptions for display.

use serde::Serialize;

use crate::classify::classify_grade;
use crate::config::Prompts;
use crate::domain::{Grade, Language, TopicDescription};
use crate::util::{fill_template, normalize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
  BasicoInicial,
  BasicoIntermedio,
  BasicoAvanzado,
  Media,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
  MuySimple,
  Simple,
  Intermedio,
  Avanzado,
  Tecnico,
}

impl Complexity {
  pub fn as_str(&self) -> &'static str {
    match self {
      Complexity::MuySimple => "muy_simple",
      Complexity::Simple => "simple",
      Complexity::Intermedio => "intermedio",
      Complexity::Avanzado => "avanzado",
      Complexity::Tecnico => "tecnico",
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentContext {
  /// Canonical grade key, or the normalized input when no grade matched.
  pub course_name: String,
  pub course_level: CourseLevel,
  pub approximate_age: u8,
  pub complexity_level: Complexity,
  pub language_style: &'static str,
  pub examples_style: &'static str,
  pub content_guidelines: &'static str,
}

struct Profile {
  level: CourseLevel,
  ages: (u8, u8),
  complexity: Complexity,
  language_style: &'static str,
  examples_style: &'static str,
  content_guidelines: &'static str,
}

// Grades come in pairs (1-2, 3-4, ...); the first of a pair gets the lower age.
const INICIAL: Profile = Profile {
  level: CourseLevel::BasicoInicial,
  ages: (6, 7),
  complexity: Complexity::MuySimple,
  language_style: "Usa oraciones cortas y simples. Vocabulario muy básico, cotidiano y familiar para niños pequeños. Evita tecnicismos.",
  examples_style: "Ejemplos con juguetes, mascotas, familia, colores, frutas, números pequeños y situaciones del hogar o escuela.",
  content_guidelines: "Contenido muy visual y concreto. Usa analogías con cosas que los niños conocen. Incluye elementos lúdicos y divertidos. Máximo 3-4 conceptos por sección.",
};

const INTERMEDIO: Profile = Profile {
  level: CourseLevel::BasicoIntermedio,
  ages: (8, 9),
  complexity: Complexity::Simple,
  language_style: "Oraciones simples pero pueden ser más largas. Introduce algunos términos nuevos explicándolos siempre.",
  examples_style: "Ejemplos con situaciones escolares, deportes, naturaleza, animales, y vida cotidiana. Puede incluir números más grandes.",
  content_guidelines: "Contenido accesible pero más estructurado. Introduce conceptos gradualmente. Usa comparaciones y relaciones simples. Máximo 4-5 conceptos por sección.",
};

const AVANZADO_5_6: Profile = Profile {
  level: CourseLevel::BasicoAvanzado,
  ages: (10, 11),
  complexity: Complexity::Intermedio,
  language_style: "Lenguaje más formal. Puede usar terminología específica del área con explicaciones. Oraciones compuestas.",
  examples_style: "Ejemplos con situaciones reales, historia, geografía, fenómenos naturales, tecnología básica y problemas matemáticos más complejos.",
  content_guidelines: "Contenido más profundo y analítico. Introduce relaciones causa-efecto. Puede incluir datos numéricos y estadísticas simples. 5-6 conceptos por sección.",
};

const AVANZADO_7_8: Profile = Profile {
  level: CourseLevel::BasicoAvanzado,
  ages: (12, 13),
  complexity: Complexity::Avanzado,
  language_style: "Lenguaje formal y técnico cuando corresponda. Vocabulario amplio con terminología específica de cada disciplina.",
  examples_style: "Ejemplos con fenómenos científicos, procesos históricos, análisis literarios, problemas matemáticos abstractos y situaciones de la vida real.",
  content_guidelines: "Contenido analítico y crítico. Introduce múltiples perspectivas. Incluye datos, fechas, fórmulas básicas. Puede tener 6-7 conceptos por sección.",
};

const MEDIA_1_2: Profile = Profile {
  level: CourseLevel::Media,
  ages: (14, 15),
  complexity: Complexity::Avanzado,
  language_style: "Lenguaje académico y técnico. Terminología especializada sin necesidad de explicar cada término básico.",
  examples_style: "Ejemplos científicos, históricos complejos, análisis de textos, problemas matemáticos con variables, aplicaciones tecnológicas.",
  content_guidelines: "Contenido profundo y especializado. Análisis crítico y comparativo. Incluye fórmulas, teorías, contexto histórico detallado. 7-8 conceptos por sección.",
};

const MEDIA_3_4: Profile = Profile {
  level: CourseLevel::Media,
  ages: (16, 17),
  complexity: Complexity::Tecnico,
  language_style: "Lenguaje académico avanzado y especializado. Terminología técnica y científica. Registro formal.",
  examples_style: "Ejemplos universitarios/preuniversitarios, investigaciones científicas, análisis de obras complejas, problemas matemáticos avanzados, casos de estudio.",
  content_guidelines: "Contenido de nivel preuniversitario. Pensamiento crítico y abstracto. Incluye teorías, demostraciones, análisis profundos. Sin límite de conceptos, priorizar profundidad.",
};

fn profile(grade: Grade) -> &'static Profile {
  match grade {
    Grade::Basico1 | Grade::Basico2 => &INICIAL,
    Grade::Basico3 | Grade::Basico4 => &INTERMEDIO,
    Grade::Basico5 | Grade::Basico6 => &AVANZADO_5_6,
    Grade::Basico7 | Grade::Basico8 => &AVANZADO_7_8,
    Grade::Medio1 | Grade::Medio2 => &MEDIA_1_2,
    Grade::Medio3 | Grade::Medio4 => &MEDIA_3_4,
  }
}

/// Context for a course name. Unknown courses get a middle-of-the-road profile.
pub fn content_context(course_name: &str) -> ContentContext {
  let Some(grade) = classify_grade(course_name) else {
    return ContentContext {
      course_name: normalize(course_name),
      course_level: CourseLevel::BasicoIntermedio,
      approximate_age: 10,
      complexity_level: Complexity::Intermedio,
      language_style: "Lenguaje claro y accesible con terminología apropiada.",
      examples_style: "Ejemplos variados y relacionados con la vida cotidiana.",
      content_guidelines: "Contenido equilibrado entre accesibilidad y profundidad.",
    };
  };

  let p = profile(grade);
  ContentContext {
    course_name: grade.key().to_string(),
    course_level: p.level,
    approximate_age: if grade.ordinal() % 2 == 1 { p.ages.0 } else { p.ages.1 },
    complexity_level: p.complexity,
    language_style: p.language_style,
    examples_style: p.examples_style,
    content_guidelines: p.content_guidelines,
  }
}

/// Render the adaptation block for a prompt in `language`.
pub fn prompt_instructions(ctx: &ContentContext, language: Language, prompts: &Prompts) -> String {
  let tpl = match language {
    Language::Es => &prompts.instructions_es,
    Language::En => &prompts.instructions_en,
  };
  let age = ctx.approximate_age.to_string();
  fill_template(
    tpl,
    &[
      ("course", ctx.course_name.as_str()),
      ("age", age.as_str()),
      ("complexity", ctx.complexity_level.as_str()),
      ("language_style", ctx.language_style),
      ("examples_style", ctx.examples_style),
      ("content_guidelines", ctx.content_guidelines),
    ],
  )
}

/// Markdown snippet shown next to a selectable topic.
pub fn format_topic_description(d: &TopicDescription) -> String {
  format!("**{}**\n📚 {}\n\n{}", d.topic, d.unit, d.description)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ages_follow_grades() {
    assert_eq!(content_context("1ro Básico").approximate_age, 6);
    assert_eq!(content_context("2do Básico").approximate_age, 7);
    assert_eq!(content_context("6to Básico").approximate_age, 11);
    assert_eq!(content_context("7mo Básico").approximate_age, 12);
    assert_eq!(content_context("1ro Medio").approximate_age, 14);
    assert_eq!(content_context("4to Medio").approximate_age, 17);
  }

  #[test]
  fn levels_and_complexity() {
    let c = content_context("Primero Básico");
    assert_eq!(c.course_name, "1ro basico");
    assert_eq!(c.course_level, CourseLevel::BasicoInicial);
    assert_eq!(c.complexity_level, Complexity::MuySimple);

    let c = content_context("3° Medio");
    assert_eq!(c.course_level, CourseLevel::Media);
    assert_eq!(c.complexity_level, Complexity::Tecnico);
  }

  #[test]
  fn unknown_course_gets_default_profile() {
    let c = content_context("  Taller de Robótica ");
    assert_eq!(c.course_name, "taller de robotica");
    assert_eq!(c.approximate_age, 10);
    assert_eq!(c.complexity_level, Complexity::Intermedio);
  }

  #[test]
  fn instructions_are_filled() {
    let ctx = content_context("8vo Básico");
    let prompts = Prompts::default();
    let es = prompt_instructions(&ctx, Language::Es, &prompts);
    assert!(es.contains("- Curso: 8vo basico"));
    assert!(es.contains("estudiante de 13 años"));
    assert!(!es.contains('{'));
    let en = prompt_instructions(&ctx, Language::En, &prompts);
    assert!(en.contains("a 13-year-old student"));
    assert!(en.contains("Required complexity level: avanzado"));
  }

  #[test]
  fn description_markdown() {
    let d = TopicDescription { topic: "Patrones".into(), unit: "Unidad 1".into(), description: "Secuencias.".into() };
    assert_eq!(format_topic_description(&d), "**Patrones**\n📚 Unidad 1\n\nSecuencias.");
  }
}
