//! Generic topic lists by subject category, grade band and language.
//!
//! Last tier of the resolver: used when the curriculum asset has nothing for a
//! course/subject pair, and after internal errors. Never returns an empty list.

use crate::domain::{GradeBand, Language, SubjectCategory};

/// Generic topics for a category and band in the requested language.
///
/// Categories without their own table borrow their parent's (physics,
/// chemistry and biology use natural science), then `Other`'s.
pub fn generate_heuristic(category: SubjectCategory, band: GradeBand, language: Language) -> Vec<String> {
  let list = table(category, band, language)
    .or_else(|| category.parent().and_then(|p| table(p, band, language)))
    .unwrap_or_else(|| other_table(band, language));
  list.iter().map(|s| s.to_string()).collect()
}

fn table(category: SubjectCategory, band: GradeBand, language: Language) -> Option<&'static [&'static str]> {
  use GradeBand::*;
  use Language::*;
  use SubjectCategory::*;

  let list: &'static [&'static str] = match (category, band, language) {
    (Math, Elementary, Es) => MATH_ELEMENTARY_ES,
    (Math, Secondary, Es) => MATH_SECONDARY_ES,
    (Math, Tertiary, Es) => MATH_TERTIARY_ES,
    (Math, Elementary, En) => MATH_ELEMENTARY_EN,
    (Math, Secondary, En) => MATH_SECONDARY_EN,
    (Math, Tertiary, En) => MATH_TERTIARY_EN,
    (LanguageArts, Elementary, Es) => LANGUAGE_ARTS_ELEMENTARY_ES,
    (LanguageArts, Secondary, Es) => LANGUAGE_ARTS_SECONDARY_ES,
    (LanguageArts, Tertiary, Es) => LANGUAGE_ARTS_TERTIARY_ES,
    (LanguageArts, Elementary, En) => LANGUAGE_ARTS_ELEMENTARY_EN,
    (LanguageArts, Secondary, En) => LANGUAGE_ARTS_SECONDARY_EN,
    (LanguageArts, Tertiary, En) => LANGUAGE_ARTS_TERTIARY_EN,
    (NaturalScience, Elementary, Es) => NATURAL_SCIENCE_ELEMENTARY_ES,
    (NaturalScience, Secondary, Es) => NATURAL_SCIENCE_SECONDARY_ES,
    (NaturalScience, Tertiary, Es) => NATURAL_SCIENCE_TERTIARY_ES,
    (NaturalScience, Elementary, En) => NATURAL_SCIENCE_ELEMENTARY_EN,
    (NaturalScience, Secondary, En) => NATURAL_SCIENCE_SECONDARY_EN,
    (NaturalScience, Tertiary, En) => NATURAL_SCIENCE_TERTIARY_EN,
    (History, Elementary, Es) => HISTORY_ELEMENTARY_ES,
    (History, Secondary, Es) => HISTORY_SECONDARY_ES,
    (History, Tertiary, Es) => HISTORY_TERTIARY_ES,
    (History, Elementary, En) => HISTORY_ELEMENTARY_EN,
    (History, Secondary, En) => HISTORY_SECONDARY_EN,
    (History, Tertiary, En) => HISTORY_TERTIARY_EN,
    (Other, band, language) => other_table(band, language),
    (Physics | Chemistry | Biology, _, _) => return None,
  };
  Some(list)
}

fn other_table(band: GradeBand, language: Language) -> &'static [&'static str] {
  match (band, language) {
    (GradeBand::Elementary, Language::Es) => OTHER_ELEMENTARY_ES,
    (GradeBand::Secondary, Language::Es) => OTHER_SECONDARY_ES,
    (GradeBand::Tertiary, Language::Es) => OTHER_TERTIARY_ES,
    (GradeBand::Elementary, Language::En) => OTHER_ELEMENTARY_EN,
    (GradeBand::Secondary, Language::En) => OTHER_SECONDARY_EN,
    (GradeBand::Tertiary, Language::En) => OTHER_TERTIARY_EN,
  }
}

// --- Tables ---

const MATH_ELEMENTARY_ES: &[&str] = &[
  "Números naturales", "Suma y resta", "Multiplicación", "División", "Fracciones", "Decimales",
  "Geometría básica", "Medidas", "Patrones numéricos", "Valor posicional",
  "Comparación de números", "Problemas de lógica", "Perímetro y área", "Figuras 2D y 3D",
  "Gráficos de barras",
];
const MATH_SECONDARY_ES: &[&str] = &[
  "Álgebra", "Ecuaciones lineales", "Sistemas de ecuaciones", "Funciones",
  "Funciones cuadráticas", "Trigonometría", "Geometría analítica", "Vectores", "Matrices",
  "Determinantes", "Probabilidad", "Estadística", "Logaritmos", "Exponenciales", "Límites",
  "Derivadas", "Integrales", "Números complejos",
];
const MATH_TERTIARY_ES: &[&str] = &[
  "Cálculo diferencial", "Cálculo integral", "Ecuaciones diferenciales", "Álgebra lineal",
  "Análisis matemático", "Topología", "Probabilidad avanzada", "Estadística inferencial",
  "Métodos numéricos", "Optimización",
];
const LANGUAGE_ARTS_ELEMENTARY_ES: &[&str] = &[
  "Comprensión lectora", "Escritura de oraciones", "Vocales y consonantes",
  "Lectura de cuentos", "Sustantivos y adjetivos", "Verbos y tiempos verbales",
  "Signos de puntuación", "Sinónimos y antónimos", "Textos narrativos", "Textos descriptivos",
  "Poemas y rimas", "Fábulas y leyendas", "Uso de mayúsculas", "Orden alfabético",
  "Escritura creativa",
];
const LANGUAGE_ARTS_SECONDARY_ES: &[&str] = &[
  "Análisis literario", "Figuras retóricas", "Géneros literarios", "Textos argumentativos",
  "Ensayos", "Crónicas", "Reseñas literarias", "Movimientos literarios",
  "Narrativa contemporánea", "Poesía lírica", "Teatro y dramaturgia", "Oratoria",
  "Redacción formal", "Investigación", "Medios de comunicación", "Análisis crítico",
  "Coherencia y cohesión",
];
const LANGUAGE_ARTS_TERTIARY_ES: &[&str] = &[
  "Teoría literaria", "Semiótica", "Lingüística", "Morfosintaxis", "Fonética y fonología",
  "Dialectología", "Literatura universal", "Crítica literaria", "Estilística",
  "Análisis del discurso",
];
const NATURAL_SCIENCE_ELEMENTARY_ES: &[&str] = &[
  "Los seres vivos", "Partes del cuerpo humano", "Los cinco sentidos",
  "Animales y sus hábitats", "Plantas y sus partes", "El ciclo del agua",
  "Estados de la materia", "Luz y sombras", "El sistema solar", "Cadenas alimentarias",
  "Ecosistemas", "Energía y movimiento", "Clasificación de animales", "El medio ambiente",
  "Recursos naturales",
];
const NATURAL_SCIENCE_SECONDARY_ES: &[&str] = &[
  "Célula y organismos", "Genética", "Evolución", "Ecología", "Anatomía humana", "Fisiología",
  "Química orgánica", "Química inorgánica", "Reacciones químicas", "Termodinámica", "Mecánica",
  "Ondas", "Electricidad y magnetismo", "Óptica", "Física moderna", "Biología molecular",
];
const NATURAL_SCIENCE_TERTIARY_ES: &[&str] = &[
  "Bioquímica", "Microbiología", "Inmunología", "Biotecnología", "Física cuántica",
  "Relatividad", "Astrofísica", "Química analítica", "Nanotecnología", "Genómica",
  "Neurociencia",
];
const HISTORY_ELEMENTARY_ES: &[&str] = &[
  "Mi familia y comunidad", "Normas de convivencia", "Derechos de los niños",
  "Símbolos patrios", "Pueblos originarios", "Fiestas y tradiciones", "Ubicación geográfica",
  "Regiones de Chile", "Zonas climáticas", "Recursos naturales", "Trabajos y oficios",
  "Historia personal", "Civilizaciones antiguas", "Descubrimiento de América", "Colonia",
];
const HISTORY_SECONDARY_ES: &[&str] = &[
  "Historia universal", "Revolución Francesa", "Revolución Industrial",
  "Primera Guerra Mundial", "Segunda Guerra Mundial", "Guerra Fría",
  "Independencia de América", "Historia de Chile", "Geografía física", "Geografía humana",
  "Economía", "Globalización", "Derechos humanos", "Democracia y ciudadanía",
  "Problemas ambientales", "Geopolítica",
];
const HISTORY_TERTIARY_ES: &[&str] = &[
  "Historiografía", "Filosofía política", "Economía internacional",
  "Relaciones internacionales", "Antropología", "Sociología", "Pensamiento político",
  "Historia del arte", "Patrimonio cultural",
];
const OTHER_ELEMENTARY_ES: &[&str] = &[
  "Conceptos básicos", "Fundamentos", "Introducción al tema", "Aplicaciones prácticas",
  "Ejercicios guiados", "Repaso general",
];
const OTHER_SECONDARY_ES: &[&str] = &[
  "Teoría", "Práctica", "Análisis", "Síntesis", "Evaluación", "Aplicaciones",
  "Estudios de caso", "Proyectos",
];
const OTHER_TERTIARY_ES: &[&str] = &[
  "Investigación", "Metodología", "Análisis avanzado", "Seminario", "Tesis", "Publicaciones",
];
const MATH_ELEMENTARY_EN: &[&str] = &[
  "Natural numbers", "Addition and subtraction", "Multiplication", "Division", "Fractions",
  "Decimals", "Basic geometry", "Measurements", "Number patterns", "Place value",
  "Number comparison", "Logic problems", "Perimeter and area", "2D and 3D shapes",
  "Bar graphs",
];
const MATH_SECONDARY_EN: &[&str] = &[
  "Algebra", "Linear equations", "Systems of equations", "Functions", "Quadratic functions",
  "Trigonometry", "Analytic geometry", "Vectors", "Matrices", "Determinants", "Probability",
  "Statistics", "Logarithms", "Exponentials", "Limits", "Derivatives", "Integrals",
  "Complex numbers",
];
const MATH_TERTIARY_EN: &[&str] = &[
  "Differential calculus", "Integral calculus", "Differential equations", "Linear algebra",
  "Mathematical analysis", "Topology", "Advanced probability", "Inferential statistics",
  "Numerical methods", "Optimization",
];
const LANGUAGE_ARTS_ELEMENTARY_EN: &[&str] = &[
  "Reading comprehension", "Sentence writing", "Vowels and consonants", "Story reading",
  "Nouns and adjectives", "Verbs and tenses", "Punctuation marks", "Synonyms and antonyms",
  "Narrative texts", "Descriptive texts", "Poems and rhymes", "Fables and legends",
  "Capital letters", "Alphabetical order", "Creative writing",
];
const LANGUAGE_ARTS_SECONDARY_EN: &[&str] = &[
  "Literary analysis", "Rhetorical figures", "Literary genres", "Argumentative texts",
  "Essays", "Chronicles", "Book reviews", "Literary movements", "Contemporary narrative",
  "Lyric poetry", "Theater and drama", "Public speaking", "Formal writing", "Research",
  "Mass media", "Critical analysis", "Coherence and cohesion",
];
const LANGUAGE_ARTS_TERTIARY_EN: &[&str] = &[
  "Literary theory", "Semiotics", "Linguistics", "Morphosyntax", "Phonetics and phonology",
  "Dialectology", "World literature", "Literary criticism", "Stylistics", "Discourse analysis",
];
const NATURAL_SCIENCE_ELEMENTARY_EN: &[&str] = &[
  "Living things", "Human body parts", "The five senses", "Animals and habitats",
  "Plants and their parts", "The water cycle", "States of matter", "Light and shadows",
  "The solar system", "Food chains", "Ecosystems", "Energy and motion",
  "Animal classification", "The environment", "Natural resources",
];
const NATURAL_SCIENCE_SECONDARY_EN: &[&str] = &[
  "Cell and organisms", "Genetics", "Evolution", "Ecology", "Human anatomy", "Physiology",
  "Organic chemistry", "Inorganic chemistry", "Chemical reactions", "Thermodynamics",
  "Mechanics", "Waves", "Electricity and magnetism", "Optics", "Modern physics",
  "Molecular biology",
];
const NATURAL_SCIENCE_TERTIARY_EN: &[&str] = &[
  "Biochemistry", "Microbiology", "Immunology", "Biotechnology", "Quantum physics",
  "Relativity", "Astrophysics", "Analytical chemistry", "Nanotechnology", "Genomics",
  "Neuroscience",
];
const HISTORY_ELEMENTARY_EN: &[&str] = &[
  "My family and community", "Rules of coexistence", "Children's rights", "National symbols",
  "Indigenous peoples", "Holidays and traditions", "Geographic location", "Regions",
  "Climate zones", "Natural resources", "Jobs and occupations", "Personal history",
  "Ancient civilizations", "Discovery of America", "Colonial period",
];
const HISTORY_SECONDARY_EN: &[&str] = &[
  "World history", "French Revolution", "Industrial Revolution", "World War I", "World War II",
  "Cold War", "American independence", "National history", "Physical geography",
  "Human geography", "Economics", "Globalization", "Human rights", "Democracy and citizenship",
  "Environmental issues", "Geopolitics",
];
const HISTORY_TERTIARY_EN: &[&str] = &[
  "Historiography", "Political philosophy", "International economics",
  "International relations", "Anthropology", "Sociology", "Political thought", "Art history",
  "Cultural heritage",
];
const OTHER_ELEMENTARY_EN: &[&str] = &[
  "Basic concepts", "Fundamentals", "Topic introduction", "Practical applications",
  "Guided exercises", "General review",
];
const OTHER_SECONDARY_EN: &[&str] = &[
  "Theory", "Practice", "Analysis", "Synthesis", "Evaluation", "Applications", "Case studies",
  "Projects",
];
const OTHER_TERTIARY_EN: &[&str] = &[
  "Research", "Methodology", "Advanced analysis", "Seminar", "Thesis", "Publications",
];

#[cfg(test)]
mod tests {
  use super::*;

  const CATEGORIES: [SubjectCategory; 8] = [
    SubjectCategory::Math,
    SubjectCategory::LanguageArts,
    SubjectCategory::NaturalScience,
    SubjectCategory::Physics,
    SubjectCategory::Chemistry,
    SubjectCategory::Biology,
    SubjectCategory::History,
    SubjectCategory::Other,
  ];

  #[test]
  fn every_combination_is_non_empty() {
    for c in CATEGORIES {
      for b in [GradeBand::Elementary, GradeBand::Secondary, GradeBand::Tertiary] {
        for l in [Language::Es, Language::En] {
          assert!(!generate_heuristic(c, b, l).is_empty(), "{c}/{b}/{l}");
        }
      }
    }
  }

  #[test]
  fn other_elementary_english() {
    let topics = generate_heuristic(SubjectCategory::Other, GradeBand::Elementary, Language::En);
    assert_eq!(topics[0], "Basic concepts");
    assert_eq!(topics[1], "Fundamentals");
  }

  #[test]
  fn specific_sciences_borrow_natural_science() {
    let physics = generate_heuristic(SubjectCategory::Physics, GradeBand::Secondary, Language::Es);
    let science = generate_heuristic(SubjectCategory::NaturalScience, GradeBand::Secondary, Language::Es);
    assert_eq!(physics, science);
  }

  #[test]
  fn languages_differ() {
    let es = generate_heuristic(SubjectCategory::Math, GradeBand::Elementary, Language::Es);
    let en = generate_heuristic(SubjectCategory::Math, GradeBand::Elementary, Language::En);
    assert_eq!(es[0], "Números naturales");
    assert_eq!(en[0], "Natural numbers");
    assert_eq!(es.len(), en.len());
  }
}
