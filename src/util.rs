//! Small utility helpers used across modules.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
/// This is intentionally simple (no nested/conditional logic).
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// Canonical matching form of a free-text course or subject name.
///
/// Lower-cases, decomposes (NFD) and drops combining marks, then collapses
/// whitespace runs into single spaces and trims. "  Matemáticas  " and
/// "matematicas" compare equal after this.
pub fn normalize(s: &str) -> String {
  let folded: String = s
    .to_lowercase()
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .collect();
  folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First space-separated word of an already-normalized string.
pub fn first_word(normalized: &str) -> &str {
  normalized.split(' ').next().unwrap_or("")
}

/// Log-safe truncation for large strings, on a char boundary.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let total = s.chars().count();
    let head: String = s.chars().take(max).collect();
    format!("{}… ({} chars total)", head, total)
  }
}
