//! Book catalog: optional decoration of resolved topics with a textbook title.

use serde::Deserialize;

use crate::error::CatalogError;
use crate::util::{first_word, normalize};

/// One textbook of the digital library.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BookEntry {
  pub course: String,
  pub subject: String,
  pub title: String,
  #[serde(default)]
  pub pdf_url: String,
}

/// Read-only source of textbook titles. Lookups are best effort; a missing
/// book is `Ok(None)`, an `Err` means the catalog data itself is unusable.
pub trait BookCatalog: Send + Sync {
  fn find_title(&self, course_name: &str, subject_name: &str) -> Result<Option<String>, CatalogError>;
}

/// Catalog held in memory, usually built from the `[[books]]` config section.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBookCatalog {
  books: Vec<BookEntry>,
}

impl InMemoryBookCatalog {
  pub fn new(books: Vec<BookEntry>) -> Self {
    Self { books }
  }

  pub fn len(&self) -> usize {
    self.books.len()
  }

  pub fn is_empty(&self) -> bool {
    self.books.is_empty()
  }
}

impl BookCatalog for InMemoryBookCatalog {
  /// Exact course match, then the book's subject must contain the first word
  /// of the requested subject ("Lenguaje" finds "Lenguaje y Comunicación").
  fn find_title(&self, course_name: &str, subject_name: &str) -> Result<Option<String>, CatalogError> {
    let wanted = normalize(subject_name);
    let prefix = first_word(&wanted);
    if prefix.is_empty() {
      return Ok(None);
    }
    let hit = self
      .books
      .iter()
      .find(|b| b.course == course_name && normalize(&b.subject).contains(prefix));
    match hit {
      Some(b) if b.title.trim().is_empty() => Err(CatalogError::MalformedBook {
        course: b.course.clone(),
        subject: b.subject.clone(),
        reason: "blank title".into(),
      }),
      Some(b) => Ok(Some(b.title.clone())),
      None => Ok(None),
    }
  }
}
