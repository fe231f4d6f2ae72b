//! Request DTOs for the book API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::models::Book;

// == Create Request ==
/// Request body for creating a book (POST /books).
///
/// Every field is optional on the wire; missing fields default to an empty
/// string (or 0 for the year) since no field is required to be non-empty.
/// Unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
}

// == Update Patch ==
/// Request body for partial updates (POST /books/:bookId and
/// POST /books/title/:bookTitle).
///
/// Merge semantics: only fields present in the body overwrite the stored
/// document; absent fields are left untouched. The `id` is not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
}

impl BookPatch {
    /// Merges this patch into an existing book, overwriting only the
    /// fields the patch carries.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
        if let Some(year) = self.published_year {
            book.published_year = year;
        }
    }
}
