//! Book Document Model
//!
//! Defines the book document stored in and returned by the store.

use serde::{Deserialize, Serialize};

// == Book ==
/// A single book document.
///
/// The `id` is assigned by the store on insert and never changes afterwards.
/// Wire format is camelCase JSON (`publishedYear`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier, store-assigned
    pub id: String,
    /// Title, also usable as an alternate (non-unique) lookup key
    pub title: String,
    /// Author name, matched exactly in author lookups
    pub author: String,
    /// Genre, matched by case-insensitive suffix in genre lookups
    pub genre: String,
    /// Publication year, matched by exact equality
    pub published_year: i32,
}
