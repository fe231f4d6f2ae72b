//! API Handlers
//!
//! HTTP request handlers for each book endpoint. Every handler issues one
//! logical store query and maps the result to a status code and JSON body:
//! an empty lookup is 404 where the route demands it, a store failure is
//! always 500.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{Book, BookPatch, CreateBookRequest};
use crate::store::{BookFilter, BookStore};

/// Application state shared across all handlers.
///
/// Contains the book store wrapped in Arc<RwLock<>> for thread-safe
/// access; it is injected at router construction, never a global.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe book store
    pub store: Arc<RwLock<BookStore>>,
}

impl AppState {
    /// Creates a new AppState with the given book store.
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BookStore::new())
    }
}

/// Handler for GET /
///
/// Plain-text liveness greeting.
pub async fn root_handler() -> &'static str {
    "Hello, Bookshelf Server!"
}

/// Handler for POST /books
///
/// Inserts a new book and returns it with its generated id.
pub async fn create_book_handler(
    State(state): State<AppState>,
    Json(new_book): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>)> {
    let mut store = state.store.write().await;
    let book = store.insert(new_book);

    Ok((StatusCode::CREATED, Json(book)))
}

/// Handler for GET /books
///
/// Returns every book; an empty collection is still a 200.
pub async fn list_books_handler(State(state): State<AppState>) -> Result<Json<Vec<Book>>> {
    let store = state.store.read().await;

    Ok(Json(store.find_all()))
}

/// Handler for GET /books/:bookTitle
///
/// Exact-title lookup of a single book.
pub async fn get_book_by_title_handler(
    State(state): State<AppState>,
    Path(book_title): Path<String>,
) -> Result<Json<Book>> {
    let store = state.store.read().await;
    let book = store
        .find_one(&BookFilter::Title(book_title))?
        .ok_or_else(|| ApiError::NotFound("Book not found.".to_string()))?;

    Ok(Json(book))
}

/// Handler for GET /books/author/:authorName
///
/// Exact-author lookup; an author with no books yields an empty 200 array.
pub async fn list_books_by_author_handler(
    State(state): State<AppState>,
    Path(author_name): Path<String>,
) -> Result<Json<Vec<Book>>> {
    let store = state.store.read().await;
    let books = store.find(&BookFilter::Author(author_name))?;

    Ok(Json(books))
}

/// Handler for GET /books/genre/:bookGenre
///
/// Case-insensitive suffix match on genre; no matches is a 404.
pub async fn list_books_by_genre_handler(
    State(state): State<AppState>,
    Path(book_genre): Path<String>,
) -> Result<Json<Vec<Book>>> {
    let store = state.store.read().await;
    let books = store.find(&BookFilter::GenreSuffix(book_genre))?;

    if books.is_empty() {
        return Err(ApiError::NotFound(
            "Books not found for the given genre.".to_string(),
        ));
    }
    Ok(Json(books))
}

/// Handler for GET /books/year/:releaseYear
///
/// Exact publishedYear match; the raw parameter is coerced by the store,
/// so a non-numeric year is a 500 while a year with no books is a 404.
pub async fn list_books_by_year_handler(
    State(state): State<AppState>,
    Path(release_year): Path<String>,
) -> Result<Json<Vec<Book>>> {
    let store = state.store.read().await;
    let books = store.find(&BookFilter::Year(release_year))?;

    if books.is_empty() {
        return Err(ApiError::NotFound(
            "No book found for the given year.".to_string(),
        ));
    }
    Ok(Json(books))
}

/// Handler for POST /books/:bookId
///
/// Partial update by id with merge semantics; returns the updated book.
pub async fn update_book_by_id_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>> {
    let mut store = state.store.write().await;
    let book = store
        .find_by_id_and_update(&book_id, &patch)
        .ok_or_else(|| ApiError::NotFound("Book does not exist.".to_string()))?;

    Ok(Json(book))
}

/// Handler for POST /books/title/:bookTitle
///
/// Partial update of the first book with the given title.
pub async fn update_book_by_title_handler(
    State(state): State<AppState>,
    Path(book_title): Path<String>,
    Json(patch): Json<BookPatch>,
) -> Result<Json<Book>> {
    let mut store = state.store.write().await;
    let book = store
        .find_one_and_update(&BookFilter::Title(book_title), &patch)?
        .ok_or_else(|| ApiError::NotFound("No book found.".to_string()))?;

    Ok(Json(book))
}

/// Handler for DELETE /books/:bookId
///
/// Removes a book by id and returns the deleted document.
pub async fn delete_book_by_id_handler(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<Book>> {
    let mut store = state.store.write().await;
    let book = store
        .find_by_id_and_delete(&book_id)
        .ok_or_else(|| ApiError::NotFound("Book not found.".to_string()))?;

    Ok(Json(book))
}
