//! API Module
//!
//! HTTP handlers and routing for the book REST API.
//!
//! # Endpoints
//! - `GET /` - Plain-text greeting
//! - `POST /books` - Create a book
//! - `GET /books` - List all books
//! - `GET /books/:bookTitle` - Get a book by exact title
//! - `GET /books/author/:authorName` - List books by exact author
//! - `GET /books/genre/:bookGenre` - List books by genre suffix
//! - `GET /books/year/:releaseYear` - List books by publication year
//! - `POST /books/:bookId` - Partial update by id
//! - `POST /books/title/:bookTitle` - Partial update by title
//! - `DELETE /books/:bookId` - Delete a book by id

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
