//! API Routes
//!
//! Configures the Axum router with all book endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_book_handler, delete_book_by_id_handler, get_book_by_title_handler,
    list_books_by_author_handler, list_books_by_genre_handler, list_books_by_year_handler,
    list_books_handler, root_handler, update_book_by_id_handler, update_book_by_title_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Plain-text greeting
/// - `POST /books` - Create a book
/// - `GET /books` - List all books
/// - `GET /books/:bookTitle` - Get a book by exact title
/// - `GET /books/author/:authorName` - List books by exact author
/// - `GET /books/genre/:bookGenre` - List books by genre suffix
/// - `GET /books/year/:releaseYear` - List books by publication year
/// - `POST /books/:bookId` - Partial update by id
/// - `POST /books/title/:bookTitle` - Partial update by title
/// - `DELETE /books/:bookId` - Delete a book by id
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints. The static segments (author, genre,
    // year, title) take priority over the trailing :bookKey capture, which
    // serves title lookups on GET and id-addressed update/delete.
    Router::new()
        .route("/", get(root_handler))
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route("/books/author/:author_name", get(list_books_by_author_handler))
        .route("/books/genre/:book_genre", get(list_books_by_genre_handler))
        .route("/books/year/:release_year", get(list_books_by_year_handler))
        .route("/books/title/:book_title", post(update_book_by_title_handler))
        .route(
            "/books/:book_key",
            get(get_book_by_title_handler)
                .post(update_book_by_id_handler)
                .delete(delete_book_by_id_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
