//! Bookshelf - A minimal HTTP API for managing a book collection
//!
//! Exposes CRUD operations over a single in-memory book store.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
