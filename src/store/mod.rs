//! Store Module
//!
//! In-memory document store for the book collection. Exposes the same
//! operation surface a driver-backed store would: insert, find_all,
//! find_one, find, find_by_id_and_update, find_one_and_update,
//! find_by_id_and_delete.

mod filter;
mod id;
mod store;


use thiserror::Error;

// Re-export public types
pub use filter::BookFilter;
pub use id::ObjectIdGen;
pub use store::BookStore;

// == Store Error ==
/// Failures raised by store operations themselves, as opposed to queries
/// that execute fine but match nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The query could not be executed, e.g. a year parameter that does
    /// not coerce to an integer.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
