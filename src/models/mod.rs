//! Request and Response models for the book API
//!
//! This module defines the book document and the DTOs (Data Transfer
//! Objects) used for serializing/deserializing HTTP request and response
//! bodies.

pub mod book;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use book::Book;
pub use requests::{BookPatch, CreateBookRequest};
pub use responses::ErrorResponse;
