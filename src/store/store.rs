//! Book Store Module
//!
//! Main in-memory document store for the book collection. Keeps documents
//! in a HashMap keyed by id, plus an insertion-order index so listings are
//! stable across calls.

use std::collections::HashMap;

use crate::models::{Book, BookPatch, CreateBookRequest};
use crate::store::{BookFilter, ObjectIdGen, StoreResult};

// == Book Store ==
/// In-memory store holding all book documents.
#[derive(Debug, Default)]
pub struct BookStore {
    /// Documents keyed by id
    books: HashMap<String, Book>,
    /// Ids in insertion order, for stable find/find_all results
    order: Vec<String>,
    /// Id generator for inserts
    ids: ObjectIdGen,
}

impl BookStore {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Inserts a new document, assigning it a fresh id.
    ///
    /// Returns the created book including its generated id.
    pub fn insert(&mut self, new_book: CreateBookRequest) -> Book {
        let id = self.ids.next_id();
        let book = Book {
            id: id.clone(),
            title: new_book.title,
            author: new_book.author,
            genre: new_book.genre,
            published_year: new_book.published_year,
        };

        self.books.insert(id.clone(), book.clone());
        self.order.push(id);
        book
    }

    // == Find All ==
    /// Returns every document, in insertion order.
    pub fn find_all(&self) -> Vec<Book> {
        self.order
            .iter()
            .filter_map(|id| self.books.get(id).cloned())
            .collect()
    }

    // == Find One ==
    /// Returns the first document matching the filter, if any.
    pub fn find_one(&self, filter: &BookFilter) -> StoreResult<Option<Book>> {
        let matcher = filter.resolve()?;
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.books.get(id))
            .find(|book| matcher.matches(book))
            .cloned())
    }

    // == Find ==
    /// Returns all documents matching the filter, in insertion order.
    pub fn find(&self, filter: &BookFilter) -> StoreResult<Vec<Book>> {
        let matcher = filter.resolve()?;
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.books.get(id))
            .filter(|book| matcher.matches(book))
            .cloned()
            .collect())
    }

    // == Find By Id And Update ==
    /// Applies a partial update to the document with the given id.
    ///
    /// Returns the updated document, or None if the id matches nothing.
    pub fn find_by_id_and_update(&mut self, id: &str, patch: &BookPatch) -> Option<Book> {
        let book = self.books.get_mut(id)?;
        patch.apply_to(book);
        Some(book.clone())
    }

    // == Find One And Update ==
    /// Applies a partial update to the first document matching the filter.
    ///
    /// Returns the updated document, or None if nothing matches.
    pub fn find_one_and_update(
        &mut self,
        filter: &BookFilter,
        patch: &BookPatch,
    ) -> StoreResult<Option<Book>> {
        let matcher = filter.resolve()?;
        let target = self
            .order
            .iter()
            .filter_map(|id| self.books.get(id))
            .find(|book| matcher.matches(book))
            .map(|book| book.id.clone());

        Ok(target.and_then(|id| self.find_by_id_and_update(&id, patch)))
    }

    // == Find By Id And Delete ==
    /// Removes the document with the given id.
    ///
    /// Returns the removed document, or None if the id matches nothing.
    pub fn find_by_id_and_delete(&mut self, id: &str) -> Option<Book> {
        let removed = self.books.remove(id)?;
        self.order.retain(|stored| stored != id);
        Some(removed)
    }

    // == Length ==
    /// Returns the current number of documents.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
