//! Query Filter Module
//!
//! Typed query filters for the book store, replacing the ad-hoc filter
//! documents a driver-backed store would take.

use crate::models::Book;
use crate::store::{StoreError, StoreResult};

// == Book Filter ==
/// A query against the book collection.
///
/// The year variant carries the raw path parameter; coercion to an integer
/// happens inside the store when the filter is resolved, so a non-numeric
/// year surfaces as a query error rather than an empty result.
#[derive(Debug, Clone)]
pub enum BookFilter {
    /// Exact title match
    Title(String),
    /// Exact author match
    Author(String),
    /// Case-insensitive suffix match on genre
    GenreSuffix(String),
    /// Exact publishedYear match, coerced from the raw parameter
    Year(String),
}

impl BookFilter {
    // == Resolve ==
    /// Validates and normalizes the filter into a matchable form.
    pub(crate) fn resolve(&self) -> StoreResult<ResolvedFilter<'_>> {
        match self {
            BookFilter::Title(title) => Ok(ResolvedFilter::Title(title)),
            BookFilter::Author(author) => Ok(ResolvedFilter::Author(author)),
            BookFilter::GenreSuffix(suffix) => {
                Ok(ResolvedFilter::GenreSuffix(suffix.to_lowercase()))
            }
            BookFilter::Year(raw) => raw
                .trim()
                .parse::<i32>()
                .map(ResolvedFilter::Year)
                .map_err(|_| {
                    StoreError::InvalidQuery(format!("'{}' is not a valid year", raw))
                }),
        }
    }
}

// == Resolved Filter ==
/// A filter with its parameters coerced, ready to match documents.
#[derive(Debug)]
pub(crate) enum ResolvedFilter<'a> {
    Title(&'a str),
    Author(&'a str),
    /// Suffix already lowercased
    GenreSuffix(String),
    Year(i32),
}

impl ResolvedFilter<'_> {
    // == Matches ==
    /// Checks whether a book satisfies the filter.
    pub(crate) fn matches(&self, book: &Book) -> bool {
        match self {
            ResolvedFilter::Title(title) => book.title == *title,
            ResolvedFilter::Author(author) => book.author == *author,
            ResolvedFilter::GenreSuffix(suffix) => {
                book.genre.to_lowercase().ends_with(suffix)
            }
            ResolvedFilter::Year(year) => book.published_year == *year,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, genre: &str, year: i32) -> Book {
        Book {
            id: "x".to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year: year,
        }
    }

    #[test]
    fn test_title_filter_exact_match() {
        let raw = BookFilter::Title("Dune".to_string());
        let filter = raw.resolve().unwrap();
        assert!(filter.matches(&book("Dune", "Frank Herbert", "Science Fiction", 1965)));
        assert!(!filter.matches(&book("Dune Messiah", "Frank Herbert", "Science Fiction", 1969)));
    }

    #[test]
    fn test_author_filter_exact_match() {
        let raw = BookFilter::Author("Frank Herbert".to_string());
        let filter = raw.resolve().unwrap();
        assert!(filter.matches(&book("Dune", "Frank Herbert", "Science Fiction", 1965)));
        assert!(!filter.matches(&book("Dune", "frank herbert", "Science Fiction", 1965)));
    }

    #[test]
    fn test_genre_filter_is_case_insensitive_suffix() {
        let stored = book("Sapiens", "Yuval Noah Harari", "Non-Fiction", 2011);

        let lower_raw = BookFilter::GenreSuffix("fiction".to_string());
        let upper_raw = BookFilter::GenreSuffix("FICTION".to_string());
        let wrong_raw = BookFilter::GenreSuffix("Nonfic".to_string());
        let lower = lower_raw.resolve().unwrap();
        let upper = upper_raw.resolve().unwrap();
        let wrong = wrong_raw.resolve().unwrap();

        assert!(lower.matches(&stored));
        assert!(upper.matches(&stored));
        assert!(!wrong.matches(&stored));
    }

    #[test]
    fn test_year_filter_coerces_parameter() {
        let raw = BookFilter::Year("1965".to_string());
        let filter = raw.resolve().unwrap();
        assert!(filter.matches(&book("Dune", "Frank Herbert", "Science Fiction", 1965)));
        assert!(!filter.matches(&book("Dune Messiah", "Frank Herbert", "Science Fiction", 1969)));
    }

    #[test]
    fn test_year_filter_rejects_non_numeric() {
        let raw = BookFilter::Year("nineteen-sixty-five".to_string());
        let result = raw.resolve();
        assert!(matches!(result, Err(StoreError::InvalidQuery(_))));
    }
}
