//! Filter engine for book search
//!
//! A [`BookFilter`] is compiled once into a [`BookMatcher`] holding the
//! lowercased needles, then evaluated against every active book. Large
//! catalogues are scanned in parallel with Rayon.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::types::{Book, BookFilter, BookId};
use crate::validation::normalize_tag;

/// Book count above which the scan runs in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Compiled form of a [`BookFilter`]
#[derive(Debug, Clone, Default)]
pub struct BookMatcher {
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    year_from: Option<i32>,
    year_to: Option<i32>,
}

impl BookMatcher {
    pub fn new(filter: &BookFilter) -> Self {
        Self {
            title: lowered(filter.title_contains.as_deref()),
            author: lowered(filter.author_contains.as_deref()),
            category: lowered(filter.category.as_deref()),
            tags: filter.tags.iter().filter_map(|t| normalize_tag(t)).collect(),
            year_from: filter.year_from.filter(|y| *y > 0),
            year_to: filter.year_to.filter(|y| *y > 0),
        }
    }

    /// True when no predicate is set
    pub fn is_unconstrained(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.category.is_none()
            && self.tags.is_empty()
            && self.year_from.is_none()
            && self.year_to.is_none()
    }

    /// Evaluate every predicate against `book`. Archived books never match.
    pub fn matches(&self, book: &Book) -> bool {
        if !book.is_active() {
            return false;
        }

        if let Some(ref title) = self.title {
            if !book.title().to_lowercase().contains(title.as_str()) {
                return false;
            }
        }

        if let Some(ref author) = self.author {
            if !book.author().to_lowercase().contains(author.as_str()) {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if book.category().to_lowercase() != *category {
                return false;
            }
        }

        if let Some(from) = self.year_from {
            if book.year() < from {
                return false;
            }
        }
        if let Some(to) = self.year_to {
            if book.year() > to {
                return false;
            }
        }

        self.tags.iter().all(|t| book.has_tag(t))
    }
}

/// Return clones of the books in `books` matching `filter`, ordered by id
pub fn filter_books(
    books: &HashMap<BookId, Book>,
    filter: &BookFilter,
    parallel_threshold: usize,
) -> Vec<Book> {
    let matcher = BookMatcher::new(filter);

    let mut matching: Vec<Book> = if books.len() > parallel_threshold {
        books
            .par_iter()
            .filter(|(_, b)| matcher.matches(b))
            .map(|(_, b)| b.clone())
            .collect()
    } else {
        books
            .values()
            .filter(|b| matcher.matches(b))
            .cloned()
            .collect()
    };

    matching.sort_by_key(|b| b.id());
    matching
}

/// Lowercase a substring needle, treating blank input as unset
fn lowered(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(|v| v.to_lowercase())
}
