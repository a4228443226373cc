//! Book search
//!
//! Conjunctive multi-predicate filtering over the book catalogue.

mod filter;

pub use filter::{filter_books, BookMatcher, DEFAULT_PARALLEL_THRESHOLD};
