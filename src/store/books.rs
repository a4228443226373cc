//! Book store

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::search::{filter_books, DEFAULT_PARALLEL_THRESHOLD};
use crate::types::{Book, BookFilter, BookId, StoreError, StoreResult};

use super::{BookRepository, Sequence};

#[derive(Debug, Default)]
struct BookTable {
    seq: Sequence,
    books: HashMap<BookId, Book>,
}

/// Thread-safe in-memory book repository
#[derive(Debug)]
pub struct InMemoryBookStore {
    table: RwLock<BookTable>,
    parallel_threshold: usize,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::with_parallel_threshold(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Create a store whose searches go parallel above `threshold` books
    pub fn with_parallel_threshold(threshold: usize) -> Self {
        Self {
            table: RwLock::new(BookTable::default()),
            parallel_threshold: threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.table.read().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for InMemoryBookStore {
    fn create(&self, book: Book) -> StoreResult<Book> {
        let mut table = self.table.write();
        let id = BookId(table.seq.next_value());
        let book = book.with_id(id);
        table.books.insert(id, book.clone());

        debug!(book_id = %id, "book created");
        Ok(book)
    }

    fn update(&self, book: Book) -> StoreResult<()> {
        let id = book.id().ok_or_else(|| StoreError::not_found("book", 0))?;
        let mut table = self.table.write();

        match table.books.get_mut(&id) {
            Some(slot) => *slot = book,
            None => return Err(StoreError::not_found("book", id.0)),
        }

        debug!(book_id = %id, "book updated");
        Ok(())
    }

    fn find_by_id(&self, id: BookId) -> Option<Book> {
        self.table.read().books.get(&id).cloned()
    }

    fn search_by_filters(&self, filter: &BookFilter) -> Vec<Book> {
        let table = self.table.read();
        filter_books(&table.books, filter, self.parallel_threshold)
    }

    fn list_all(&self) -> Vec<Book> {
        let table = self.table.read();
        let mut books: Vec<Book> = table.books.values().cloned().collect();
        books.sort_by_key(|b| b.id());
        books
    }
}
