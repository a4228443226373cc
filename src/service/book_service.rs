//! Book catalogue and access recording rules

use std::sync::Arc;

use tracing::{info, warn};

use crate::store::{AccessLogRepository, BookRepository, UserRepository};
use crate::types::{
    AccessEvent, AccessStats, AccessType, Book, BookFilter, BookId, StoreError, StoreResult,
    UserId,
};

/// Catalogue management, search and access statistics
#[derive(Clone)]
pub struct BookService {
    books: Arc<dyn BookRepository>,
    access_log: Arc<dyn AccessLogRepository>,
    users: Arc<dyn UserRepository>,
}

impl BookService {
    pub fn new(
        books: Arc<dyn BookRepository>,
        access_log: Arc<dyn AccessLogRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            books,
            access_log,
            users,
        }
    }

    pub fn register_book(
        &self,
        title: &str,
        author: &str,
        year: i32,
        isbn: &str,
        category: &str,
        tags: &[&str],
    ) -> StoreResult<Book> {
        let book = Book::new(title, author, year, isbn, category, tags.iter().copied())?;
        let book = self.books.create(book)?;
        info!(book_id = ?book.id(), "book registered");
        Ok(book)
    }

    pub fn search_books(&self, filter: &BookFilter) -> Vec<Book> {
        self.books.search_by_filters(filter)
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.books.list_all()
    }

    pub fn get_book(&self, id: BookId) -> Option<Book> {
        self.books.find_by_id(id)
    }

    /// Mark a book inactive. It stays retrievable but leaves search results.
    pub fn archive_book(&self, id: BookId) -> StoreResult<Book> {
        let book = self
            .books
            .find_by_id(id)
            .ok_or_else(|| StoreError::not_found("book", id.0))?
            .archived();
        self.books.update(book.clone())?;
        info!(book_id = %id, "book archived");
        Ok(book)
    }

    /// Record an access after checking that both referenced entities exist
    /// and are active.
    ///
    /// The lookups and the append are not atomic: a book archived between
    /// the check and the append still gets the event.
    pub fn record_access(
        &self,
        book_id: BookId,
        user_id: UserId,
        access: AccessType,
    ) -> StoreResult<AccessEvent> {
        let event = AccessEvent::new(book_id, user_id, access)?;

        let book = self
            .books
            .find_by_id(book_id)
            .ok_or_else(|| StoreError::not_found("book", book_id.0))?;
        if !book.is_active() {
            warn!(book_id = %book_id, "access to archived book rejected");
            return Err(StoreError::validation(format!(
                "book {} is archived",
                book_id
            )));
        }

        let user = self
            .users
            .find_by_id(user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id.0))?;
        if !user.is_active() {
            warn!(user_id = %user_id, "access by inactive user rejected");
            return Err(StoreError::validation(format!(
                "user {} is inactive",
                user_id
            )));
        }

        self.access_log.store(event)
    }

    pub fn access_stats_by_book(&self, book_id: BookId) -> AccessStats {
        self.access_log.build_access_stats_by_book(book_id)
    }

    pub fn access_stats_by_user(&self, user_id: UserId) -> AccessStats {
        self.access_log.build_access_stats_by_user(user_id)
    }

    pub fn list_access_by_book(&self, book_id: BookId) -> Vec<AccessEvent> {
        self.access_log.list_by_book(book_id)
    }

    pub fn list_access_by_user(&self, user_id: UserId) -> Vec<AccessEvent> {
        self.access_log.list_by_user(user_id)
    }
}
