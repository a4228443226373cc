//! Library: one instance of every store, wired to the services
//!
//! Build one per process (or per test) and hand out the `Arc` handles;
//! there is no global state.

use std::sync::Arc;

use crate::config::LibraryConfig;
use crate::service::{BookService, UserService};
use crate::store::{InMemoryAccessLog, InMemoryBookStore, InMemoryUserStore};

pub struct Library {
    config: LibraryConfig,
    users: Arc<InMemoryUserStore>,
    books: Arc<InMemoryBookStore>,
    access_log: Arc<InMemoryAccessLog>,
}

impl Library {
    pub fn new(config: LibraryConfig) -> Self {
        let books = InMemoryBookStore::with_parallel_threshold(config.parallel_search_threshold);
        Self {
            config,
            users: Arc::new(InMemoryUserStore::new()),
            books: Arc::new(books),
            access_log: Arc::new(InMemoryAccessLog::new()),
        }
    }

    /// Library configured from the `LIBRARY_*` environment variables
    pub fn from_env() -> Self {
        Self::new(LibraryConfig::from_env())
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn users(&self) -> Arc<InMemoryUserStore> {
        Arc::clone(&self.users)
    }

    pub fn books(&self) -> Arc<InMemoryBookStore> {
        Arc::clone(&self.books)
    }

    pub fn access_log(&self) -> Arc<InMemoryAccessLog> {
        Arc::clone(&self.access_log)
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.users.clone())
    }

    pub fn book_service(&self) -> BookService {
        BookService::new(
            self.books.clone(),
            self.access_log.clone(),
            self.users.clone(),
        )
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(LibraryConfig::default())
    }
}
