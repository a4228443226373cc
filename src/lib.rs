//! Library Store
//!
//! Concurrency-safe in-memory repositories for a small digital library:
//! users, books and the access events that link them.
//!
//! # Features
//!
//! - **Identifier assignment**: per-store sequences, strictly increasing from 1
//! - **Secondary index**: case-insensitive email → user lookups and uniqueness
//! - **Filtered search**: conjunctive title/author/category/year/tag predicates
//! - **Access statistics**: per-book and per-user counts by access type
//! - **Thread-Safe**: one `RwLock` per store, shared readers, exclusive writers
//!
//! # Modules
//!
//! - `types`: Entities, identifiers, filters and the error taxonomy
//! - `store`: Repository traits and their in-memory implementations
//! - `search`: Filter engine used by the book store
//! - `service`: Business rules on top of the repositories
//! - `validation`: Normalization and validation for domain constructors
//! - `config`: Environment-driven configuration
//! - `utils`: Time and logging helpers
//!
//! # Example
//!
//! ```
//! use library_store::{AccessType, BookFilter, Library, Role};
//!
//! let library = Library::default();
//! let users = library.user_service();
//! let books = library.book_service();
//!
//! let ana = users.register_user("Ana", "ana@example.com", Role::Reader).unwrap();
//! let dune = books
//!     .register_book("Dune", "Frank Herbert", 1965, "", "Fiction", &["scifi"])
//!     .unwrap();
//!
//! books
//!     .record_access(dune.id().unwrap(), ana.id().unwrap(), AccessType::Read)
//!     .unwrap();
//!
//! let found = books.search_books(&BookFilter::new().tag("SciFi"));
//! assert_eq!(found.len(), 1);
//! assert_eq!(books.access_stats_by_book(dune.id().unwrap()).count(AccessType::Read), 1);
//! ```

pub mod config;
pub mod library;
pub mod search;
pub mod service;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::LibraryConfig;
pub use library::Library;
pub use service::{BookService, UserService};
pub use store::{
    AccessLogRepository, BookRepository, InMemoryAccessLog, InMemoryBookStore,
    InMemoryUserStore, UserRepository,
};
pub use types::{
    AccessEvent, AccessEventId, AccessStats, AccessType, Book, BookFilter, BookId, Role,
    StoreError, StoreResult, User, UserId,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
