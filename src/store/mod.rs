//! In-memory repositories
//!
//! Each store guards its table with a single `parking_lot::RwLock`. Reads
//! take the shared lock, `create`/`update`/`store` take the exclusive one.
//! Nothing inside a critical section blocks or performs I/O.
//!
//! The repository traits are the contracts the service layer depends on;
//! the `InMemory*` types are their only implementations.

mod access_log;
mod books;
mod sequence;
mod stats;
mod users;

pub use access_log::InMemoryAccessLog;
pub use books::InMemoryBookStore;
pub(crate) use sequence::Sequence;
pub use users::InMemoryUserStore;

use crate::types::{
    AccessEvent, AccessStats, Book, BookFilter, BookId, StoreResult, User, UserId,
};

/// Storage contract for users
pub trait UserRepository: Send + Sync {
    /// Assign an identifier and insert. Fails with `DuplicateKey` when the
    /// email is already indexed.
    fn create(&self, user: User) -> StoreResult<User>;

    /// Replace the stored value. Fails with `NotFound` for an unknown id.
    fn update(&self, user: User) -> StoreResult<()>;

    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Case-insensitive lookup through the email index
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Snapshot of all users ordered by id
    fn list_all(&self) -> Vec<User>;
}

/// Storage contract for books
pub trait BookRepository: Send + Sync {
    fn create(&self, book: Book) -> StoreResult<Book>;

    fn update(&self, book: Book) -> StoreResult<()>;

    fn find_by_id(&self, id: BookId) -> Option<Book>;

    /// Active books satisfying every predicate of `filter`, ordered by id
    fn search_by_filters(&self, filter: &BookFilter) -> Vec<Book>;

    fn list_all(&self) -> Vec<Book>;
}

/// Storage contract for access events. Events are append-only.
pub trait AccessLogRepository: Send + Sync {
    fn store(&self, event: AccessEvent) -> StoreResult<AccessEvent>;

    fn list_by_book(&self, book_id: BookId) -> Vec<AccessEvent>;

    fn list_by_user(&self, user_id: UserId) -> Vec<AccessEvent>;

    /// Counts of every event recorded for `book_id`, keyed by access type
    fn build_access_stats_by_book(&self, book_id: BookId) -> AccessStats;

    fn build_access_stats_by_user(&self, user_id: UserId) -> AccessStats;
}
