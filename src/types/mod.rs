//! Data types for the library store
//!
//! Entities are immutable values built through validating constructors.
//! Identifiers are assigned by the stores on `create`.

mod access;
mod book;
mod error;
mod filter;
mod ids;
mod stats;
mod user;

pub use access::{AccessEvent, AccessType};
pub use book::Book;
pub use error::{StoreError, StoreResult};
pub use filter::BookFilter;
pub use ids::{AccessEventId, BookId, UserId};
pub use stats::AccessStats;
pub use user::{Role, User};
