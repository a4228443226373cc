//! Service layer
//!
//! Business rules on top of the repository traits. Services hold `Arc`
//! handles to the stores and never touch a lock directly.

mod book_service;
mod user_service;

pub use book_service::BookService;
pub use user_service::UserService;
