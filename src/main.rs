//! Library Store - demo entry point
//!
//! Seeds a library with sample users and books, records some accesses and
//! prints a JSON report to stdout. Logs go to stderr.

use serde::Serialize;

use library_store::utils::init_logging;
use library_store::{
    AccessStats, AccessType, Book, BookFilter, BookId, Library, LibraryConfig, Role, User,
    UserId,
};

type DemoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoReport {
    users: Vec<User>,
    books: Vec<Book>,
    search: SearchReport,
    access_stats: Vec<BookStats>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport {
    filter: BookFilter,
    results: Vec<Book>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookStats {
    book_id: BookId,
    title: String,
    stats: AccessStats,
}

fn main() -> DemoResult<()> {
    let config = LibraryConfig::from_env();
    init_logging(&config.log_filter);

    let library = Library::new(config);
    let users = library.user_service();
    let books = library.book_service();

    let ana = users.register_user("Ana Torres", "ana@example.com", Role::Admin)?;
    let ben = users.register_user("Ben Okafor", "ben@example.com", Role::Reader)?;

    let go = books.register_book(
        "Go Basics",
        "Rob Pike",
        2019,
        "978-0000000001",
        "Programming",
        &["go", "web"],
    )?;
    let rust = books.register_book(
        "Rust Basics",
        "Steve Klabnik",
        2021,
        "978-0000000002",
        "Programming",
        &["rust", "systems"],
    )?;
    let old = books.register_book(
        "Legacy Systems",
        "Anon",
        1998,
        "978-0000000003",
        "Programming",
        &["cobol"],
    )?;
    books.archive_book(id_of(&old)?)?;

    let (ana_id, ben_id) = (user_id_of(&ana)?, user_id_of(&ben)?);
    for access in [AccessType::Open, AccessType::Read, AccessType::Read] {
        books.record_access(id_of(&rust)?, ana_id, access)?;
    }
    books.record_access(id_of(&go)?, ben_id, AccessType::Download)?;

    let filter = BookFilter::new().title_contains("basics").year_from(2020);
    let results = books.search_books(&filter);

    let access_stats = books
        .list_books()
        .into_iter()
        .filter_map(|b| {
            b.id().map(|id| BookStats {
                book_id: id,
                title: b.title().to_string(),
                stats: books.access_stats_by_book(id),
            })
        })
        .collect();

    let report = DemoReport {
        users: users.list_users(),
        books: books.list_books(),
        search: SearchReport { filter, results },
        access_stats,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn id_of(book: &Book) -> DemoResult<BookId> {
    book.id().ok_or_else(|| "stored book has no id".into())
}

fn user_id_of(user: &User) -> DemoResult<UserId> {
    user.id().ok_or_else(|| "stored user has no id".into())
}
