//! Concurrent access tests for the in-memory stores

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use library_store::{
    AccessEvent, AccessLogRepository, AccessType, Book, BookFilter, BookId, BookRepository,
    InMemoryAccessLog, InMemoryBookStore, InMemoryUserStore, Role, StoreError, User, UserId,
    UserRepository,
};

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn test_concurrent_creates_yield_unique_ids() {
    let store = Arc::new(InMemoryBookStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut ids = Vec::with_capacity(PER_THREAD);
                for i in 0..PER_THREAD {
                    let book = Book::new(
                        &format!("Book {}-{}", t, i),
                        "Author",
                        2000,
                        "",
                        "",
                        ["concurrency"],
                    )
                    .unwrap();
                    ids.push(store.create(book).unwrap().id().unwrap().0);
                }
                ids
            })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        // Each thread observes strictly increasing ids
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        all.extend(ids);
    }

    let total = THREADS * PER_THREAD;
    let unique: HashSet<i64> = all.iter().copied().collect();
    assert_eq!(unique.len(), total);
    assert_eq!(unique.iter().min(), Some(&1));
    assert_eq!(unique.iter().max(), Some(&(total as i64)));
    assert_eq!(store.len(), total);
}

#[test]
fn test_concurrent_duplicate_emails_admit_one_winner() {
    let store = Arc::new(InMemoryUserStore::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let email = if t % 2 == 0 {
                    "shared@example.com"
                } else {
                    "SHARED@example.com"
                };
                store.create(User::new("Racer", email, Role::Reader).unwrap())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    let dupes = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::DuplicateKey { .. })))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(dupes, THREADS - 1);
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.find_by_email("shared@example.com").unwrap().id(),
        Some(UserId(1))
    );
}

#[test]
fn test_readers_run_alongside_writers() {
    let books = Arc::new(InMemoryBookStore::with_parallel_threshold(16));
    let log = Arc::new(InMemoryAccessLog::new());
    for i in 0..20 {
        books
            .create(Book::new(&format!("Seed {}", i), "Author", 1990 + i, "", "", ["seed"]).unwrap())
            .unwrap();
    }

    let writer = {
        let books = Arc::clone(&books);
        let log = Arc::clone(&log);
        thread::spawn(move || {
            for i in 0..PER_THREAD {
                books
                    .create(Book::new("Fresh", "Author", 2020, "", "", ["fresh"]).unwrap())
                    .unwrap();
                let kind = if i % 2 == 0 { AccessType::Read } else { AccessType::Open };
                log.store(AccessEvent::new(BookId(1), UserId(1), kind).unwrap())
                    .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let books = Arc::clone(&books);
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    let seeded = books.search_by_filters(&BookFilter::new().tag("seed"));
                    assert_eq!(seeded.len(), 20);
                    let stats = log.build_access_stats_by_book(BookId(1));
                    assert!(stats.total() <= PER_THREAD);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(books.len(), 20 + PER_THREAD);
    let stats = log.build_access_stats_by_book(BookId(1));
    assert_eq!(stats.count(AccessType::Read), PER_THREAD / 2);
    assert_eq!(stats.count(AccessType::Open), PER_THREAD / 2);
}
