//! Access statistics aggregation
//!
//! Counts are taken while the access log holds its read lock, so no event
//! is copied out just to be counted.

use crate::types::{AccessEvent, AccessStats};

/// Tally the access type of every event accepted by `keep`
pub(crate) fn collect<'a, I, F>(events: I, keep: F) -> AccessStats
where
    I: IntoIterator<Item = &'a AccessEvent>,
    F: Fn(&AccessEvent) -> bool,
{
    let mut stats = AccessStats::new();
    for event in events.into_iter().filter(|e| keep(*e)) {
        stats.record(event.access());
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessType, BookId, UserId};

    fn event(book: i64, access: AccessType) -> AccessEvent {
        AccessEvent::new(BookId(book), UserId(1), access).unwrap()
    }

    #[test]
    fn test_collect_counts_only_kept_events() {
        let events = vec![
            event(7, AccessType::Read),
            event(7, AccessType::Read),
            event(8, AccessType::Read),
            event(7, AccessType::Open),
        ];

        let stats = collect(&events, |e| e.book_id() == BookId(7));
        assert_eq!(stats.count(AccessType::Read), 2);
        assert_eq!(stats.count(AccessType::Open), 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_collect_empty() {
        let events: Vec<AccessEvent> = Vec::new();
        assert!(collect(&events, |_| true).is_empty());
    }
}
