//! Append-only access event log

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::types::{AccessEvent, AccessEventId, AccessStats, BookId, StoreResult, UserId};

use super::{stats, AccessLogRepository, Sequence};

#[derive(Debug, Default)]
struct EventTable {
    seq: Sequence,
    events: HashMap<AccessEventId, AccessEvent>,
}

/// Thread-safe in-memory access log.
///
/// Referential integrity of `book_id`/`user_id` is checked by the caller
/// before `store`; the log accepts any well-formed event.
#[derive(Debug, Default)]
pub struct InMemoryAccessLog {
    table: RwLock<EventTable>,
}

impl InMemoryAccessLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_id(&self, id: AccessEventId) -> Option<AccessEvent> {
        self.table.read().events.get(&id).cloned()
    }

    fn list_where<F>(&self, keep: F) -> Vec<AccessEvent>
    where
        F: Fn(&AccessEvent) -> bool,
    {
        let table = self.table.read();
        let mut events: Vec<AccessEvent> =
            table.events.values().filter(|e| keep(*e)).cloned().collect();
        events.sort_by_key(|e| e.id());
        events
    }
}

impl AccessLogRepository for InMemoryAccessLog {
    fn store(&self, event: AccessEvent) -> StoreResult<AccessEvent> {
        let mut table = self.table.write();
        let id = AccessEventId(table.seq.next_value());
        let event = event.with_id(id);
        table.events.insert(id, event.clone());

        debug!(
            event_id = %id,
            book_id = %event.book_id(),
            user_id = %event.user_id(),
            access = %event.access(),
            "access recorded"
        );
        Ok(event)
    }

    fn list_by_book(&self, book_id: BookId) -> Vec<AccessEvent> {
        self.list_where(|e| e.book_id() == book_id)
    }

    fn list_by_user(&self, user_id: UserId) -> Vec<AccessEvent> {
        self.list_where(|e| e.user_id() == user_id)
    }

    fn build_access_stats_by_book(&self, book_id: BookId) -> AccessStats {
        let table = self.table.read();
        stats::collect(table.events.values(), |e| e.book_id() == book_id)
    }

    fn build_access_stats_by_user(&self, user_id: UserId) -> AccessStats {
        let table = self.table.read();
        stats::collect(table.events.values(), |e| e.user_id() == user_id)
    }
}
