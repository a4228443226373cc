//! Access event types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessEventId, BookId, StoreError, StoreResult, UserId};
use crate::utils::time::current_time;
use crate::validation::validate_id;

/// Kind of access recorded against a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    Open,
    Read,
    Download,
}

impl AccessType {
    pub const ALL: [AccessType; 3] = [AccessType::Open, AccessType::Read, AccessType::Download];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Open => "OPEN",
            AccessType::Read => "READ",
            AccessType::Download => "DOWNLOAD",
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AccessType::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StoreError::validation(format!("unknown access type '{}'", s)))
    }
}

/// Immutable record of a user accessing a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AccessEventRecord")]
pub struct AccessEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<AccessEventId>,
    book_id: BookId,
    user_id: UserId,
    access: AccessType,
    timestamp: DateTime<Utc>,
}

impl AccessEvent {
    /// Build an access event stamped with the current time.
    ///
    /// Only the shape of the identifiers is checked here; whether they
    /// reference stored entities is the caller's concern.
    pub fn new(book_id: BookId, user_id: UserId, access: AccessType) -> StoreResult<Self> {
        validate_id("book id", book_id.0)?;
        validate_id("user id", user_id.0)?;

        Ok(Self {
            id: None,
            book_id,
            user_id,
            access,
            timestamp: current_time(),
        })
    }

    pub fn id(&self) -> Option<AccessEventId> {
        self.id
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn access(&self) -> AccessType {
        self.access
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub(crate) fn with_id(self, id: AccessEventId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessEventRecord {
    #[serde(default)]
    id: Option<AccessEventId>,
    book_id: BookId,
    user_id: UserId,
    access: AccessType,
    #[serde(default = "current_time")]
    timestamp: DateTime<Utc>,
}

impl TryFrom<AccessEventRecord> for AccessEvent {
    type Error = StoreError;

    fn try_from(record: AccessEventRecord) -> StoreResult<Self> {
        if let Some(id) = record.id {
            validate_id("access event id", id.0)?;
        }
        let event = AccessEvent::new(record.book_id, record.user_id, record.access)?;
        Ok(Self {
            id: record.id,
            timestamp: record.timestamp,
            ..event
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_rejects_non_positive_ids() {
        assert!(AccessEvent::new(BookId(0), UserId(1), AccessType::Read).is_err());
        assert!(AccessEvent::new(BookId(1), UserId(-1), AccessType::Read).is_err());
        assert!(AccessEvent::new(BookId(1), UserId(1), AccessType::Read).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_non_positive_ids() {
        let event: AccessEvent = serde_json::from_value(serde_json::json!({
            "bookId": 3, "userId": 4, "access": "READ"
        }))
        .unwrap();
        assert_eq!(event.book_id(), BookId(3));
        assert_eq!(event.access(), AccessType::Read);

        let bad = serde_json::from_value::<AccessEvent>(serde_json::json!({
            "bookId": 0, "userId": 4, "access": "READ"
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_access_type_parsing() {
        assert_eq!("download".parse::<AccessType>().unwrap(), AccessType::Download);
        assert_eq!("Open".parse::<AccessType>().unwrap(), AccessType::Open);
        assert!("borrow".parse::<AccessType>().is_err());
    }

    #[test]
    fn test_access_type_serializes_uppercase() {
        let json = serde_json::to_string(&AccessType::Read).unwrap();
        assert_eq!(json, "\"READ\"");
    }
}
