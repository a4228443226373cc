//! Book types

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, StoreError, StoreResult};
use crate::utils::time::current_time;
use crate::validation::{normalize_tags, require_non_empty, validate_id, validate_year};

/// A book in the catalogue.
///
/// Deserialization goes through [`Book::new`], so values read from the
/// wire carry the same normalized tags and pass the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BookRecord")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<BookId>,
    title: String,
    author: String,
    year: i32,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    category: String,
    /// Lowercase, trimmed, non-empty tags
    #[serde(default)]
    tags: BTreeSet<String>,
    active: bool,
    created_at: DateTime<Utc>,
}

impl Book {
    /// Build a validated, active book without an identifier
    pub fn new<I, S>(
        title: &str,
        author: &str,
        year: i32,
        isbn: &str,
        category: &str,
        tags: I,
    ) -> StoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = require_non_empty("title", title)?;
        let author = require_non_empty("author", author)?;
        validate_year(year)?;

        Ok(Self {
            id: None,
            title,
            author,
            year,
            isbn: isbn.trim().to_string(),
            category: category.trim().to_string(),
            tags: normalize_tags(tags),
            active: true,
            created_at: current_time(),
        })
    }

    pub fn id(&self) -> Option<BookId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Check membership of an already-normalized tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Copy of this book marked inactive
    pub fn archived(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }

    /// Copy of this book with its tag set replaced
    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: normalize_tags(tags),
            ..self.clone()
        }
    }

    pub(crate) fn with_id(self, id: BookId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Wire shape of a [`Book`] before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookRecord {
    #[serde(default)]
    id: Option<BookId>,
    title: String,
    author: String,
    year: i32,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default = "current_time")]
    created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl TryFrom<BookRecord> for Book {
    type Error = StoreError;

    fn try_from(record: BookRecord) -> StoreResult<Self> {
        if let Some(id) = record.id {
            validate_id("book id", id.0)?;
        }
        let book = Book::new(
            &record.title,
            &record.author,
            record.year,
            &record.isbn,
            &record.category,
            &record.tags,
        )?;
        Ok(Self {
            id: record.id,
            active: record.active,
            created_at: record.created_at,
            ..book
        })
    }
}
