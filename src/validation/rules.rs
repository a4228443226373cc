//! Normalization and validation rules applied by the domain constructors

use std::collections::BTreeSet;

use crate::types::{StoreError, StoreResult};

/// Normalize an email into its index key (trimmed, lowercased)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalize a single tag, returning `None` for blank input
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Normalize a tag list into a deduplicated lowercase set
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|t| normalize_tag(t.as_ref()))
        .collect()
}

/// Trim a required text field, rejecting blank values
pub fn require_non_empty(field: &str, value: &str) -> StoreResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Check that an already-normalized email looks like an address
pub fn validate_email(email: &str) -> StoreResult<()> {
    if email.is_empty() {
        return Err(StoreError::validation("email must not be empty"));
    }
    if !email.contains('@') {
        return Err(StoreError::validation(format!("invalid email '{}'", email)));
    }
    Ok(())
}

pub fn validate_year(year: i32) -> StoreResult<()> {
    if year <= 0 {
        return Err(StoreError::validation(format!(
            "year must be positive, got {}",
            year
        )));
    }
    Ok(())
}

/// Reject non-positive raw identifiers
pub fn validate_id(field: &str, raw: i64) -> StoreResult<()> {
    if raw <= 0 {
        return Err(StoreError::validation(format!("invalid {} {}", field, raw)));
    }
    Ok(())
}
