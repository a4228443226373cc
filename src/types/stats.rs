//! Access statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AccessType;

/// Access counts grouped by access type.
///
/// Types that never occurred are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessStats {
    by_type: BTreeMap<AccessType, usize>,
}

impl AccessStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, access: AccessType) {
        *self.by_type.entry(access).or_insert(0) += 1;
    }

    /// Occurrences of `access`, zero when never recorded
    pub fn count(&self, access: AccessType) -> usize {
        self.by_type.get(&access).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.by_type.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccessType, usize)> + '_ {
        self.by_type.iter().map(|(k, v)| (*k, *v))
    }

    pub fn as_map(&self) -> &BTreeMap<AccessType, usize> {
        &self.by_type
    }
}
