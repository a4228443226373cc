//! Runtime configuration

use std::env;

use tracing::warn;

use crate::search::DEFAULT_PARALLEL_THRESHOLD;
use crate::utils::logging::DEFAULT_LOG_FILTER;

/// Environment variable overriding [`LibraryConfig::parallel_search_threshold`]
pub const PARALLEL_THRESHOLD_ENV: &str = "LIBRARY_PARALLEL_THRESHOLD";

/// Environment variable overriding [`LibraryConfig::log_filter`]
pub const LOG_FILTER_ENV: &str = "LIBRARY_LOG";

/// Configuration for a [`crate::Library`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Book count above which searches are scanned in parallel
    pub parallel_search_threshold: usize,
    /// `tracing_subscriber::EnvFilter` directive used by the demo binary
    pub log_filter: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            parallel_search_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LibraryConfig {
    /// Defaults overridden by `LIBRARY_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PARALLEL_THRESHOLD_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.parallel_search_threshold = n,
                Err(e) => warn!(
                    key = PARALLEL_THRESHOLD_ENV,
                    value = %raw,
                    error = %e,
                    "ignoring invalid value"
                ),
            }
        }

        if let Some(raw) = lookup(LOG_FILTER_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                config.log_filter = raw.to_string();
            }
        }

        config
    }

    pub fn with_parallel_search_threshold(mut self, threshold: usize) -> Self {
        self.parallel_search_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LibraryConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LibraryConfig::default());
        assert_eq!(config.parallel_search_threshold, 1000);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = LibraryConfig::from_lookup(lookup_from(&[
            (PARALLEL_THRESHOLD_ENV, " 64 "),
            (LOG_FILTER_ENV, "library_store=debug"),
        ]));
        assert_eq!(config.parallel_search_threshold, 64);
        assert_eq!(config.log_filter, "library_store=debug");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = LibraryConfig::from_lookup(lookup_from(&[
            (PARALLEL_THRESHOLD_ENV, "lots"),
            (LOG_FILTER_ENV, "   "),
        ]));
        assert_eq!(config, LibraryConfig::default());
    }
}
