//! Tracing subscriber bootstrap

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when the configured one does not parse
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a stderr `fmt` subscriber filtered by `filter`.
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place and return `false`.
pub fn init_logging(filter: &str) -> bool {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    let installed = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if let Some(e) = rejected {
        warn!(filter = %filter, error = %e, "invalid log filter, using default");
    }
    installed
}
