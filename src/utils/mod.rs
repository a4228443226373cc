//! Utility functions

pub mod logging;
pub mod time;

pub use logging::init_logging;
pub use time::current_time;
