//! Time utilities

use chrono::{DateTime, Utc};

/// Current wall-clock time in UTC, used for creation and access timestamps
pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_is_monotonic_enough() {
        let a = current_time();
        let b = current_time();
        assert!(b >= a);
    }
}
