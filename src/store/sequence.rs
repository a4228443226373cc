//! Per-store identifier sequence

/// Monotonic identifier source.
///
/// Not synchronized on its own: each store keeps its sequence inside the
/// table guarded by the store lock, so drawing a value and inserting the
/// entity happen in one critical section.
#[derive(Debug, Default)]
pub(crate) struct Sequence {
    last: i64,
}

impl Sequence {
    /// Advance and return the next identifier (first value is 1)
    pub(crate) fn next_value(&mut self) -> i64 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut seq = Sequence::default();
        assert_eq!(seq.next_value(), 1);
        assert_eq!(seq.next_value(), 2);
        assert_eq!(seq.next_value(), 3);
    }
}
