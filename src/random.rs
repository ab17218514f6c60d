//! Synthetic identifiers for flight numbers and booking IDs.
//!
//! Values are uniformly distributed and not suitable for anything
//! security-related.

use rand::Rng;

/// Lowest synthetic identifier.
pub const ID_MIN: u16 = 100;

/// Highest synthetic identifier.
pub const ID_MAX: u16 = 999;

/// Return an integer uniformly distributed over `low..=high`.
///
/// # Panics
///
/// Panics if `low > high`.
pub fn random_int(low: u16, high: u16) -> u16 {
    rand::thread_rng().gen_range(low..=high)
}

/// Draws identifiers from a fixed inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    low: u16,
    high: u16,
}

impl IdGenerator {
    /// Create a generator over `low..=high`, or `None` if the range is empty.
    pub fn new(low: u16, high: u16) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    /// Next identifier in the range.
    pub fn next_id(&self) -> u16 {
        random_int(self.low, self.high)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self {
            low: ID_MIN,
            high: ID_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_int_stays_in_bounds() {
        for _ in 0..10_000 {
            let n = random_int(ID_MIN, ID_MAX);
            assert!((ID_MIN..=ID_MAX).contains(&n), "out of range: {n}");
        }
    }

    #[test]
    fn test_generator_stays_in_bounds() {
        let ids = IdGenerator::default();
        for _ in 0..10_000 {
            let n = ids.next_id();
            assert!((100..=999).contains(&n), "out of range: {n}");
        }
    }

    #[test]
    fn test_single_value_range() {
        assert_eq!(random_int(500, 500), 500);
        let ids = IdGenerator::new(7, 7).expect("valid range");
        assert_eq!(ids.next_id(), 7);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(IdGenerator::new(999, 100).is_none());
    }

    #[test]
    fn test_values_vary() {
        // 1000 draws over 900 values all landing on one value is astronomically unlikely
        let seen: HashSet<u16> = (0..1000).map(|_| random_int(ID_MIN, ID_MAX)).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_both_endpoints_reachable() {
        let seen: HashSet<u16> = (0..2000).map(|_| random_int(1, 3)).collect();
        assert!(seen.contains(&1));
        assert!(seen.contains(&3));
    }
}
