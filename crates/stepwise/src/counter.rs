//! An unbounded counter.

use std::iter::FusedIterator;

/// Counts upward from a starting value, one per call, until `i64::MAX`.
///
/// The counter has no bound of its own; pair it with `take` or
/// `take_while`. Collecting it directly will not finish in practice.
///
/// # Example
///
/// ```
/// use stepwise::Counter;
///
/// let first: Vec<i64> = Counter::new().take(3).collect();
/// assert_eq!(first, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    next: Option<i64>,
}

impl Counter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(start: i64) -> Self {
        Self { next: Some(start) }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Counter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.next?;
        // Saturate instead of wrapping.
        self.next = value.checked_add(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (usize::MAX, None),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Counter {}
