//! Pull-based range cursors.
//!
//! A cursor is the whole of a range's iteration state: the next position,
//! the bound, and the step. Each retrieval computes exactly one value, so a
//! cursor over `i64::MIN..i64::MAX` costs the same to create as one over
//! `0..3`.
//!
//! # Lifecycle
//!
//! ```text
//!   NotStarted ──next()──▶ Active ──next()──▶ Exhausted
//!     │    │                                   ▲    ▲
//!     │    └──── next() on a one-value range ──┘    │
//!     └──────────────── empty range ────────────────┘
//! ```
//!
//! [`CursorState::Active`] means "has a next value". The transition to
//! [`CursorState::Exhausted`] happens as soon as the computed next position
//! falls outside the bound, so the state is observable before the caller
//! pulls the `None`.

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::{RangeConfig, StepwiseError};

/// Where a cursor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Nothing yielded yet, at least one value available.
    NotStarted,
    /// At least one value yielded, at least one more available.
    Active,
    /// No further values.
    Exhausted,
}

/// Whether the end bound itself is part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exclusive,
    Inclusive,
}

/// A lazy cursor over `first, first + step, ...` stopping before `last`.
///
/// Created by [`RangeConfig::cursor`] or through a
/// [`RangeSource`](crate::RangeSource). Cursors are independent values:
/// cloning one forks the iteration at its current position.
///
/// Positions that would overflow `i64` count as having crossed the bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeCursor {
    /// Next candidate position; `None` once stepping past `i64` range.
    next: Option<i64>,
    last: i64,
    step: i64,
    bound: Bound,
    yielded: u64,
}

impl RangeCursor {
    /// Creates a cursor over `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StepwiseError::NonTerminating`] if `config.step` is zero
    /// and `first != last`.
    pub fn from_config(config: RangeConfig) -> Result<Self, StepwiseError> {
        if config.step == 0 && !config.is_empty() {
            warn!(
                first = config.first,
                last = config.last,
                "refusing zero-step range"
            );
            return Err(StepwiseError::NonTerminating {
                first: config.first,
                last: config.last,
            });
        }
        Ok(Self::new_unchecked(config))
    }

    /// Builds a cursor without the zero-step check. Only for configurations
    /// known to terminate.
    pub(crate) fn new_unchecked(config: RangeConfig) -> Self {
        debug!(
            first = config.first,
            last = config.last,
            step = config.step,
            "range cursor created"
        );
        Self {
            next: Some(config.first),
            last: config.last,
            step: config.step,
            bound: Bound::Exclusive,
            yielded: 0,
        }
    }

    fn inclusive(start: i64, end: i64, interval: i64) -> Self {
        debug!(start, end, interval, "inclusive cursor created");
        Self {
            next: Some(start),
            last: end,
            step: interval,
            bound: Bound::Inclusive,
            yielded: 0,
        }
    }

    /// Returns the value the next call to `next()` would yield.
    pub fn peek(&self) -> Option<i64> {
        self.next.filter(|&position| self.in_bounds(position))
    }

    /// Returns the cursor's lifecycle state.
    pub fn state(&self) -> CursorState {
        match self.peek() {
            None => CursorState::Exhausted,
            Some(_) if self.yielded == 0 => CursorState::NotStarted,
            Some(_) => CursorState::Active,
        }
    }

    /// Number of values yielded so far.
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    /// Number of values still to come, saturating at `u64::MAX`.
    ///
    /// Only the full inclusive range `i64::MIN..=i64::MAX` saturates.
    pub fn remaining(&self) -> u64 {
        u64::try_from(self.remaining_wide()).unwrap_or(u64::MAX)
    }

    fn remaining_wide(&self) -> u128 {
        let Some(position) = self.peek() else {
            return 0;
        };
        let distance = (i128::from(self.last) - i128::from(position)).unsigned_abs();
        let step = u128::from(self.step.unsigned_abs());
        match self.bound {
            Bound::Exclusive => distance.div_ceil(step),
            Bound::Inclusive => distance / step + 1,
        }
    }

    fn in_bounds(&self, position: i64) -> bool {
        match (self.bound, self.step.signum()) {
            (Bound::Exclusive, 1) => position < self.last,
            (Bound::Exclusive, -1) => position > self.last,
            (Bound::Inclusive, 1) => position <= self.last,
            (Bound::Inclusive, -1) => position >= self.last,
            // Zero steps never reach a cursor with anything to yield.
            _ => false,
        }
    }
}

impl Iterator for RangeCursor {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(value) = self.peek() else {
            if self.next.take().is_some() {
                trace!(yielded = self.yielded, "range cursor exhausted");
            }
            return None;
        };
        self.next = value.checked_add(self.step);
        self.yielded += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining_wide()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeCursor {}

/// A cursor whose end bound is inclusive and which reports how many values
/// it produced once it finishes.
///
/// # Example
///
/// ```
/// use stepwise::InclusiveCursor;
///
/// let mut cursor = InclusiveCursor::new(0, 10, 5).unwrap();
/// assert_eq!(cursor.completed(), None);
/// assert_eq!(cursor.by_ref().collect::<Vec<_>>(), vec![0, 5, 10]);
/// assert_eq!(cursor.completed(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusiveCursor {
    inner: RangeCursor,
}

impl InclusiveCursor {
    /// Creates a cursor over `start..=end` moving by `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`StepwiseError::NonTerminating`] for a zero interval. With
    /// an inclusive bound, even `start == end` would yield forever.
    pub fn new(start: i64, end: i64, interval: i64) -> Result<Self, StepwiseError> {
        if interval == 0 {
            warn!(start, end, "refusing zero-interval inclusive range");
            return Err(StepwiseError::NonTerminating {
                first: start,
                last: end,
            });
        }
        Ok(Self {
            inner: RangeCursor::inclusive(start, end, interval),
        })
    }

    /// Returns the number of values produced, once the cursor is exhausted.
    pub fn completed(&self) -> Option<u64> {
        match self.inner.state() {
            CursorState::Exhausted => Some(self.inner.yielded()),
            CursorState::NotStarted | CursorState::Active => None,
        }
    }

    pub fn state(&self) -> CursorState {
        self.inner.state()
    }

    pub fn remaining(&self) -> u64 {
        self.inner.remaining()
    }
}

impl Iterator for InclusiveCursor {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for InclusiveCursor {}
