//! Manual stepping with explicit `{ value, done }` results.

use std::iter::FusedIterator;

use serde::Serialize;
use tracing::trace;

/// The result of one manual step.
///
/// `done` is false for every staged value and true once, and forever
/// after, the stages run out. A finished step carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step<T> {
    pub value: Option<T>,
    pub done: bool,
}

/// Yields a fixed list of staged values one call at a time.
///
/// # Example
///
/// ```
/// use stepwise::{Step, Walkthrough};
///
/// let mut walk = Walkthrough::new([1, 2]);
/// assert_eq!(walk.step(), Step { value: Some(1), done: false });
/// assert_eq!(walk.step(), Step { value: Some(2), done: false });
/// assert_eq!(walk.step(), Step { value: None, done: true });
/// ```
#[derive(Debug, Clone)]
pub struct Walkthrough<T> {
    stages: std::vec::IntoIter<T>,
    taken: usize,
}

impl<T> Walkthrough<T> {
    pub fn new(stages: impl IntoIterator<Item = T>) -> Self {
        Self {
            stages: stages.into_iter().collect::<Vec<_>>().into_iter(),
            taken: 0,
        }
    }

    /// Advances one stage.
    pub fn step(&mut self) -> Step<T> {
        match self.stages.next() {
            Some(value) => {
                self.taken += 1;
                trace!(stage = self.taken, "walkthrough resumed");
                Step {
                    value: Some(value),
                    done: false,
                }
            }
            None => Step {
                value: None,
                done: true,
            },
        }
    }

    /// Number of stages not yet stepped through.
    pub fn pending(&self) -> usize {
        self.stages.len()
    }
}

impl<T> Iterator for Walkthrough<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stages.size_hint()
    }
}

impl<T> ExactSizeIterator for Walkthrough<T> {}

impl<T> FusedIterator for Walkthrough<T> {}
