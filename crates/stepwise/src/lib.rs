//! # stepwise: lazy, restartable range cursors
//!
//! This crate attaches a range-iteration capability to plain data records.
//! A [`RangeIterable`] holds ordinary named fields; asking it for a range
//! produces a fresh [`RangeCursor`] that yields integers one at a time:
//!
//! - **Configurable**: [`RangeConfig`] sets `first`, the exclusive `last`,
//!   and `step` (defaults `0`, `100`, `1`)
//! - **Restartable**: every request starts a new, independent cursor
//! - **Lazy**: each value is computed when pulled, in constant time
//!
//! Alongside the record type the crate carries a few related iteration
//! shapes: an unbounded [`Counter`], an [`InclusiveCursor`] that reports how
//! many values it produced, an insertion-ordered [`Bag`], and a
//! [`Walkthrough`] that surfaces explicit [`Step`] results.
//!
//! # Example
//!
//! ```
//! use stepwise::{RangeConfig, RangeIterable, RangeSource};
//!
//! let record = RangeIterable::new();
//!
//! let config = RangeConfig::default().with_last(20).with_step(4);
//! let values: Vec<i64> = record.range(Some(config)).unwrap().collect();
//! assert_eq!(values, vec![0, 4, 8, 12, 16]);
//!
//! let first_five: Vec<i64> = record.cursor().unwrap().take(5).collect();
//! assert_eq!(first_five, vec![0, 1, 2, 3, 4]);
//! ```
//!
//! # Zero steps
//!
//! A zero step over a non-empty span can never finish. Cursor creation
//! rejects it with [`StepwiseError::NonTerminating`] instead of handing out
//! an endless cursor.

mod bag;
mod config;
mod counter;
mod cursor;
mod error;
mod record;
mod walkthrough;

pub use bag::Bag;
pub use config::{DEFAULT_FIRST, DEFAULT_LAST, DEFAULT_STEP, RangeConfig};
pub use counter::Counter;
pub use cursor::{CursorState, InclusiveCursor, RangeCursor};
pub use error::StepwiseError;
pub use record::{RangeIterable, RangeSource};
pub use walkthrough::{Step, Walkthrough};
