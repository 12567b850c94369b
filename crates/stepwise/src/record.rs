//! Records with a range-iteration capability.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{RangeConfig, RangeCursor, StepwiseError};

/// Anything that can hand out independent range cursors.
///
/// Implementors only provide [`range`](Self::range). The default cursor is
/// `range(None)`, so what `None` means is up to the implementor.
pub trait RangeSource {
    /// Creates a fresh cursor. `None` means the source's own default.
    fn range(&self, config: Option<RangeConfig>) -> Result<RangeCursor, StepwiseError>;

    /// Creates a fresh cursor over the source's default configuration.
    fn cursor(&self) -> Result<RangeCursor, StepwiseError> {
        self.range(None)
    }
}

/// A plain record of named fields that can also be iterated as a range.
///
/// The fields are ordinary data; iteration never reads or writes them. Every
/// call to [`range`](RangeSource::range) (or every `for` loop over
/// `&RangeIterable`) starts a new cursor, so the record can be iterated any
/// number of times, including from several threads at once.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use stepwise::{RangeConfig, RangeIterable, RangeSource};
///
/// let record = RangeIterable::new().with_field("name", json!("numbers"));
///
/// let values: Vec<i64> = record.range(Some(RangeConfig::new(10, 20, 3))).unwrap().collect();
/// assert_eq!(values, vec![10, 13, 16, 19]);
///
/// // Default iteration covers 0..100.
/// assert_eq!((&record).into_iter().count(), 100);
/// assert_eq!(record.get("name"), Some(&json!("numbers")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeIterable {
    fields: Map<String, Value>,
}

impl RangeIterable {
    /// Creates a record with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from initial fields. Later duplicates win.
    pub fn from_fields<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Adds a field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the record's own fields.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Creates a cursor from a JSON-shaped configuration.
    ///
    /// # Errors
    ///
    /// [`StepwiseError::InvalidConfiguration`] if an option is not an
    /// integer, [`StepwiseError::NonTerminating`] for a zero step.
    pub fn range_from_value(&self, options: &Value) -> Result<RangeCursor, StepwiseError> {
        self.range(Some(RangeConfig::from_value(options)?))
    }
}

/// `None` is `{ first: 0, last: 100, step: 1 }`.
impl RangeSource for RangeIterable {
    fn range(&self, config: Option<RangeConfig>) -> Result<RangeCursor, StepwiseError> {
        config.unwrap_or_default().cursor()
    }
}

impl<'a> IntoIterator for &'a RangeIterable {
    type Item = i64;
    type IntoIter = RangeCursor;

    // Same as `range(None)`; the default configuration always terminates.
    fn into_iter(self) -> Self::IntoIter {
        RangeCursor::new_unchecked(RangeConfig::default())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RangeIterable {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}
