//! Range configuration.
//!
//! A [`RangeConfig`] names the three knobs of a range cursor: where it
//! starts, the exclusive bound it stops before, and how far it moves per
//! step. Every field has a default, so a partially specified configuration
//! (`{ "last": 20 }`) is always complete once parsed.
//!
//! Typed callers build configurations directly. Dynamic callers hand over a
//! JSON value or a TOML document and get [`StepwiseError::InvalidConfiguration`]
//! for anything that is not an integer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::{RangeCursor, RangeSource, StepwiseError};

/// Default starting position.
pub const DEFAULT_FIRST: i64 = 0;

/// Default exclusive bound.
pub const DEFAULT_LAST: i64 = 100;

/// Default step.
pub const DEFAULT_STEP: i64 = 1;

/// Start, exclusive end, and step of a range cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub first: i64,
    pub last: i64,
    pub step: i64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST,
            last: DEFAULT_LAST,
            step: DEFAULT_STEP,
        }
    }
}

impl RangeConfig {
    pub fn new(first: i64, last: i64, step: i64) -> Self {
        Self { first, last, step }
    }

    pub fn with_first(mut self, first: i64) -> Self {
        self.first = first;
        self
    }

    pub fn with_last(mut self, last: i64) -> Self {
        self.last = last;
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Returns true if a cursor over this configuration yields nothing.
    ///
    /// Emptiness follows the direction of travel: an upward step needs
    /// `first < last`, a downward step needs `first > last`. A zero step is
    /// only empty when `first == last`.
    pub fn is_empty(&self) -> bool {
        match self.step.signum() {
            1 => self.first >= self.last,
            -1 => self.first <= self.last,
            _ => self.first == self.last,
        }
    }

    /// Creates a fresh cursor over this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StepwiseError::NonTerminating`] for a zero step over a
    /// non-empty span.
    pub fn cursor(self) -> Result<RangeCursor, StepwiseError> {
        RangeCursor::from_config(self)
    }

    /// Parses a JSON-shaped configuration.
    ///
    /// `null` is the default configuration. Objects may set any of
    /// `first`, `last` and `step`; other keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use stepwise::RangeConfig;
    ///
    /// let config = RangeConfig::from_value(&json!({ "last": 20, "step": 4 })).unwrap();
    /// assert_eq!(config, RangeConfig::new(0, 20, 4));
    ///
    /// assert!(RangeConfig::from_value(&json!({ "step": "4" })).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, StepwiseError> {
        parse_value(value).inspect_err(|error| warn!(%error, "rejected range configuration"))
    }

    /// Parses a TOML document with top-level `first`, `last` and `step` keys.
    pub fn from_toml_str(document: &str) -> Result<Self, StepwiseError> {
        parse_toml(document).inspect_err(|error| warn!(%error, "rejected range configuration"))
    }
}

/// A configuration is its own default: `range(None)` iterates `self`.
impl RangeSource for RangeConfig {
    fn range(&self, config: Option<RangeConfig>) -> Result<RangeCursor, StepwiseError> {
        RangeCursor::from_config(config.unwrap_or(*self))
    }
}

fn parse_value(value: &Value) -> Result<RangeConfig, StepwiseError> {
    let options = match value {
        Value::Null => return Ok(RangeConfig::default()),
        Value::Object(options) => options,
        other => {
            return Err(StepwiseError::invalid(
                "config",
                format!("must be an object, found {}", json_kind(other)),
            ));
        }
    };

    let mut config = RangeConfig::default();
    if let Some(value) = options.get("first") {
        config.first = json_integer("first", value)?;
    }
    if let Some(value) = options.get("last") {
        config.last = json_integer("last", value)?;
    }
    if let Some(value) = options.get("step") {
        config.step = json_integer("step", value)?;
    }
    Ok(config)
}

fn json_integer(option: &'static str, value: &Value) -> Result<i64, StepwiseError> {
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| {
            if number.is_f64() {
                StepwiseError::invalid(option, format!("must be an integer, found {number}"))
            } else {
                StepwiseError::invalid(option, format!("{number} is out of range for i64"))
            }
        }),
        other => Err(StepwiseError::invalid(
            option,
            format!("must be an integer, found {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_toml(document: &str) -> Result<RangeConfig, StepwiseError> {
    let table: toml::Table = toml::from_str(document)
        .map_err(|e| StepwiseError::invalid("config", e.message().to_owned()))?;

    let mut config = RangeConfig::default();
    for (option, slot) in [
        ("first", &mut config.first),
        ("last", &mut config.last),
        ("step", &mut config.step),
    ] {
        match table.get(option) {
            None => {}
            Some(toml::Value::Integer(value)) => *slot = *value,
            Some(other) => {
                return Err(StepwiseError::invalid(
                    option,
                    format!("must be an integer, found {}", other.type_str()),
                ));
            }
        }
    }
    Ok(config)
}
