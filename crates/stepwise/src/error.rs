//! Error types for range construction.

/// Errors raised when a cursor is requested.
///
/// Both variants surface at cursor-creation time. A cursor that was
/// created successfully never fails while being advanced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepwiseError {
    /// A range option was present but not usable as an `i64`.
    #[error("invalid range configuration: `{option}` {reason}")]
    InvalidConfiguration {
        option: &'static str,
        reason: String,
    },

    /// A zero step over a non-empty span would never reach its bound.
    #[error("step of zero never moves from {first} towards {last}")]
    NonTerminating { first: i64, last: i64 },
}

impl StepwiseError {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            option,
            reason: reason.into(),
        }
    }
}
