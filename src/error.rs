// WHY: Single error type for every fallible core operation
// Search misses are Option, so only caller contract violations land here

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// Buffer index outside `[0, len)` (or `[0, len]` for range ends)
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A documented numeric precondition was violated
    #[error("argument `{name}` is out of range: {reason}")]
    ArgumentRange { name: &'static str, reason: String },

    /// Text that should have held an integer did not
    #[error("invalid integer text: {0:?}")]
    InvalidNumber(String),
}

impl TextError {
    pub(crate) fn range(name: &'static str, reason: impl Into<String>) -> Self {
        TextError::ArgumentRange {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TextError>;
