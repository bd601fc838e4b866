//! Error taxonomy for the gesture pipeline.

use thiserror::Error;

/// Errors raised by landmark validation, smoother construction,
/// registry lookups and replay input parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    /// Landmark count is not 21, or the image dimensions are not positive.
    /// The caller skips the frame and keeps the previous stable label.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Smoothing buffer constructed with zero capacity.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// Registry query for a key or id that is not in the table.
    #[error("no gesture registered for {query}")]
    LookupMiss { query: String },

    /// Malformed line in a replay stream.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl GestureError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Whether this error only invalidates the current frame.
    pub fn is_frame_local(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, GestureError>;
