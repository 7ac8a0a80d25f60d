//! Error type shared by the parser, the batch runner and the file source.

use rust_decimal::Decimal;

/// Errors raised while packing a line or a batch of lines.
///
/// Any of these aborts the whole batch: partial output is never returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// A token could not be parsed, or a record is missing a delimiter.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// The package capacity fails the max-weight check.
    #[error("max package weight value exceeded: {capacity}")]
    CapacityExceeded { capacity: Decimal },

    /// The retained item count failed the max-count check before another
    /// item could be added.
    #[error("max item amount exceeded: {count} items already retained")]
    ItemCountExceeded { count: usize },

    /// The input source could not be opened or read.
    #[error("cannot read file")]
    SourceUnavailable,
}

impl PackError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PackError::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PackError>;
