//! Error types for compute-patch.
//!
//! The diff itself cannot fail on valid input. The only engine-side error is
//! [`PatchError::MalformedTable`], which means the choice table is internally
//! inconsistent and is always a bug, never a property of the input.

use thiserror::Error;

/// Errors that can occur while computing, parsing or applying a patch.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The reconstructor hit a choice cell it cannot step back from
    #[error("malformed choice table at ({row}, {col}): {reason}")]
    MalformedTable {
        /// Original-line cursor when the fault was detected
        row: usize,
        /// Target-line cursor when the fault was detected
        col: usize,
        /// What was wrong with the cell
        reason: &'static str,
    },

    /// Rendered patch text is not well-formed
    #[error("patch parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the patch text
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// A record points before lines that were already consumed
    #[error("patch record at original line {line} is out of order (cursor at {cursor})")]
    OutOfOrder {
        /// Original line the record refers to
        line: usize,
        /// Number of original lines already consumed
        cursor: usize,
    },

    /// A record points past the end of the original
    #[error("patch record refers to original line {line}, but the original has {len} lines")]
    LineOutOfRange {
        /// Original line the record refers to
        line: usize,
        /// Number of lines in the original
        len: usize,
    },

    /// Input line is not valid UTF-8
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 {
        /// 1-based line number
        line: usize,
    },

    /// I/O failure while reading inputs or writing a patch
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;

impl PatchError {
    /// Create a parse error with a message.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed-table error for the cell at `(row, col)`.
    pub(crate) fn malformed(row: usize, col: usize, reason: &'static str) -> Self {
        Self::MalformedTable { row, col, reason }
    }

    /// Whether this error signals an engine defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::MalformedTable { .. })
    }
}
