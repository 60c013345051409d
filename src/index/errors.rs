//! Index error types
//!
//! Error codes:
//! - ODX_INDEX_EMPTY (RECOVERABLE)
//!
//! An absent key on search is not an error (it is an empty result), and
//! duplicate insertion or deletion of a missing key are defined no-ops.

use std::fmt;

use thiserror::Error;

/// Severity levels for index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The index remains valid and usable after the error
    Recoverable,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Recoverable => write!(f, "RECOVERABLE"),
        }
    }
}

/// Index-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    /// Min/max queried on an empty index
    OdxIndexEmpty,
}

impl IndexErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IndexErrorCode::OdxIndexEmpty => "ODX_INDEX_EMPTY",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Recoverable
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors surfaced by order index operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The index holds no entries, so there is no minimum or maximum order
    #[error("ODX_INDEX_EMPTY: index holds no entries")]
    EmptyIndex,
}

impl IndexError {
    /// Returns the error code
    pub fn code(&self) -> IndexErrorCode {
        match self {
            IndexError::EmptyIndex => IndexErrorCode::OdxIndexEmpty,
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code().severity()
    }
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;
