//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input file errors
    FileNotFound,
    FileReadError,
    FileWriteError,

    // Validation errors
    ShapeError,
    ParseError,
    ValueError,

    // Computation errors
    DegenerateColumn,
    DivideByZeroTie,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::FileNotFound => "FILE_NOT_FOUND",
            ErrorCode::FileReadError => "FILE_READ_ERROR",
            ErrorCode::FileWriteError => "FILE_WRITE_ERROR",
            ErrorCode::ShapeError => "SHAPE_ERROR",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::ValueError => "VALUE_ERROR",
            ErrorCode::DegenerateColumn => "DEGENERATE_COLUMN",
            ErrorCode::DivideByZeroTie => "DIVIDE_BY_ZERO_TIE",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised while validating input or ranking alternatives.
///
/// The display text is the message shown to the user at the CLI boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("Error: Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Error reading the file: {message}")]
    FileReadError { message: String },

    #[error("Error writing the output file: {message}")]
    FileWriteError { message: String },

    #[error("Error: {message}")]
    ShapeError { message: String },

    #[error("Error: {message}")]
    ParseError { message: String },

    #[error("Error: {message}")]
    ValueError { message: String },

    #[error("Error: Criterion column '{column}' contains only zeros and cannot be normalized.")]
    DegenerateColumn { column: String },

    #[error("Error: Alternative '{row}' coincides with both ideal points; its score is undefined.")]
    DivideByZeroTie { row: String },
}

impl TopsisError {
    /// Creates a file-not-found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        TopsisError::FileNotFound { path: path.into() }
    }

    /// Creates a file read error.
    pub fn file_read(message: impl Into<String>) -> Self {
        TopsisError::FileReadError {
            message: message.into(),
        }
    }

    /// Creates a file write error.
    pub fn file_write(message: impl Into<String>) -> Self {
        TopsisError::FileWriteError {
            message: message.into(),
        }
    }

    /// Creates a shape (dimension mismatch) error.
    pub fn shape(message: impl Into<String>) -> Self {
        TopsisError::ShapeError {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        TopsisError::ParseError {
            message: message.into(),
        }
    }

    /// Creates a value error.
    pub fn value(message: impl Into<String>) -> Self {
        TopsisError::ValueError {
            message: message.into(),
        }
    }

    /// Creates a degenerate (zero-norm) column error.
    pub fn degenerate_column(column: impl Into<String>) -> Self {
        TopsisError::DegenerateColumn {
            column: column.into(),
        }
    }

    /// Creates a zero-denominator score error.
    pub fn divide_by_zero_tie(row: impl Into<String>) -> Self {
        TopsisError::DivideByZeroTie { row: row.into() }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::FileNotFound { .. } => ErrorCode::FileNotFound,
            TopsisError::FileReadError { .. } => ErrorCode::FileReadError,
            TopsisError::FileWriteError { .. } => ErrorCode::FileWriteError,
            TopsisError::ShapeError { .. } => ErrorCode::ShapeError,
            TopsisError::ParseError { .. } => ErrorCode::ParseError,
            TopsisError::ValueError { .. } => ErrorCode::ValueError,
            TopsisError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
            TopsisError::DivideByZeroTie { .. } => ErrorCode::DivideByZeroTie,
        }
    }
}
