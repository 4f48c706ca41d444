//! Error types for date-math parsing and evaluation

use thiserror::Error;

/// Errors that can occur while parsing or evaluating a date-math expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("syntax error at column {column} in '{expression}': {message}")]
    Syntax {
        expression: String,
        column: usize,
        message: String,
    },

    #[error("invalid anchor date '{value}': expected an ISO 8601 timestamp or date")]
    InvalidDate { value: String },

    #[error("invalid amount '{value}' in '{expression}'")]
    InvalidAmount { value: String, expression: String },

    #[error("date math result out of range for '{expression}'")]
    OutOfRange { expression: String },

    #[error("parser internal error: {message}")]
    Internal { message: String },
}
