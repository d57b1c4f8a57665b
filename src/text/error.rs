//! Pattern parsing error types.

use thiserror::Error;

/// Errors that can occur while parsing a character pattern
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern ends with a bare backslash
    #[error("Pattern {pattern:?} ends with an unterminated escape")]
    UnterminatedEscape { pattern: String },
}
