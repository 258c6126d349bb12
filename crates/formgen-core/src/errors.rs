//! Error types for header parsing.

use thiserror::Error;

/// Errors during header parsing and class extraction.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected token at line {line}: expected {expected}, found {found:?}")]
    UnexpectedToken {
        found: String,
        expected: String,
        line: u32,
    },

    #[error("Unterminated block comment starting at line {line}")]
    UnterminatedComment { line: u32 },

    #[error("Unterminated literal starting at line {line}")]
    UnterminatedLiteral { line: u32 },

    #[error("Unbalanced braces: block opened at line {line} is never closed")]
    UnbalancedBraces { line: u32 },

    #[error("Class or struct '{name}' not found in header")]
    ClassNotFound { name: String },

    #[error("Unexpected end of input")]
    UnexpectedEof,
}
