use thiserror::Error;

use crate::Span;

/// Error produced when parsing move notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token is not a layer letter followed by at most one modifier.
    #[error("invalid move token {token:?} at {}..{}", .span.start, .span.end)]
    InvalidMoveToken {
        /// Offending token.
        token: String,
        /// Location of the token in the input.
        span: Span,
    },
}

impl ParseError {
    /// Returns the offending token.
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidMoveToken { token, .. } => token,
        }
    }

    /// Returns the location of the offending token in the input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidMoveToken { span, .. } => *span,
        }
    }
}
