//! Error type for script parsing.

use std::fmt;
use std::io;

/// Errors that can occur while reading a walk script.
#[derive(Debug)]
pub enum ScriptError {
    /// An I/O error occurred while reading the input.
    Io(io::Error),
    /// The input ended before the named quantity was read.
    UnexpectedEof {
        /// What the parser was expecting when the input ran out.
        expected: &'static str,
    },
    /// A token is not an unsigned integer.
    InvalidToken {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input (expected {expected})")
            }
            Self::InvalidToken { token } => write!(f, "invalid token {token:?}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
