use std::borrow::Cow;
use thiserror::Error;

/// Outcome of running a parser: the output and the cursor after it, or an error
pub type ParseResult<O, C> = Result<(O, C), ParseError>;

/// Failure produced by a parser
///
/// Every variant renders to a message saying what was expected and, where
/// available, what was found. `position` is the cursor position at which the
/// failure was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found end of input at position {position}")]
    EndOfInput {
        expected: Cow<'static, str>,
        position: usize,
    },
    #[error("expected {expected}, found {found} at position {position}")]
    Unexpected {
        expected: Cow<'static, str>,
        found: String,
        position: usize,
    },
    #[error("{message} at position {position}")]
    Message {
        message: Cow<'static, str>,
        position: usize,
    },
}

impl ParseError {
    /// Free-form failure at `position`
    pub fn message(message: impl Into<Cow<'static, str>>, position: usize) -> Self {
        ParseError::Message {
            message: message.into(),
            position,
        }
    }

    /// Position of the cursor where the failure was detected
    pub fn position(&self) -> usize {
        match self {
            ParseError::EndOfInput { position, .. }
            | ParseError::Unexpected { position, .. }
            | ParseError::Message { position, .. } => *position,
        }
    }

    /// What the failing parser was looking for, if it said
    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseError::EndOfInput { expected, .. } | ParseError::Unexpected { expected, .. } => {
                Some(&**expected)
            }
            ParseError::Message { .. } => None,
        }
    }
}
