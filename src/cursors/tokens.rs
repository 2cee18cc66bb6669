use crate::cursor::Cursor;
use crate::token::Token;

/// Cursor over a slice of arbitrary tokens
///
/// A `Valid` cursor whose position is past the end of `data` behaves like
/// `EndOfInput`.
#[derive(Debug)]
pub enum TokenCursor<'code, T> {
    Valid { data: &'code [T], position: usize },
    EndOfInput { data: &'code [T] },
}

impl<'code, T> Clone for TokenCursor<'code, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'code, T> Copy for TokenCursor<'code, T> {}

impl<'code, T> TokenCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return TokenCursor::EndOfInput { data };
        }
        TokenCursor::Valid { data, position: 0 }
    }

    /// The tokens not yet consumed
    pub fn remaining(&self) -> &'code [T] {
        match self {
            TokenCursor::Valid { data, position } => data.get(*position..).unwrap_or(&[]),
            TokenCursor::EndOfInput { .. } => &[],
        }
    }

    /// The whole input this cursor was created from
    pub fn source(&self) -> &'code [T] {
        match self {
            TokenCursor::Valid { data, .. } => data,
            TokenCursor::EndOfInput { data } => data,
        }
    }
}

impl<'code, T: Token> Cursor for TokenCursor<'code, T> {
    type Element = T;

    fn next(self) -> Option<(Self::Element, Self)> {
        match self {
            TokenCursor::Valid { data, position } => {
                let token = data.get(position)?.clone();
                let next = if position + 1 >= data.len() {
                    TokenCursor::EndOfInput { data }
                } else {
                    TokenCursor::Valid {
                        data,
                        position: position + 1,
                    }
                };
                Some((token, next))
            }
            TokenCursor::EndOfInput { .. } => None,
        }
    }

    fn position(&self) -> usize {
        match self {
            TokenCursor::Valid { data, position } => (*position).min(data.len()),
            TokenCursor::EndOfInput { data } => data.len(),
        }
    }
}

impl<'code, T: PartialEq> PartialEq for TokenCursor<'code, T> {
    fn eq(&self, other: &Self) -> bool {
        let position = |cursor: &Self| match cursor {
            TokenCursor::Valid { data, position } => (*position).min(data.len()),
            TokenCursor::EndOfInput { data } => data.len(),
        };
        position(self) == position(other) && self.remaining() == other.remaining()
    }
}

impl<'code, T: Eq> Eq for TokenCursor<'code, T> {}

impl<'code, T> From<&'code [T]> for TokenCursor<'code, T> {
    fn from(data: &'code [T]) -> Self {
        TokenCursor::new(data)
    }
}

impl<'code, T, const N: usize> From<&'code [T; N]> for TokenCursor<'code, T> {
    fn from(data: &'code [T; N]) -> Self {
        TokenCursor::new(data)
    }
}
