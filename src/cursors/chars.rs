use crate::cursor::Cursor;

/// Cursor over the characters of a string slice
///
/// Positions count characters, not bytes, so multi-byte characters advance the
/// position by one like any other token.
#[derive(Debug, Copy, Clone)]
pub struct CharCursor<'code> {
    source: &'code str,
    /// Byte offset of the next character in `source`
    offset: usize,
    /// Number of characters consumed
    position: usize,
}

impl<'code> CharCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        CharCursor {
            source,
            offset: 0,
            position: 0,
        }
    }

    /// The text not yet consumed
    pub fn remaining(&self) -> &'code str {
        &self.source[self.offset..]
    }

    /// The whole input this cursor was created from
    pub fn source(&self) -> &'code str {
        self.source
    }
}

impl<'code> Cursor for CharCursor<'code> {
    type Element = char;

    fn next(self) -> Option<(Self::Element, Self)> {
        let ch = self.remaining().chars().next()?;
        Some((
            ch,
            CharCursor {
                source: self.source,
                offset: self.offset + ch.len_utf8(),
                position: self.position + 1,
            },
        ))
    }

    fn position(&self) -> usize {
        self.position
    }
}

impl<'code> PartialEq for CharCursor<'code> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.remaining() == other.remaining()
    }
}

impl<'code> Eq for CharCursor<'code> {}

impl<'code> From<&'code str> for CharCursor<'code> {
    fn from(source: &'code str) -> Self {
        CharCursor::new(source)
    }
}
