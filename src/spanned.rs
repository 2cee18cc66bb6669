use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Range of cursor positions consumed by a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of tokens covered by the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let start = cursor.position();
        let (output, cursor) = self.parser.parse(cursor)?;
        Ok(((output, Span::new(start, cursor.position())), cursor))
    }
}

/// Convenience function to create a Spanned parser
pub fn spanned<P: Parser>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

/// Extension trait to add position tracking to any parser
pub trait SpannedExt: Parser + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

/// Implement SpannedExt for all parsers
impl<P> SpannedExt for P where P: Parser {}
