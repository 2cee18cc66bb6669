use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original cursor, so whatever the
/// first parser read before failing is never consumed. When both fail, the
/// second parser's error is returned.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
