use crate::cursor::Cursor;
use crate::error::ParseResult;
use std::rc::Rc;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is a pure function from a cursor to a [`ParseResult`]. Running it
/// never mutates the parser, so the same value can be invoked any number of
/// times and from several threads at once.
pub trait Parser {
    type Cursor: Cursor;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success, or
    /// Err if the parse fails. The caller's cursor is never consumed by a
    /// failure; it stays valid for backtracking.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Rc<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        (**self).parse(cursor)
    }
}
