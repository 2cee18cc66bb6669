use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value fails at the position where the inner parser started.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<P, F> Parser for FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(ParseError::message(
                self.error_message.clone(),
                cursor.position(),
            ))
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser + Sized {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
