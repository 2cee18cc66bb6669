use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::Token;
use std::borrow::Cow;

/// Parser combinator that replaces a failure with a single "expected" message
///
/// The new error is reported at the position where the labelled parser
/// started, with the token found there (or end of input).
pub struct Label<P> {
    parser: P,
    expected: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, expected: Cow<'static, str>) -> Self {
        Label { parser, expected }
    }
}

impl<P> Parser for Label<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        self.parser.parse(cursor).map_err(|_| match cursor.next() {
            Some((token, _)) => ParseError::Unexpected {
                expected: self.expected.clone(),
                found: token.describe(),
                position: cursor.position(),
            },
            None => ParseError::EndOfInput {
                expected: self.expected.clone(),
                position: cursor.position(),
            },
        })
    }
}

/// Convenience function to create a Label parser
pub fn label<P>(parser: P, expected: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser,
{
    Label::new(parser, expected.into())
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt: Parser + Sized {
    fn label(self, expected: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, expected.into())
    }
}

/// Implement LabelExt for all parsers
impl<P> LabelExt for P where P: Parser {}
