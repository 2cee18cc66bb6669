use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::Token;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes one token if it satisfies a predicate
pub struct Satisfy<C, F> {
    expect: Cow<'static, str>,
    condition: F,
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C, F> Satisfy<C, F> {
    pub fn new(expect: impl Into<Cow<'static, str>>, condition: F) -> Self {
        Satisfy {
            expect: expect.into(),
            condition,
            _cursor: PhantomData,
        }
    }
}

impl<C, F> Parser for Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    type Cursor = C;
    type Output = C::Element;

    fn parse(&self, cursor: C) -> ParseResult<Self::Output, C> {
        match cursor.next() {
            Some((token, next)) if (self.condition)(&token) => Ok((token, next)),
            Some((token, _)) => Err(ParseError::Unexpected {
                expected: self.expect.clone(),
                found: token.describe(),
                position: cursor.position(),
            }),
            None => Err(ParseError::EndOfInput {
                expected: self.expect.clone(),
                position: cursor.position(),
            }),
        }
    }
}

/// Succeeds if `condition` holds for the next token and returns that token
///
/// `expect` names what the parser is looking for in error messages.
pub fn satisfy<C, F>(expect: impl Into<Cow<'static, str>>, condition: F) -> Satisfy<C, F>
where
    C: Cursor,
    F: Fn(&C::Element) -> bool,
{
    Satisfy::new(expect, condition)
}

/// Match a single token equal to `expected`
pub fn token<C>(expected: C::Element) -> Satisfy<C, impl Fn(&C::Element) -> bool>
where
    C: Cursor,
    C::Element: PartialEq,
{
    Satisfy::new(expected.describe(), move |next: &C::Element| *next == expected)
}

/// Return whatever the next token is, failing only at end of input
pub fn any<C: Cursor>() -> Satisfy<C, fn(&C::Element) -> bool> {
    let condition: fn(&C::Element) -> bool = |_| true;
    Satisfy::new("anything", condition)
}

/// Parser that succeeds with `()` only when no tokens remain
pub struct EndOfInput<C> {
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C> EndOfInput<C> {
    pub fn new() -> Self {
        EndOfInput {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for EndOfInput<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cursor> Parser for EndOfInput<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, cursor: C) -> ParseResult<(), C> {
        match cursor.next() {
            None => Ok(((), cursor)),
            Some((token, _)) => Err(ParseError::Unexpected {
                expected: "end of input".into(),
                found: token.describe(),
                position: cursor.position(),
            }),
        }
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input<C: Cursor>() -> EndOfInput<C> {
    EndOfInput::new()
}
