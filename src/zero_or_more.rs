use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::one_or_more::OneOrMore;
use crate::or::Or;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that succeeds with an empty list without consuming input
///
/// Unlike `pure(Vec::new())` it builds a fresh list on every parse, so the
/// element type does not have to be `Clone`.
pub struct Empty<C, O> {
    _marker: PhantomData<fn(C) -> (C, O)>,
}

impl<C, O> Empty<C, O> {
    pub fn new() -> Self {
        Empty {
            _marker: PhantomData,
        }
    }
}

impl<C, O> Default for Empty<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cursor, O> Parser for Empty<C, O> {
    type Cursor = C;
    type Output = Vec<O>;

    fn parse(&self, cursor: C) -> ParseResult<Vec<O>, C> {
        Ok((Vec::new(), cursor))
    }
}

/// Parser that matches zero or more occurrences of the given parser
pub type ZeroOrMore<P> = Or<OneOrMore<P>, Empty<<P as Parser>::Cursor, <P as Parser>::Output>>;

/// Match `parser` as many times as possible, succeeding with an empty list
/// when it does not match at all
pub fn zero_or_more<P>(parser: P) -> ZeroOrMore<P>
where
    P: Parser,
{
    Or::new(OneOrMore::new(parser), Empty::new())
}

/// Extension trait to add .zero_or_more() method support for parsers
pub trait ZeroOrMoreExt: Parser + Sized {
    fn zero_or_more(self) -> ZeroOrMore<Self> {
        zero_or_more(self)
    }
}

/// Implement ZeroOrMoreExt for all parsers
impl<P> ZeroOrMoreExt for P where P: Parser {}
