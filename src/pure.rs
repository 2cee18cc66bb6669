use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
///
/// This is the identity element for sequencing: `pure(f).apply(p)` behaves
/// like `p.map(f)`.
pub struct Pure<C, O> {
    value: O,
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C, O> Pure<C, O> {
    pub fn new(value: O) -> Self {
        Pure {
            value,
            _cursor: PhantomData,
        }
    }
}

impl<C, O> Parser for Pure<C, O>
where
    C: Cursor,
    O: Clone,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        Ok((self.value.clone(), cursor))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<C, O>(value: O) -> Pure<C, O>
where
    C: Cursor,
    O: Clone,
{
    Pure::new(value)
}
