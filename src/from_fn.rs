use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Parser built directly from a function over cursors
pub struct FromFn<C, F> {
    function: F,
    _cursor: PhantomData<fn(C) -> C>,
}

impl<C, F> FromFn<C, F> {
    pub fn new(function: F) -> Self {
        FromFn {
            function,
            _cursor: PhantomData,
        }
    }
}

impl<C, F> fmt::Debug for FromFn<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn")
            .field("function", &"<function>")
            .finish()
    }
}

impl<C, F, O> Parser for FromFn<C, F>
where
    C: Cursor,
    F: Fn(C) -> ParseResult<O, C>,
{
    type Cursor = C;
    type Output = O;

    fn parse(&self, cursor: C) -> ParseResult<O, C> {
        (self.function)(cursor)
    }
}

/// Wrap a raw parse function as a composable parser
pub fn from_fn<C, F, O>(function: F) -> FromFn<C, F>
where
    C: Cursor,
    F: Fn(C) -> ParseResult<O, C>,
{
    FromFn::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::CharCursor;
    use crate::error::ParseError;

    #[test]
    fn test_two_chars_at_once() {
        let pair = from_fn(|cursor: CharCursor| {
            let (a, cursor) = cursor
                .next()
                .ok_or_else(|| ParseError::message("missing first", cursor.position()))?;
            let (b, cursor) = cursor
                .next()
                .ok_or_else(|| ParseError::message("missing second", cursor.position()))?;
            Ok(((a, b), cursor))
        });

        let ((a, b), cursor) = pair.parse(CharCursor::new("xyz")).unwrap();
        assert_eq!((a, b), ('x', 'y'));
        assert_eq!(cursor.position(), 2);

        let err = pair.parse(CharCursor::new("x")).unwrap_err();
        assert_eq!(err.to_string(), "missing second at position 1");
    }
}
