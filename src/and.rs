use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Example:
/// ```
/// use footless::and::AndExt;
/// use footless::cursors::CharCursor;
/// use footless::parser::Parser;
/// use footless::satisfy::token;
///
/// let cursor = CharCursor::new("a.b");
/// let (((a, _), b), cursor) = token('a')
///     .and(token('.'))
///     .and(token('b'))
///     .parse(cursor)
///     .unwrap();
/// assert_eq!((a, b), ('a', 'b'));
/// assert_eq!(cursor.remaining(), "");
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Sequence two parsers, keeping only the first output
pub struct Left<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Parser for Left<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (result, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((result, cursor))
    }
}

/// Sequence two parsers, keeping only the second output
pub struct Right<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Parser for Right<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .left() and .right() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }

    /// Run `other` after `self` and keep the output of `self`
    fn left<P>(self, other: P) -> Left<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        Left {
            parser1: self,
            parser2: other,
        }
    }

    /// Run `other` after `self` and keep the output of `other`
    fn right<P>(self, other: P) -> Right<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        Right {
            parser1: self,
            parser2: other,
        }
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::{CharCursor, TokenCursor};
    use crate::map::MapExt;
    use crate::satisfy::token;
    use crate::testing::assert_parses_equally;

    #[test]
    fn test_and_both_succeed() {
        let cursor = CharCursor::new("A5xyz");
        let parser = token('A').and(token('5'));

        let ((a, five), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(cursor.remaining(), "xyz");
    }

    #[test]
    fn test_and_first_fails() {
        let cursor = CharCursor::new("Bxyz");
        let err = token('A').and(token('x')).parse(cursor).unwrap_err();
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_and_second_fails_with_its_error() {
        let cursor = CharCursor::new("Axyz");
        let err = token('A').and(token('5')).parse(cursor).unwrap_err();

        assert_eq!(err, token('5').parse(cursor.next().unwrap().1).unwrap_err());
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn test_and_chain() {
        let data = [1, 2, 3];
        let cursor = TokenCursor::new(&data);
        let parser = token(1).and(token(2)).and(token(3));

        let (((a, b), c), cursor) = parser.parse(cursor).unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_associativity() {
        let flat_left = token('a')
            .and(token('b'))
            .and(token('c'))
            .map(|((a, b), c)| (a, b, c));
        let flat_right = token('a')
            .and(token('b').and(token('c')))
            .map(|(a, (b, c))| (a, b, c));

        for input in ["abc", "abx", "ab", "xbc", "abcd", ""] {
            assert_parses_equally(&flat_left, &flat_right, CharCursor::new(input), None);
        }
    }

    #[test]
    fn test_left_and_right() {
        let cursor = CharCursor::new("<x>");
        let (x, cursor) = token('<').right(token('x')).left(token('>')).parse(cursor).unwrap();

        assert_eq!(x, 'x');
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_and_function_syntax() {
        let cursor = CharCursor::new("XY");
        let ((x, y), _) = and(token('X'), token('Y')).parse(cursor).unwrap();
        assert_eq!((x, y), ('X', 'Y'));
    }
}
