use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Greedy: matches as many times as possible and leaves the first non-matching
/// suffix unconsumed. Fails with the parser's own error when the first attempt
/// fails. If the parser succeeds without consuming anything, repetition stops
/// after that single output.
pub struct OneOrMore<P> {
    parser: P,
}

impl<P> OneOrMore<P> {
    pub fn new(parser: P) -> Self {
        OneOrMore { parser }
    }
}

impl<P> Parser for OneOrMore<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, start: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        // First parse must succeed
        let (first_value, mut cursor) = self.parser.parse(start)?;
        let mut results = vec![first_value];
        let mut previous = start;

        while cursor.position() != previous.position() {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    previous = cursor;
                    cursor = next_cursor;
                }
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a OneOrMore parser
pub fn one_or_more<P>(parser: P) -> OneOrMore<P>
where
    P: Parser,
{
    OneOrMore::new(parser)
}

/// Extension trait to add .one_or_more() method support for parsers
pub trait OneOrMoreExt: Parser + Sized {
    fn one_or_more(self) -> OneOrMore<Self> {
        OneOrMore::new(self)
    }
}

/// Implement OneOrMoreExt for all parsers
impl<P> OneOrMoreExt for P where P: Parser {}
