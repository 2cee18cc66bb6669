use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and returns just the `content` value with
/// the delimiters discarded. Does not skip whitespace.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<P1, P2, P3> Parser for Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
    P3: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((content, cursor))
    }
}

/// Creates a parser that matches content between delimiters
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
    P3: Parser<Cursor = P1::Cursor>,
{
    Between::new(open, content, close)
}
