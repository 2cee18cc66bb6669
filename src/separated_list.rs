use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
///
/// # Note
/// - Requires at least one element
/// - A separator not followed by an item is left unconsumed
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<P, PS> Parser for SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        // Parse the first element (required)
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((value, next_cursor)) = self.parser.parse(after_separator) else {
                break;
            };
            let progressed = next_cursor.position() != cursor.position();
            results.push(value);
            cursor = next_cursor;
            if !progressed {
                break;
            }
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser,
    PS: Parser<Cursor = P::Cursor>,
{
    SeparatedList::new(parser, separator)
}
