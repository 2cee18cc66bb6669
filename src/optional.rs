use crate::or::Or;
use crate::parser::Parser;
use crate::pure::Pure;

/// Parser that runs `parser` and falls back to `otherwise` without consuming input
pub type Optional<P, O> = Or<P, Pure<<P as Parser>::Cursor, O>>;

/// Try `parser`; if it fails, succeed with `otherwise` at the original cursor
///
/// The resulting parser never fails.
pub fn optional<P>(parser: P, otherwise: P::Output) -> Optional<P, P::Output>
where
    P: Parser,
    P::Output: Clone,
{
    Or::new(parser, Pure::new(otherwise))
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self, otherwise: Self::Output) -> Optional<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        optional(self, otherwise)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursor::Cursor;
    use crate::cursors::CharCursor;
    use crate::or::OrExt;
    use crate::pure::pure;
    use crate::satisfy::token;
    use crate::testing::assert_parses_equally;

    #[test]
    fn test_optional_present() {
        let cursor = CharCursor::new("abc");
        let (ch, cursor) = optional(token('a'), 'z').parse(cursor).unwrap();

        assert_eq!(ch, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_optional_absent() {
        let cursor = CharCursor::new("baaa");
        let (ch, after) = optional(token('a'), 'z').parse(cursor).unwrap();

        assert_eq!(ch, 'z');
        assert_eq!(after, cursor);
        assert_eq!(after.position(), 0);
    }

    #[test]
    fn test_optional_at_end_of_input() {
        let cursor = CharCursor::new("");
        let (ch, after) = token('a').optional('-').parse(cursor).unwrap();

        assert_eq!(ch, '-');
        assert_eq!(after, cursor);
    }

    #[test]
    fn test_optional_partial_match_is_not_consumed() {
        let cursor = CharCursor::new("ax");
        let parser = token('a').and(token('b')).optional(('?', '?'));

        let (pair, after) = parser.parse(cursor).unwrap();
        assert_eq!(pair, ('?', '?'));
        assert_eq!(after, cursor);
    }

    #[test]
    fn test_optional_never_fails() {
        let parser = token('a').optional('z');
        for input in ["", "a", "b", "ab", "ba"] {
            let cursor = CharCursor::new(input);
            let (value, after) = parser.parse(cursor).unwrap();
            if value == 'a' {
                assert_eq!(after.position(), 1);
            } else {
                assert_eq!(after, cursor);
            }
        }
    }

    #[test]
    fn test_optional_is_choice_with_pure() {
        let optional_a = token('a').optional('z');
        let choice = token('a').or(pure('z'));

        for input in ["", "a", "b", "ab", "ba"] {
            assert_parses_equally(&optional_a, &choice, CharCursor::new(input), Some(true));
        }
    }
}
