use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that applies a parsed function to a parsed value
///
/// Runs the function parser, then the argument parser on the cursor it left,
/// and calls the function with the argument. Either failure is returned as is.
/// This is the general form of sequencing: any "parse A then B and combine"
/// can be written as `pure(combine).apply(a).apply(b)` with a curried `combine`.
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<PF, PA, B> Parser for Apply<PF, PA>
where
    PF: Parser,
    PA: Parser<Cursor = PF::Cursor>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type Cursor = PF::Cursor;
    type Output = B;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let (function, cursor) = self.function.parse(cursor)?;
        let (argument, cursor) = self.argument.parse(cursor)?;
        Ok((function(argument), cursor))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<PF, PA, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser,
    PA: Parser<Cursor = PF::Cursor>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers producing functions
pub trait ApplyExt: Parser + Sized {
    fn apply<P, B>(self, argument: P) -> Apply<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
        Self::Output: FnOnce(P::Output) -> B,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<P> ApplyExt for P where P: Parser {}
