use crate::error::ParseResult;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// The factory runs afresh on every parse, so a grammar function may refer to
/// itself through `lazy` without recursing while the grammar is being built.
/// Each recursive step must consume input before recursing again or the parse
/// will not terminate.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Output, Self::Cursor> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
