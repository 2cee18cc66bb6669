use crate::token::Token;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable snapshot of the remaining input plus the number of
/// elements consumed to reach it. Advancing returns a new cursor and leaves the
/// receiver untouched, so any earlier copy can be reused to backtrack.
pub trait Cursor: Copy + Clone + Sized {
    /// The type of elements this cursor iterates over
    type Element: Token;

    /// Read the element at the current position together with the cursor
    /// advanced past it
    ///
    /// Returns `None` at the end of the input.
    fn next(self) -> Option<(Self::Element, Self)>;

    /// Number of elements consumed since the start of the input
    fn position(&self) -> usize;

    /// Check if there are no elements left
    fn is_at_end(&self) -> bool {
        self.next().is_none()
    }
}
