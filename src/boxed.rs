use crate::parser::Parser;

/// Type-erased parser that can be shared between threads
///
/// Named grammar functions that refer to themselves through
/// [`lazy`](crate::lazy::lazy) return this type, since their concrete
/// combinator type would otherwise contain itself.
pub type BoxedParser<'p, C, O> = Box<dyn Parser<Cursor = C, Output = O> + Send + Sync + 'p>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, Self::Cursor, Self::Output>
    where
        Self: Send + Sync + 'p,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}
