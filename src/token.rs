use std::fmt;

/// Trait for the elements a cursor yields
///
/// Any `Clone + Debug` type qualifies: characters, bytes, integers and
/// caller-defined token enums all work without extra impls.
pub trait Token: Clone + fmt::Debug {
    /// Human readable rendering used in error messages
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T: Clone + fmt::Debug> Token for T {}
