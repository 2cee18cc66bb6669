//! # Footless - Parser Combinator Toolkit
//!
//! Composable parsers over arbitrary token streams: characters, bytes,
//! integers or caller-defined token enums.
//!
//! Parsers are built from primitive matchers ([`satisfy`], [`token`], [`any`])
//! and combinators ([`or`], [`apply`], [`optional`], [`one_or_more`], [`lazy`], ...).
//! Building a parser only composes values; nothing is parsed until
//! [`Parser::parse`] is called with a cursor. The library emphasizes:
//!
//! - **Immutable cursors**: advancing returns a new cursor, so backtracking is
//!   just reusing an old one
//! - **Zero panics**: every failure is a [`ParseError`] value
//! - **Composability**: small parsers combine into larger ones, including
//!   self-referential grammars through [`lazy`]
//!
//! ```
//! use footless::prelude::*;
//!
//! let digits = satisfy("digit", |c: &char| c.is_ascii_digit()).one_or_more();
//! let number = digits.map(|ds: Vec<char>| ds.into_iter().collect::<String>());
//!
//! let (text, rest) = number.parse(CharCursor::new("123abc")).unwrap();
//! assert_eq!(text, "123");
//! assert_eq!(rest.position(), 3);
//! ```

pub mod and;
pub mod apply;
pub mod between;
pub mod boxed;
pub mod converters;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod from_fn;
pub mod label;
pub mod lazy;
pub mod map;
pub mod one_or_more;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pure;
pub mod satisfy;
pub mod separated_list;
pub mod spanned;
pub mod testing;
pub mod token;
pub mod zero_or_more;

pub use and::and;
pub use apply::apply;
pub use between::between;
pub use boxed::BoxedParser;
pub use cursor::Cursor;
pub use cursors::{CharCursor, TokenCursor};
pub use error::{ParseError, ParseResult};
pub use filter::filter;
pub use from_fn::from_fn;
pub use label::label;
pub use lazy::lazy;
pub use map::map;
pub use one_or_more::one_or_more;
pub use optional::optional;
pub use or::or;
pub use parser::Parser;
pub use pure::pure;
pub use satisfy::{any, end_of_input, satisfy, token};
pub use separated_list::separated_list;
pub use spanned::{Span, spanned};
pub use token::Token;
pub use zero_or_more::zero_or_more;

/// Everything needed to write grammars, including the method-syntax extension traits
pub mod prelude {
    pub use crate::and::AndExt;
    pub use crate::apply::ApplyExt;
    pub use crate::boxed::BoxedExt;
    pub use crate::converters::{extend, join, tuple};
    pub use crate::filter::FilterExt;
    pub use crate::label::LabelExt;
    pub use crate::map::MapExt;
    pub use crate::one_or_more::OneOrMoreExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::spanned::SpannedExt;
    pub use crate::zero_or_more::ZeroOrMoreExt;
    pub use crate::{
        BoxedParser, CharCursor, Cursor, ParseError, ParseResult, Parser, Span, Token, TokenCursor,
        and, any, apply, between, end_of_input, filter, from_fn, label, lazy, map, one_or_more,
        optional, or, pure, satisfy, separated_list, spanned, token, zero_or_more,
    };
}
