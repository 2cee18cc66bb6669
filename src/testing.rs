//! Assertion helpers for tests of grammars built with this crate
//!
//! The helpers panic with a descriptive message on mismatch, so they are meant
//! for `#[test]` functions only.

use crate::cursor::Cursor;
use crate::parser::Parser;
use std::fmt;

/// Assert that `parser` succeeds on `input`
///
/// When given, `expected` must equal the output and `consumed` must equal the
/// number of tokens the parser advanced. Returns the remaining cursor so that
/// consecutive assertions can walk through an input.
#[track_caller]
pub fn assert_parse_succeeds<P>(
    parser: &P,
    input: P::Cursor,
    expected: Option<&P::Output>,
    consumed: Option<usize>,
) -> P::Cursor
where
    P: Parser,
    P::Cursor: fmt::Debug,
    P::Output: PartialEq + fmt::Debug,
{
    match parser.parse(input) {
        Ok((output, remaining)) => {
            if let Some(expected) = expected {
                assert_eq!(
                    &output, expected,
                    "with input {:?}: output should be {:?}, was {:?}",
                    input, expected, output
                );
            }
            if let Some(consumed) = consumed {
                let Some(actually_consumed) = remaining.position().checked_sub(input.position())
                else {
                    panic!(
                        "cursor moved backwards: started at {}, ended at {}",
                        input.position(),
                        remaining.position()
                    );
                };
                assert_eq!(
                    actually_consumed, consumed,
                    "should have consumed {}, took {}",
                    consumed, actually_consumed
                );
            }
            remaining
        }
        Err(err) => panic!("with input {:?}: {}", input, err),
    }
}

/// Assert that `parser` fails on `input` with a non-empty message
#[track_caller]
pub fn assert_parse_fails<P>(parser: &P, input: P::Cursor)
where
    P: Parser,
    P::Cursor: fmt::Debug,
    P::Output: fmt::Debug,
{
    match parser.parse(input) {
        Ok((output, _)) => panic!(
            "parsing succeeded with output {:?}, should have failed",
            output
        ),
        Err(err) => assert!(!err.to_string().is_empty(), "should have an error message"),
    }
}

/// Assert that two parsers produce equal outcomes on `input`
///
/// Outputs, residual cursors and errors must all match. With
/// `should_succeed` set, the shared outcome must also be a success (`true`)
/// or a failure (`false`).
#[track_caller]
pub fn assert_parses_equally<P1, P2>(
    parser1: &P1,
    parser2: &P2,
    input: P1::Cursor,
    should_succeed: Option<bool>,
) where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
    P1::Cursor: PartialEq + fmt::Debug,
    P1::Output: PartialEq + fmt::Debug,
{
    let outcome1 = parser1.parse(input);
    let outcome2 = parser2.parse(input);
    assert_eq!(
        outcome1, outcome2,
        "with input {:?}: parsers should produce the same outcome",
        input
    );
    if let Some(should_succeed) = should_succeed {
        assert_eq!(
            outcome1.is_ok(),
            should_succeed,
            "with input {:?}: parsing should have {}",
            input,
            if should_succeed { "succeeded" } else { "failed" }
        );
    }
}
