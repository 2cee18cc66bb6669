use footless::prelude::*;
use footless::testing::assert_parse_succeeds;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Num(i64),
    Plus,
    Minus,
    Times,
    LParen,
    RParen,
}

fn number<'a>() -> impl Parser<Cursor = TokenCursor<'a, Tok>, Output = i64> + Send + Sync {
    from_fn(|cursor: TokenCursor<'a, Tok>| match cursor.next() {
        Some((Tok::Num(n), next)) => Ok((n, next)),
        Some((found, _)) => Err(ParseError::Unexpected {
            expected: "number".into(),
            found: found.describe(),
            position: cursor.position(),
        }),
        None => Err(ParseError::EndOfInput {
            expected: "number".into(),
            position: cursor.position(),
        }),
    })
}

fn factor<'a>() -> impl Parser<Cursor = TokenCursor<'a, Tok>, Output = i64> + Send + Sync {
    number().or(between(token(Tok::LParen), lazy(expr), token(Tok::RParen)))
}

fn term<'a>() -> impl Parser<Cursor = TokenCursor<'a, Tok>, Output = i64> + Send + Sync {
    factor()
        .and(token(Tok::Times).right(factor()).zero_or_more())
        .map(|(first, rest): (i64, Vec<i64>)| rest.into_iter().fold(first, |acc, n| acc * n))
}

fn expr<'a>() -> BoxedParser<'a, TokenCursor<'a, Tok>, i64> {
    let op = token(Tok::Plus).or(token(Tok::Minus));
    term()
        .and(op.and(term()).zero_or_more())
        .map(|(first, rest): (i64, Vec<(Tok, i64)>)| {
            rest.into_iter().fold(first, |acc, (op, n)| match op {
                Tok::Plus => acc + n,
                _ => acc - n,
            })
        })
        .boxed()
}

#[test]
fn arithmetic_over_token_enum() {
    use Tok::*;
    let tokens = [Num(2), Plus, Num(3), Times, LParen, Num(4), Minus, Num(1), RParen];

    let rest = assert_parse_succeeds(&expr(), TokenCursor::new(&tokens), Some(&11), Some(9));
    assert!(rest.is_at_end());
}

#[test]
fn arithmetic_stops_before_unmatched_tokens() {
    use Tok::*;
    let tokens = [Num(1), Minus, Num(5), RParen, Num(9)];

    let (value, rest) = expr().parse(TokenCursor::new(&tokens)).unwrap();
    assert_eq!(value, -4);
    assert_eq!(rest.remaining(), &[RParen, Num(9)]);
}

#[test]
fn arithmetic_reports_unclosed_paren() {
    use Tok::*;
    let tokens = [LParen, Num(1), Plus, Num(2)];

    let err = expr().left(end_of_input()).parse(TokenCursor::new(&tokens)).unwrap_err();
    assert_eq!(err.position(), 4);
    assert!(err.to_string().contains("found end of input"), "{}", err);
}

#[test]
fn same_parser_on_many_threads() {
    use Tok::*;
    let inputs = vec![
        vec![Num(1), Plus, Num(1)],
        vec![Num(6), Times, Num(7)],
        vec![LParen, Num(10), Minus, Num(4), RParen, Times, Num(2)],
        vec![Times],
    ];
    let expected = [Some(2), Some(42), Some(12), None];

    let parser = expr();
    let results: Vec<Option<i64>> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let parser = &parser;
                s.spawn(move || {
                    parser
                        .parse(TokenCursor::new(input.as_slice()))
                        .ok()
                        .map(|(v, _)| v)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(None))
            .collect()
    });

    assert_eq!(results, expected);
}

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i64),
    List(Vec<Value>),
}

fn value<'a>() -> BoxedParser<'a, CharCursor<'a>, Value> {
    let int = satisfy("digit", |c: &char| c.is_ascii_digit())
        .one_or_more()
        .map(|ds: Vec<char>| {
            Value::Int(ds.iter().fold(0, |acc, d| {
                acc * 10 + i64::from(d.to_digit(10).unwrap_or(0))
            }))
        });
    let items = separated_list(lazy(value), token(',')).optional(Vec::new());
    let list = between(token('['), items, token(']')).map(Value::List);

    int.or(list).boxed()
}

#[test]
fn nested_lists() {
    use Value::*;
    let (parsed, rest) = value().parse(CharCursor::new("[1,[2,30],[]]")).unwrap();

    assert_eq!(
        parsed,
        List(vec![Int(1), List(vec![Int(2), Int(30)]), List(vec![])])
    );
    assert!(rest.is_at_end());
}

#[test]
fn nested_lists_trailing_comma() {
    let err = value().parse(CharCursor::new("[1,]")).unwrap_err();

    assert_eq!(err.position(), 2);
    assert!(err.to_string().contains("found ','"), "{}", err);
}

#[test]
fn deep_nesting_terminates() {
    let depth = 200;
    let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let (_, rest) = value().parse(CharCursor::new(&input)).unwrap();
    assert_eq!(rest.position(), depth * 2);
}

#[test]
fn spans_of_list_items() {
    let word = satisfy("letter", |c: &char| c.is_alphabetic())
        .one_or_more()
        .spanned()
        .map(|(_, span): (Vec<char>, Span)| span);
    let words = separated_list(word, token(' '));

    let (spans, _) = words.parse(CharCursor::new("ab cde f")).unwrap();
    assert_eq!(
        spans,
        vec![Span::new(0, 2), Span::new(3, 6), Span::new(7, 8)]
    );
}
