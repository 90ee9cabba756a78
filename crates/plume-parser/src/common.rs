//! Shared winnow building blocks for the per-kind line parsers.
//!
//! Every structural pattern is a small winnow parser over `&str`. The helpers
//! at the bottom apply such a parser to a single normalized line.

use winnow::{
    Parser,
    combinator::{alt, delimited, repeat},
    error::{ContextError, ErrMode, ModalResult},
    token::{any, take_while},
};

pub(crate) type Input<'a> = &'a str;
pub(crate) type IResult<O> = ModalResult<O>;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word identifier: letters, digits and underscores.
pub(crate) fn word<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// `[text]`, yielding the trimmed text between the brackets.
pub(crate) fn bracketed<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    delimited('[', take_while(1.., |c: char| c != ']'), ']')
        .map(str::trim)
        .parse_next(input)
}

/// `(text)`, yielding the trimmed text between the parentheses.
pub(crate) fn parenthesized<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    delimited('(', take_while(1.., |c: char| c != ')'), ')')
        .map(str::trim)
        .parse_next(input)
}

/// `"text"`, yielding the text between the quotes.
pub(crate) fn quoted<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    delimited('"', take_while(1.., |c: char| c != '"'), '"').parse_next(input)
}

/// Either a bracketed name or a word identifier, brackets stripped.
pub(crate) fn reference<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    alt((bracketed, word)).parse_next(input)
}

/// Runs `parser` at the start of `line` and requires that only whitespace
/// remains afterwards.
pub(crate) fn parse_whole<'a, O, P>(mut parser: P, line: &'a str) -> Option<O>
where
    P: Parser<Input<'a>, O, ErrMode<ContextError>>,
{
    let mut input = line;
    let output = parser.parse_next(&mut input).ok()?;
    input.trim().is_empty().then_some(output)
}

/// Runs `parser` at the start of `line`, ignoring whatever follows the match.
pub(crate) fn parse_prefix<'a, O, P>(mut parser: P, line: &'a str) -> Option<O>
where
    P: Parser<Input<'a>, O, ErrMode<ContextError>>,
{
    let mut input = line;
    parser.parse_next(&mut input).ok()
}

/// Collects every non-overlapping match of `parser` anywhere in `line`, left
/// to right.
pub(crate) fn scan<'a, O, P>(parser: P, line: &'a str) -> Vec<O>
where
    P: Parser<Input<'a>, O, ErrMode<ContextError>>,
{
    let mut input = line;
    let found: IResult<Vec<Option<O>>> =
        repeat(0.., alt((parser.map(Some), any.map(|_| None)))).parse_next(&mut input);
    found.unwrap_or_default().into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use winnow::ascii::space0;

    use super::*;

    #[test]
    fn test_word() {
        assert_eq!(parse_prefix(word, "Alice -> Bob"), Some("Alice"));
        assert_eq!(parse_prefix(word, "snake_case9"), Some("snake_case9"));
        assert_eq!(parse_prefix(word, "-> Bob"), None);
    }

    #[test]
    fn test_bracketed_trims() {
        assert_eq!(parse_whole(bracketed, "[ Web Browser ]"), Some("Web Browser"));
        assert_eq!(parse_whole(bracketed, "[]"), None);
        assert_eq!(parse_whole(bracketed, "[open"), None);
    }

    #[test]
    fn test_reference_accepts_both_forms() {
        assert_eq!(parse_prefix(reference, "[API Gateway] --> DB"), Some("API Gateway"));
        assert_eq!(parse_prefix(reference, "AG --> DB"), Some("AG"));
    }

    #[test]
    fn test_quoted() {
        assert_eq!(parse_prefix(quoted, "\"Front End\" {"), Some("Front End"));
        assert_eq!(parse_prefix(quoted, "\"\""), None);
    }

    #[test]
    fn test_parse_whole_rejects_trailing_text() {
        assert_eq!(parse_whole((word, space0), "Alice  "), Some(("Alice", "  ")));
        assert_eq!(parse_whole(word, "Alice Bob"), None);
    }

    #[test]
    fn test_scan_finds_every_match() {
        assert_eq!(
            scan(parenthesized, "(Checkout) .> (Payment) : include"),
            ["Checkout", "Payment"]
        );
        assert!(scan(parenthesized, "no labels () here").is_empty());
    }
}
