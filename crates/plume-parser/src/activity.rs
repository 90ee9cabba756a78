//! Activity diagram parser.
//!
//! Only the start and stop terminals, `:activity;` nodes and the condition of
//! each `if (...)` are extracted. `else` and `endif` are not structural here.

use log::trace;
use winnow::{
    Parser as _,
    ascii::space0,
    combinator::preceded,
    token::rest,
};

use plume_core::semantic::{ActivityDiagram, Step};

use crate::{
    common::{IResult, Input, parenthesized, parse_prefix},
    lines,
};

/// `:<label>;`
fn activity<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded(':', rest)
        .verify_map(|body: &'a str| {
            body.strip_suffix(';')
                .map(str::trim)
                .filter(|label| !label.is_empty())
        })
        .parse_next(input)
}

/// `if (<condition>)`, anything after the parenthesis ignored.
fn decision<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded(("if", space0), parenthesized).parse_next(input)
}

pub(crate) fn parse(lines: &[&str]) -> ActivityDiagram {
    let mut has_start = false;
    let mut has_stop = false;
    let mut steps = Vec::new();

    for line in lines::body(lines) {
        match line {
            "start" => has_start = true,
            "stop" | "end" => has_stop = true,
            _ => {
                if let Some(condition) = parse_prefix(decision, line) {
                    steps.push(Step::Decision(condition.to_string()));
                } else if let Some(label) = parse_prefix(activity, line) {
                    steps.push(Step::Activity(label.to_string()));
                } else {
                    trace!(line = line; "Ignored activity line");
                }
            }
        }
    }

    ActivityDiagram::new(has_start, has_stop, steps)
}
