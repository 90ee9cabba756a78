//! Use-case diagram parser.

use indexmap::IndexSet;
use log::trace;
use winnow::{
    Parser as _,
    ascii::{space0, space1},
    combinator::{alt, delimited, preceded},
};

use plume_core::semantic::{Actor, ActorLink, UseCase, UseCaseDiagram};

use crate::{
    common::{IResult, Input, parenthesized, parse_prefix, quoted, scan, word},
    lines,
};

fn actor<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded(("actor", space1), alt((quoted, word))).parse_next(input)
}

fn undirected<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    delimited(space0, "--", space0).parse_next(input)
}

/// `Actor -- (Label)` or `(Label) -- Actor`, yielding `(actor, label)`.
fn link<'a>(input: &mut Input<'a>) -> IResult<(&'a str, &'a str)> {
    alt((
        (word, undirected, parenthesized).map(|(actor, _, label)| (actor, label)),
        (parenthesized, undirected, word).map(|(label, _, actor)| (actor, label)),
    ))
    .parse_next(input)
}

pub(crate) fn parse(lines: &[&str]) -> UseCaseDiagram {
    let mut actors: IndexSet<&str> = IndexSet::new();
    let mut use_cases: IndexSet<&str> = IndexSet::new();
    let mut links = Vec::new();

    for line in lines::body(lines) {
        if let Some(name) = parse_prefix(actor, line) {
            actors.insert(name);
            continue;
        }

        use_cases.extend(scan(parenthesized, line));

        if let Some((actor, use_case)) = parse_prefix(link, line) {
            trace!(actor = actor, use_case = use_case; "Actor link");
            links.push(ActorLink::new(actor, use_case));
        }
    }

    UseCaseDiagram::new(
        actors.into_iter().map(Actor::new).collect(),
        use_cases.into_iter().map(UseCase::new).collect(),
        links,
    )
}
