//! Sequence diagram parser.
//!
//! Recognized lines:
//!
//! ```text
//! participant Alice
//! Alice -> Bob : Authentication Request
//! Bob --> Alice : Authentication Response
//! ```

use indexmap::IndexSet;
use log::trace;
use winnow::{
    Parser as _,
    ascii::{space0, space1},
    combinator::{alt, delimited, preceded},
    token::rest,
};

use plume_core::semantic::{ArrowDirection, Interaction, LineStyle, Participant, SequenceDiagram};

use crate::{
    common::{IResult, Input, parse_prefix, parse_whole, word},
    lines,
};

struct Message<'a> {
    from: &'a str,
    arrow: &'a str,
    to: &'a str,
    text: &'a str,
}

fn arrow<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    alt(("-->", "<--", "->", "<-")).parse_next(input)
}

/// `<name> <arrow> <name> : <message>` with a non-empty message.
fn message<'a>(input: &mut Input<'a>) -> IResult<Message<'a>> {
    (
        word,
        delimited(space0, arrow, space0),
        word,
        delimited(space0, ':', space0),
        rest.map(str::trim).verify(|text: &str| !text.is_empty()),
    )
        .map(|(from, arrow, to, _, text)| Message {
            from,
            arrow,
            to,
            text,
        })
        .parse_next(input)
}

fn participant<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded(("participant", space1), word).parse_next(input)
}

pub(crate) fn parse(lines: &[&str]) -> SequenceDiagram {
    let mut participants: IndexSet<&str> = IndexSet::new();
    let mut interactions = Vec::new();

    for line in lines::body(lines) {
        if let Some(name) = parse_prefix(participant, line) {
            participants.insert(name);
            continue;
        }

        let Some(message) = parse_whole(message, line) else {
            trace!(line = line; "Ignored sequence line");
            continue;
        };

        participants.insert(message.from);
        participants.insert(message.to);

        let direction = if message.arrow.contains("->") {
            ArrowDirection::Forward
        } else {
            ArrowDirection::Backward
        };
        interactions.push(Interaction::new(
            message.from,
            message.to,
            message.text,
            LineStyle::from_arrow(message.arrow),
            direction,
        ));
    }

    SequenceDiagram::new(
        participants.into_iter().map(Participant::new).collect(),
        interactions,
    )
}
