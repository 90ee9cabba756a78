//! Mind-map parser: one node per `*`-prefixed line.

use log::trace;
use winnow::{
    Parser as _,
    ascii::space0,
    token::{rest, take_while},
};

use plume_core::semantic::{MindMap, MindMapNode};

use crate::{
    common::{IResult, Input, parse_prefix},
    lines,
};

fn node<'a>(input: &mut Input<'a>) -> IResult<(usize, &'a str)> {
    (
        take_while(1.., '*'),
        space0,
        rest.map(str::trim).verify(|text: &str| !text.is_empty()),
    )
        .map(|(stars, _, text): (&str, &str, &str)| (stars.len(), text))
        .parse_next(input)
}

pub(crate) fn parse(lines: &[&str]) -> MindMap {
    let nodes = lines::body(lines)
        .filter_map(|line| {
            let node = parse_prefix(node, line);
            if node.is_none() {
                trace!(line = line; "Ignored mind-map line");
            }
            node
        })
        .map(|(level, text)| MindMapNode::new(level, text))
        .collect();
    MindMap::new(nodes)
}
