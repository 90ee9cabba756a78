//! Component diagram parser.
//!
//! ```text
//! package "Backend" {
//!   [API Gateway] as AG
//!   [Database]
//! }
//! [Logger]
//! AG --> [Database] : query
//! ```

use indexmap::IndexMap;
use log::trace;
use winnow::{
    Parser as _,
    ascii::{space0, space1},
    combinator::{alt, delimited, opt, preceded},
    token::rest,
};

use plume_core::semantic::{ArrowDirection, Component, ComponentDiagram, Connection, Package};

use crate::{
    common::{IResult, Input, bracketed, parse_prefix, parse_whole, quoted, reference, word},
    lines,
};

fn package_header<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded(("package", space1), alt((quoted, word))).parse_next(input)
}

/// `[Full Name]` with an optional `as alias`.
fn declaration<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Option<&'a str>)> {
    (bracketed, opt(preceded((space1, "as", space1), word))).parse_next(input)
}

fn connector<'a>(input: &mut Input<'a>) -> IResult<ArrowDirection> {
    delimited(
        space0,
        alt((
            "-->".value(ArrowDirection::Forward),
            "->".value(ArrowDirection::Forward),
            "--".value(ArrowDirection::Undirected),
        )),
        space0,
    )
    .parse_next(input)
}

/// `<ref> <connector> <ref> [: label]`, brackets stripped from both ends.
fn connection(input: &mut Input<'_>) -> IResult<Connection> {
    (
        reference,
        connector,
        reference,
        opt(preceded((space0, ':'), rest.map(str::trim))),
    )
        .map(|(from, direction, to, label)| {
            let label = label.filter(|label| !label.is_empty()).map(str::to_string);
            Connection::new(from, to, direction, label)
        })
        .parse_next(input)
}

#[derive(Default)]
struct Builder<'a> {
    packages: Vec<Package>,
    standalone: Option<usize>,
    /// Full name to (package slot, component slot).
    registered: IndexMap<&'a str, (usize, usize)>,
}

impl<'a> Builder<'a> {
    fn open_package(&mut self, name: &str) -> usize {
        if let Some(index) = self
            .packages
            .iter()
            .position(|package| package.name() == Some(name))
        {
            return index;
        }
        self.packages.push(Package::new(Some(name.to_string())));
        self.packages.len() - 1
    }

    fn standalone_group(&mut self) -> usize {
        match self.standalone {
            Some(index) => index,
            None => {
                self.packages.push(Package::new(None));
                let index = self.packages.len() - 1;
                self.standalone = Some(index);
                index
            }
        }
    }

    fn declare(&mut self, cursor: Option<usize>, name: &'a str, alias: Option<&str>) {
        if let Some(&(package, slot)) = self.registered.get(name) {
            // First alias wins; later declarations only fill a missing one
            let existing = self.packages[package].component_mut(slot);
            if let (Some(component), Some(alias)) = (existing, alias) {
                if component.alias().is_none() {
                    component.set_alias(alias);
                }
            }
            return;
        }

        let package = match cursor {
            Some(index) => index,
            None => self.standalone_group(),
        };
        let slot = self.packages[package].components().len();
        self.packages[package].push_component(Component::new(name, alias.map(str::to_string)));
        self.registered.insert(name, (package, slot));
    }
}

pub(crate) fn parse(lines: &[&str]) -> ComponentDiagram {
    let mut builder = Builder::default();
    let mut connections = Vec::new();
    let mut cursor: Option<usize> = None;

    for line in lines::body(lines) {
        if line == "}" {
            cursor = None;
            continue;
        }

        if let Some(name) = parse_prefix(package_header, line) {
            cursor = Some(builder.open_package(name));
            continue;
        }

        if let Some((name, alias)) = parse_whole(declaration, line) {
            builder.declare(cursor, name, alias);
            continue;
        }

        if let Some(connection) = parse_prefix(connection, line) {
            trace!(from = connection.from(), to = connection.to(); "Component connection");
            connections.push(connection);
        }
    }

    ComponentDiagram::new(builder.packages, connections)
}
