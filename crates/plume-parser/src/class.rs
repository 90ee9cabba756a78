//! Class diagram parser.
//!
//! Classes open with `class Name {` (also `abstract class Name` or
//! `interface Name`) and close with a bare `}`. Member lines in between are
//! split into methods (anything with parentheses) and attributes. Relationship
//! lines are recognized anywhere.

use indexmap::IndexMap;
use log::trace;
use winnow::{
    Parser as _,
    ascii::{space0, space1},
    combinator::{alt, delimited, opt},
};

use plume_core::semantic::{ClassDecl, ClassDiagram, ClassRelation, ClassRelationKind, Stereotype};

use crate::{
    common::{IResult, Input, parse_prefix, word},
    lines,
};

struct Header<'a> {
    name: &'a str,
    stereotype: Option<Stereotype>,
    /// `class Name {}` declares and closes in one line.
    closed: bool,
}

fn header<'a>(input: &mut Input<'a>) -> IResult<Header<'a>> {
    let keyword = alt((
        ("abstract", space1, "class").value(Some(Stereotype::Abstract)),
        "interface".value(Some(Stereotype::Interface)),
        "class".value(None),
    ));
    (keyword, space1, word, space0, opt('{'), space0, opt('}'))
        .map(|(stereotype, _, name, _, _, _, close)| Header {
            name,
            stereotype,
            closed: close.is_some(),
        })
        .parse_next(input)
}

fn relation_arrow<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    alt(("<|--", "--|>", "<--", "-->")).parse_next(input)
}

/// `<name> <arrow> <name>`, trailing labels ignored.
fn relation(input: &mut Input<'_>) -> IResult<ClassRelation> {
    (word, delimited(space0, relation_arrow, space0), word)
        .map(|(from, arrow, to)| {
            let kind = match arrow {
                "<|--" | "--|>" => ClassRelationKind::Inheritance,
                _ => ClassRelationKind::Association,
            };
            ClassRelation::new(from, to, kind)
        })
        .parse_next(input)
}

pub(crate) fn parse(lines: &[&str]) -> ClassDiagram {
    let mut classes: IndexMap<String, ClassDecl> = IndexMap::new();
    let mut relations = Vec::new();
    let mut cursor: Option<usize> = None;

    for line in lines::body(lines) {
        if let Some(header) = parse_prefix(header, line) {
            let entry = classes.entry(header.name.to_string());
            let index = entry.index();
            let class = entry.or_insert_with(|| ClassDecl::new(header.name));
            if let Some(stereotype) = header.stereotype {
                class.set_stereotype(stereotype);
            }
            cursor = (!header.closed).then_some(index);
            continue;
        }

        if line == "}" {
            cursor = None;
            continue;
        }

        if let Some((_, class)) = cursor.and_then(|index| classes.get_index_mut(index)) {
            if line.contains('(') && line.contains(')') {
                class.push_method(line);
            } else if !line.contains("class") {
                class.push_attribute(line);
            }
        }

        if let Some(relation) = parse_prefix(relation, line) {
            trace!(from = relation.from(), to = relation.to(); "Class relation");
            relations.push(relation);
        }
    }

    ClassDiagram::new(classes.into_values().collect(), relations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_with_members() {
        let diagram = parse(&[
            "@startuml",
            "class Animal {",
            "+String name",
            "+int age",
            "+void eat()",
            "}",
            "@enduml",
        ]);

        let classes = diagram.classes();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name(), "Animal");
        assert_eq!(classes[0].attributes(), ["+String name", "+int age"]);
        assert_eq!(classes[0].methods(), ["+void eat()"]);
    }

    #[test]
    fn test_members_outside_class_are_ignored() {
        let diagram = parse(&["class A {", "}", "+String stray", "+void lost()"]);
        assert_eq!(diagram.classes()[0].member_count(), 0);
    }

    #[test]
    fn test_relations_are_recorded_regardless_of_cursor() {
        let diagram = parse(&[
            "class Animal {",
            "}",
            "class Dog {",
            "}",
            "Animal <|-- Dog",
            "Dog --|> Animal",
            "Dog --> Bone",
            "Bone <-- Dog",
        ]);

        let relations = diagram.relations();
        assert_eq!(relations.len(), 4);
        assert_eq!(relations[0].kind(), ClassRelationKind::Inheritance);
        assert_eq!(relations[1].kind(), ClassRelationKind::Inheritance);
        assert_eq!(relations[2].kind(), ClassRelationKind::Association);
        assert_eq!(relations[3].kind(), ClassRelationKind::Association);
        // Written order is kept: the `to` side is the right-hand name
        assert_eq!((relations[0].from(), relations[0].to()), ("Animal", "Dog"));
        assert_eq!((relations[3].from(), relations[3].to()), ("Bone", "Dog"));
    }

    #[test]
    fn test_stereotypes_and_inline_body() {
        let diagram = parse(&[
            "abstract class Shape",
            "}",
            "interface Drawable {",
            "+draw()",
            "}",
            "class Empty {}",
            "+orphan",
        ]);

        let classes = diagram.classes();
        assert_eq!(classes.len(), 3);
        assert_eq!(classes[0].stereotype(), Some(Stereotype::Abstract));
        assert_eq!(classes[1].stereotype(), Some(Stereotype::Interface));
        assert_eq!(classes[1].methods(), ["+draw()"]);
        assert_eq!(classes[2].stereotype(), None);
        assert_eq!(classes[2].member_count(), 0);
    }

    #[test]
    fn test_redeclared_class_is_reused() {
        let diagram = parse(&["class A {", "+x", "}", "class B", "}", "class A {", "+y", "}"]);

        let classes = diagram.classes();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].name(), "A");
        assert_eq!(classes[0].attributes(), ["+x", "+y"]);
        assert_eq!(diagram.class_index("B"), Some(1));
    }

    #[test]
    fn test_brace_is_optional() {
        let diagram = parse(&["class Solo", "+field", "}"]);
        assert_eq!(diagram.classes()[0].attributes(), ["+field"]);
    }
}
