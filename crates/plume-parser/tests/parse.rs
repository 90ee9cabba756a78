use plume_core::semantic::{Diagram, DiagramKind};
use plume_parser::{classify, normalize, parse, parse_lines};

const SEQUENCE: &str = "\
@startuml
Alice -> Bob: Authentication Request
Bob --> Alice: Authentication Response
@enduml
";

const COMPONENT: &str = "\
@startuml
package \"Frontend\" {
  [Web Browser] as WB
}
package \"Backend\" {
  [Authentication Service] as Auth
}
WB --> Auth
WB --> Missing
@enduml
";

#[test]
fn test_sequence_end_to_end() {
    let Diagram::Sequence(diagram) = parse(SEQUENCE) else {
        panic!("expected a sequence diagram");
    };
    assert_eq!(diagram.participants().len(), 2);
    assert_eq!(diagram.interactions().len(), 2);
}

#[test]
fn test_component_keeps_dangling_connection_for_layout() {
    let Diagram::Component(diagram) = parse(COMPONENT) else {
        panic!("expected a component diagram");
    };
    assert_eq!(diagram.named_packages().count(), 2);
    assert_eq!(diagram.connections().len(), 2);
}

#[test]
fn test_generic_counts_normalized_lines() {
    let source = "hello\n\n  world  \nfoo\nbar\n";
    let Diagram::Generic(diagram) = parse(source) else {
        panic!("expected the generic fallback");
    };
    assert_eq!(diagram.line_count(), 4);
}

#[test]
fn test_whitespace_only_is_generic_with_no_lines() {
    let Diagram::Generic(diagram) = parse(" \n\t\n") else {
        panic!("expected the generic fallback");
    };
    assert_eq!(diagram.line_count(), 0);
}

#[test]
fn test_parse_lines_forces_kind() {
    let lines = normalize("* not really a mind map");
    assert_eq!(classify(&lines), DiagramKind::Generic);
    assert_eq!(
        parse_lines(DiagramKind::MindMap, &lines).kind(),
        DiagramKind::MindMap
    );
}

#[test]
fn test_demo_sources_classify_as_named() {
    let demos = [
        ("sequence", DiagramKind::Sequence),
        ("class", DiagramKind::Class),
        ("usecase", DiagramKind::UseCase),
        ("activity", DiagramKind::Activity),
        ("component", DiagramKind::Component),
        ("mindmap", DiagramKind::MindMap),
        ("gantt", DiagramKind::Gantt),
    ];
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    for (name, expected) in demos {
        let source = std::fs::read_to_string(dir.join(format!("{name}.puml")))
            .expect("demo source should be readable");
        assert_eq!(parse(&source).kind(), expected, "demo: {name}");
    }
}
