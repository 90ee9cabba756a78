//! # Plume Parser
//!
//! Turns PlantUML-subset source text into a semantic
//! [`Diagram`](plume_core::semantic::Diagram). Parsing never fails: lines no
//! parser recognizes are skipped, and input that matches no diagram kind
//! becomes a generic diagram.
//!
//! ## Usage
//!
//! ```
//! use plume_core::semantic::{Diagram, DiagramKind};
//!
//! let diagram = plume_parser::parse("@startuml\nAlice -> Bob: Hello\n@enduml");
//! assert_eq!(diagram.kind(), DiagramKind::Sequence);
//!
//! let Diagram::Sequence(sequence) = diagram else {
//!     unreachable!()
//! };
//! assert_eq!(sequence.participants().len(), 2);
//! ```

mod activity;
mod class;
mod classify;
mod common;
mod component;
mod gantt;
mod lines;
mod mindmap;
mod sequence;
mod usecase;

pub use classify::{RULES, Rule, classify};
pub use lines::normalize;

use log::{debug, info};

use plume_core::semantic::{Diagram, DiagramKind, GenericDiagram};

/// Parses source text into a semantic diagram.
///
/// This runs the whole front half of the pipeline:
///
/// 1. **Normalize** - Split into trimmed, non-empty lines
/// 2. **Classify** - Pick the diagram kind from the rule table
/// 3. **Parse** - Extract entities and relations with the kind's parser
pub fn parse(source: &str) -> Diagram {
    let lines = normalize(source);
    let kind = classify(&lines);
    info!(kind = kind.name(), lines = lines.len(); "Parsing diagram");
    parse_lines(kind, &lines)
}

/// Parses already-normalized lines as a diagram of the given kind, skipping
/// classification.
pub fn parse_lines(kind: DiagramKind, lines: &[&str]) -> Diagram {
    let diagram = match kind {
        DiagramKind::Sequence => Diagram::Sequence(sequence::parse(lines)),
        DiagramKind::Class => Diagram::Class(class::parse(lines)),
        DiagramKind::UseCase => Diagram::UseCase(usecase::parse(lines)),
        DiagramKind::Activity => Diagram::Activity(activity::parse(lines)),
        DiagramKind::Component => Diagram::Component(component::parse(lines)),
        DiagramKind::MindMap => Diagram::MindMap(mindmap::parse(lines)),
        DiagramKind::Gantt => Diagram::Gantt(gantt::parse(lines)),
        DiagramKind::Generic => Diagram::Generic(GenericDiagram::new(lines.len())),
    };
    debug!(kind = kind.name(); "Parsed diagram");
    diagram
}
