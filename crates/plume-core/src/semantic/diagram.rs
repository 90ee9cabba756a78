//! The diagram kind enumeration and the per-kind tagged union.

use std::fmt;

use super::{
    ActivityDiagram, ClassDiagram, ComponentDiagram, GanttChart, MindMap, SequenceDiagram,
    UseCaseDiagram,
};

/// The diagram family a source text was classified as.
///
/// Exactly one kind is selected per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Sequence,
    Class,
    UseCase,
    Activity,
    Component,
    MindMap,
    Gantt,
    /// Fallback for input no other kind recognizes
    Generic,
}

impl DiagramKind {
    /// Every kind, in declaration order.
    pub const ALL: [DiagramKind; 8] = [
        Self::Sequence,
        Self::Class,
        Self::UseCase,
        Self::Activity,
        Self::Component,
        Self::MindMap,
        Self::Gantt,
        Self::Generic,
    ];

    /// Returns the lowercase name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::UseCase => "usecase",
            Self::Activity => "activity",
            Self::Component => "component",
            Self::MindMap => "mindmap",
            Self::Gantt => "gantt",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input that matched no specific kind. Only the line count survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericDiagram {
    line_count: usize,
}

impl GenericDiagram {
    pub fn new(line_count: usize) -> Self {
        Self { line_count }
    }

    /// Number of normalized (trimmed, non-empty) source lines.
    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

/// A parsed diagram: one variant per [`DiagramKind`], each carrying its own
/// entities and relations.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagram {
    Sequence(SequenceDiagram),
    Class(ClassDiagram),
    UseCase(UseCaseDiagram),
    Activity(ActivityDiagram),
    Component(ComponentDiagram),
    MindMap(MindMap),
    Gantt(GanttChart),
    Generic(GenericDiagram),
}

impl Diagram {
    /// Returns the kind of this diagram.
    pub fn kind(&self) -> DiagramKind {
        match self {
            Self::Sequence(_) => DiagramKind::Sequence,
            Self::Class(_) => DiagramKind::Class,
            Self::UseCase(_) => DiagramKind::UseCase,
            Self::Activity(_) => DiagramKind::Activity,
            Self::Component(_) => DiagramKind::Component,
            Self::MindMap(_) => DiagramKind::MindMap,
            Self::Gantt(_) => DiagramKind::Gantt,
            Self::Generic(_) => DiagramKind::Generic,
        }
    }
}
