//! Diagram kind detection.
//!
//! Classification is an ordered table of substring rules evaluated against
//! the lowercased, space-joined source lines. The first rule that matches
//! decides the kind; [`DiagramKind::Generic`] catches everything else.
//!
//! The ordering is part of the behavior. Many sources would satisfy several
//! rules (a class diagram usually contains `-->`, a gantt chart contains
//! `[`), so more specific markers are checked before broader ones.

use log::debug;

use plume_core::semantic::DiagramKind;

/// One entry of the classification table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The kind selected when `matches` returns `true`.
    pub kind: DiagramKind,
    /// Predicate over the lowercased, space-joined text.
    pub matches: fn(&str) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// The classification table, evaluated top to bottom.
pub const RULES: &[Rule] = &[
    Rule {
        kind: DiagramKind::MindMap,
        matches: is_mind_map,
    },
    Rule {
        kind: DiagramKind::Gantt,
        matches: is_gantt,
    },
    Rule {
        kind: DiagramKind::Component,
        matches: is_component,
    },
    Rule {
        kind: DiagramKind::Class,
        matches: is_class,
    },
    Rule {
        kind: DiagramKind::UseCase,
        matches: is_use_case,
    },
    Rule {
        kind: DiagramKind::Activity,
        matches: is_activity,
    },
    Rule {
        kind: DiagramKind::Sequence,
        matches: is_sequence,
    },
];

fn is_mind_map(text: &str) -> bool {
    text.contains("@startmindmap") || text.contains("@endmindmap")
}

fn is_gantt(text: &str) -> bool {
    text.contains("@startgantt") || text.contains("@endgantt")
}

fn is_component(text: &str) -> bool {
    text.contains("package") && text.contains('[') && text.contains(']')
}

fn is_class(text: &str) -> bool {
    text.contains("class ") || text.contains("<|--") || text.contains("--|>")
}

fn is_use_case(text: &str) -> bool {
    text.contains("actor") || text.contains("usecase") || text.contains("rectangle")
}

fn is_activity(text: &str) -> bool {
    (text.contains("start") && text.contains("stop"))
        || text.contains("if (")
        || text.contains("endif")
}

fn is_sequence(text: &str) -> bool {
    ["->", "<-", "-->", "<--", "participant"]
        .iter()
        .any(|marker| text.contains(marker))
}

/// Selects the diagram kind for normalized source lines.
///
/// # Examples
///
/// ```
/// use plume_core::semantic::DiagramKind;
///
/// assert_eq!(plume_parser::classify(&["A -> B: hi"]), DiagramKind::Sequence);
/// assert_eq!(plume_parser::classify(&["hello"]), DiagramKind::Generic);
/// ```
pub fn classify(lines: &[&str]) -> DiagramKind {
    let text = lines.join(" ").to_lowercase();
    let kind = RULES
        .iter()
        .find(|rule| (rule.matches)(&text))
        .map_or(DiagramKind::Generic, |rule| rule.kind);
    debug!(kind = kind.name(); "Classified source");
    kind
}
