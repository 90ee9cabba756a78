//! Styling shared by every relation kind.

/// Which end of a relation carries the arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Arrowhead at the target (right-hand) end, e.g. `->`
    Forward,
    /// Arrowhead at the source (left-hand) end, e.g. `<-`
    Backward,
    /// No arrowhead, e.g. `--`
    Undirected,
}

/// Stroke pattern of a relation line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    /// Arrows spelled with a double dash (`-->`, `<--`) are dashed.
    pub fn from_arrow(arrow: &str) -> Self {
        if arrow.contains("--") {
            Self::Dashed
        } else {
            Self::Solid
        }
    }
}
