//! Sequence diagram entities: participants and the interactions between them.

use super::{ArrowDirection, LineStyle};

/// A lifeline owner, identified by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A message sent between two participants.
///
/// `from` and `to` are the names on the left and right of the arrow as
/// written; [`ArrowDirection`] says which end the arrowhead is drawn at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    from: String,
    to: String,
    message: String,
    line_style: LineStyle,
    direction: ArrowDirection,
}

impl Interaction {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        message: impl Into<String>,
        line_style: LineStyle,
        direction: ArrowDirection,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            message: message.into(),
            line_style,
            direction,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }
}

/// Participants in first-seen order, and interactions in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceDiagram {
    participants: Vec<Participant>,
    interactions: Vec<Interaction>,
}

impl SequenceDiagram {
    pub fn new(participants: Vec<Participant>, interactions: Vec<Interaction>) -> Self {
        Self {
            participants,
            interactions,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }
}
