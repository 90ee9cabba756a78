//! Activity diagram entities.

/// One node of the activity lane.
///
/// Activities and decisions share a single list so the lane keeps the order
/// in which they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `:label;`
    Activity(String),
    /// `if (condition)`
    Decision(String),
}

impl Step {
    /// The text drawn inside the node.
    pub fn text(&self) -> &str {
        match self {
            Self::Activity(label) => label,
            Self::Decision(condition) => condition,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDiagram {
    has_start: bool,
    has_stop: bool,
    steps: Vec<Step>,
}

impl ActivityDiagram {
    pub fn new(has_start: bool, has_stop: bool, steps: Vec<Step>) -> Self {
        Self {
            has_start,
            has_stop,
            steps,
        }
    }

    pub fn has_start(&self) -> bool {
        self.has_start
    }

    pub fn has_stop(&self) -> bool {
        self.has_stop
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
