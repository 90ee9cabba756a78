//! Gantt chart entities.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    duration_days: u32,
}

impl Task {
    pub fn new(name: impl Into<String>, duration_days: u32) -> Self {
        Self {
            name: name.into(),
            duration_days,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn set_duration_days(&mut self, days: u32) {
        self.duration_days = days;
    }

    /// Caption drawn after the bar, e.g. `1 day` or `10 days`.
    pub fn duration_caption(&self) -> String {
        match self.duration_days {
            1 => "1 day".to_string(),
            days => format!("{days} days"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GanttChart {
    project_start: Option<String>,
    tasks: Vec<Task>,
}

impl GanttChart {
    pub fn new(project_start: Option<String>, tasks: Vec<Task>) -> Self {
        Self {
            project_start,
            tasks,
        }
    }

    /// The project start date, as written. Display-only.
    pub fn project_start(&self) -> Option<&str> {
        self.project_start.as_deref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_caption() {
        assert_eq!(Task::new("a", 1).duration_caption(), "1 day");
        assert_eq!(Task::new("a", 10).duration_caption(), "10 days");
        assert_eq!(Task::new("a", 0).duration_caption(), "0 days");
    }
}
