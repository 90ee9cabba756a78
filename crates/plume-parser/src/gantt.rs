//! Gantt chart parser.
//!
//! Tasks are written `[Name] lasts 5 days` (or `requires 2 weeks`). Dependency
//! lines such as `[B] starts at [A]'s end` are recognized by nothing and
//! therefore ignored.

use indexmap::IndexMap;
use log::trace;
use winnow::{
    Parser as _,
    ascii::{Caseless, digit1, space1},
    combinator::{alt, opt, preceded},
    token::rest,
};

use plume_core::semantic::{GanttChart, Task};

use crate::{
    common::{IResult, Input, bracketed, parse_prefix},
    lines,
};

/// `project starts the <date>` or `Project starts <date>`.
fn project_start<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    preceded(
        (
            Caseless("project"),
            space1,
            "starts",
            space1,
            opt(("the", space1)),
        ),
        rest.map(str::trim).verify(|date: &str| !date.is_empty()),
    )
    .parse_next(input)
}

/// Days per unit of `day(s)` or `week(s)`.
fn unit(input: &mut Input<'_>) -> IResult<u32> {
    alt((
        alt(("days", "day")).value(1),
        alt(("weeks", "week")).value(7),
    ))
    .parse_next(input)
}

/// A decimal count, saturating at `u32::MAX` instead of rejecting the task.
fn count(input: &mut Input<'_>) -> IResult<u32> {
    digit1
        .map(|digits: &str| digits.parse().unwrap_or(u32::MAX))
        .parse_next(input)
}

fn task<'a>(input: &mut Input<'a>) -> IResult<(&'a str, u32)> {
    (
        bracketed,
        space1,
        alt(("lasts", "requires")),
        space1,
        count,
        space1,
        unit,
    )
        .map(|(name, _, _, _, count, _, days_per_unit)| {
            (name, count.saturating_mul(days_per_unit))
        })
        .parse_next(input)
}

pub(crate) fn parse(lines: &[&str]) -> GanttChart {
    let mut project_start_date = None;
    let mut tasks: IndexMap<&str, u32> = IndexMap::new();

    for line in lines::body(lines) {
        if let Some(date) = parse_prefix(project_start, line) {
            project_start_date = Some(date.to_string());
        } else if let Some((name, days)) = parse_prefix(task, line) {
            tasks.insert(name, days);
        } else {
            trace!(line = line; "Ignored gantt line");
        }
    }

    GanttChart::new(
        project_start_date,
        tasks
            .into_iter()
            .map(|(name, days)| Task::new(name, days))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations(chart: &GanttChart) -> Vec<(&str, u32)> {
        chart
            .tasks()
            .iter()
            .map(|task| (task.name(), task.duration_days()))
            .collect()
    }

    #[test]
    fn test_project_and_tasks() {
        let chart = parse(&[
            "@startgantt",
            "project starts the 2024-01-01",
            "[Design] lasts 10 days",
            "[Build] lasts 1 day",
            "[Build] starts at [Design]'s end",
            "@endgantt",
        ]);

        assert_eq!(chart.project_start(), Some("2024-01-01"));
        assert_eq!(durations(&chart), [("Design", 10), ("Build", 1)]);
    }

    #[test]
    fn test_capitalized_project_start_without_article() {
        let chart = parse(&["Project starts 2025-03-01"]);
        assert_eq!(chart.project_start(), Some("2025-03-01"));
    }

    #[test]
    fn test_requires_and_weeks() {
        let chart = parse(&["[Review] requires 2 weeks", "[Ship] lasts 1 week"]);
        assert_eq!(durations(&chart), [("Review", 14), ("Ship", 7)]);
    }

    #[test]
    fn test_repeated_task_updates_duration_in_place() {
        let chart = parse(&["[A] lasts 3 days", "[B] lasts 2 days", "[A] lasts 5 days"]);
        assert_eq!(durations(&chart), [("A", 5), ("B", 2)]);
    }

    #[test]
    fn test_overflowing_duration_saturates() {
        let chart = parse(&["[T] lasts 99999999999 days", "[U] lasts 999999999 weeks"]);
        assert_eq!(durations(&chart), [("T", u32::MAX), ("U", u32::MAX)]);
    }

    #[test]
    fn test_malformed_tasks_are_ignored() {
        let chart = parse(&["[A] lasts many days", "[B] lasts 3", "A lasts 3 days"]);
        assert!(chart.tasks().is_empty());
        assert_eq!(chart.project_start(), None);
    }
}
