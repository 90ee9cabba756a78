//! Gantt chart layout.
//!
//! Every bar starts at the same origin; task dependencies are not
//! interpreted, so bars are not offset by their predecessors.

use plume_core::{
    geometry::{Bounds, Point, Size},
    semantic::{GanttChart, Task},
};

use super::{LayoutSizing, units};

const TITLE_Y: f32 = 30.0;
const START_LABEL: Point = Point::new(50.0, 50.0);
const BAR_X: f32 = 200.0;
const FIRST_BAR_Y: f32 = 80.0;
const ROW_SPACING: f32 = 50.0;
const BAR_HEIGHT: f32 = 30.0;
const DAY_WIDTH: f32 = 20.0;
const NAME_X: f32 = 50.0;
const TEXT_BASELINE: f32 = 20.0;
const CAPTION_GAP: f32 = 10.0;
const MIN_WIDTH: f32 = 800.0;
const RIGHT_MARGIN: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct Bar<'a> {
    pub task: &'a Task,
    pub bounds: Bounds,
    pub name_position: Point,
    pub caption_position: Point,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub title_position: Point,
    /// The display-only project start, with its anchor.
    pub start_label: Option<(&'a str, Point)>,
    pub bars: Vec<Bar<'a>>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(chart: &'a GanttChart) -> Self {
        let bars: Vec<Bar<'a>> = chart
            .tasks()
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let y = FIRST_BAR_Y + ROW_SPACING * units(i);
                let width = DAY_WIDTH * task.duration_days() as f32;
                Bar {
                    task,
                    bounds: Bounds::new_from_top_left(
                        Point::new(BAR_X, y),
                        Size::new(width, BAR_HEIGHT),
                    ),
                    name_position: Point::new(NAME_X, y + TEXT_BASELINE),
                    caption_position: Point::new(BAR_X + width + CAPTION_GAP, y + TEXT_BASELINE),
                }
            })
            .collect();

        let longest = bars.iter().map(|bar| bar.bounds.width()).fold(0.0, f32::max);
        let size = Size::new(
            MIN_WIDTH.max(BAR_X + longest + RIGHT_MARGIN),
            100.0 + ROW_SPACING * units(bars.len()),
        );

        Self {
            title_position: Point::new(size.width() / 2.0, TITLE_Y),
            start_label: chart.project_start().map(|date| (date, START_LABEL)),
            bars,
            size,
        }
    }
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_bars_share_origin() {
        let chart = GanttChart::new(
            Some("2024-01-01".to_string()),
            vec![Task::new("Design", 10), Task::new("Build", 5)],
        );
        let layout = Layout::new(&chart);

        let build = &layout.bars[1];
        assert_approx_eq!(f32, build.bounds.min_x(), 200.0);
        assert_approx_eq!(f32, build.bounds.min_y(), 130.0);
        assert_approx_eq!(f32, build.bounds.width(), 100.0);
        assert_approx_eq!(f32, build.bounds.height(), 30.0);
        assert_approx_eq!(f32, build.name_position.y(), 150.0);
        assert_approx_eq!(f32, build.caption_position.x(), 310.0);

        assert_eq!(layout.start_label.map(|(date, _)| date), Some("2024-01-01"));

        let size = layout.layout_size();
        assert_approx_eq!(f32, size.width(), 800.0);
        assert_approx_eq!(f32, size.height(), 200.0);
        assert_approx_eq!(f32, layout.title_position.x(), 400.0);
    }

    #[test]
    fn test_long_task_widens_canvas() {
        let chart = GanttChart::new(None, vec![Task::new("Long", 40)]);
        let layout = Layout::new(&chart);
        // 200 + 800 + 100
        assert_approx_eq!(f32, layout.layout_size().width(), 1100.0);
        assert_approx_eq!(f32, layout.title_position.x(), 550.0);
        assert!(layout.start_label.is_none());
    }

    #[test]
    fn test_empty_chart() {
        let chart = GanttChart::default();
        let size = Layout::new(&chart).layout_size();
        assert_approx_eq!(f32, size.width(), 800.0);
        assert_approx_eq!(f32, size.height(), 100.0);
    }
}
