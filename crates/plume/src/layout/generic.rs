//! Fallback layout for input no other kind recognizes.

use plume_core::{
    geometry::{Bounds, Point, Size},
    semantic::GenericDiagram,
};

use super::LayoutSizing;

const CANVAS: Size = Size::new(600.0, 400.0);
const PANEL_TOP_LEFT: Point = Point::new(50.0, 50.0);
const PANEL_SIZE: Size = Size::new(500.0, 300.0);

#[derive(Debug, Clone)]
pub struct Layout {
    pub line_count: usize,
    pub panel: Bounds,
    /// Anchors of the title, subtitle and line-count captions.
    pub captions: [Point; 3],
}

impl Layout {
    pub fn new(diagram: &GenericDiagram) -> Self {
        let center_x = CANVAS.width() / 2.0;
        Self {
            line_count: diagram.line_count(),
            panel: Bounds::new_from_top_left(PANEL_TOP_LEFT, PANEL_SIZE),
            captions: [
                Point::new(center_x, 150.0),
                Point::new(center_x, 180.0),
                Point::new(center_x, 220.0),
            ],
        }
    }

    /// The caption reporting how many lines were read.
    pub fn line_count_caption(&self) -> String {
        format!("{} lines of PlantUML code detected", self.line_count)
    }
}

impl LayoutSizing for Layout {
    fn layout_size(&self) -> Size {
        CANVAS
    }
}
