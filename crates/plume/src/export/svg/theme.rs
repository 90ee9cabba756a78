//! The fixed palette every diagram kind draws with.

use plume_core::color::Color;

use crate::layout::mindmap::PALETTE_SIZE;

/// Fill and stroke of one shape family.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub fill: Color,
    pub stroke: Color,
}

impl Paint {
    fn new(fill: &str, stroke: &str) -> Result<Self, String> {
        Ok(Self {
            fill: Color::new(fill)?,
            stroke: Color::new(stroke)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub canvas_border: Color,
    /// Relation lines and arrowheads.
    pub edge: Color,
    pub lifeline: Color,
    pub branch: Color,
    pub muted_text: Color,
    /// Labels drawn on dark fills.
    pub inverse_text: Color,
    pub participant: Paint,
    pub class: Paint,
    pub actor_head: Paint,
    pub use_case: Paint,
    pub activity: Paint,
    pub decision: Paint,
    pub start: Paint,
    pub stop: Paint,
    pub package: Paint,
    pub component: Paint,
    pub standalone: Paint,
    pub task: Paint,
    pub panel: Paint,
    /// Mind-map branch colors, indexed by `level mod PALETTE_SIZE`.
    pub branch_palette: [Color; PALETTE_SIZE],
}

impl Theme {
    /// Builds the theme around the given canvas background.
    pub fn new(background: Color) -> Result<Self, String> {
        Ok(Self {
            background,
            canvas_border: Color::new("#ddd")?,
            edge: Color::new("#333")?,
            lifeline: Color::new("#ddd")?,
            branch: Color::new("#666")?,
            muted_text: Color::new("#666")?,
            inverse_text: Color::new("white")?,
            participant: Paint::new("#e3f2fd", "#1976d2")?,
            class: Paint::new("#fff3e0", "#f57c00")?,
            actor_head: Paint::new("#ffeb3b", "#f57f17")?,
            use_case: Paint::new("#e8f5e8", "#4caf50")?,
            activity: Paint::new("#e3f2fd", "#1976d2")?,
            decision: Paint::new("#fff3e0", "#ff9800")?,
            start: Paint::new("#4caf50", "#2e7d32")?,
            stop: Paint::new("#f44336", "#c62828")?,
            package: Paint::new("#f3e5f5", "#9c27b0")?,
            component: Paint::new("#e8f5e8", "#4caf50")?,
            standalone: Paint::new("#e3f2fd", "#2196f3")?,
            task: Paint::new("#4caf50", "#2e7d32")?,
            panel: Paint::new("#f5f5f5", "#999")?,
            branch_palette: [
                Color::new("#ff9800")?,
                Color::new("#2196f3")?,
                Color::new("#4caf50")?,
                Color::new("#e91e63")?,
                Color::new("#9c27b0")?,
            ],
        })
    }

    /// The mind-map color for a palette index.
    pub fn branch_color(&self, palette_index: usize) -> Color {
        self.branch_palette[palette_index % PALETTE_SIZE]
    }
}
