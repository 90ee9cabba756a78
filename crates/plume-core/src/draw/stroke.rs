//! Stroke and line-style definitions.
//!
//! - [`StrokeDefinition`]: color, width and dash style of a line or border
//! - [`StrokeStyle`]: solid or dashed patterns
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to any SVG element builder
//!
//! ```
//! use plume_core::draw::StrokeDefinition;
//! use plume_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("#ddd").unwrap(), 2.0);
//! let line = svg_element::Line::new()
//!     .set("x1", 0)
//!     .set("x2", 100);
//!
//! let line = plume_core::apply_stroke!(line, &stroke);
//! assert!(line.to_string().contains("stroke-dasharray=\"5,5\""));
//! ```

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns a copy of this stroke with another style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for StrokeDefinition {
    /// Black, 1px, solid.
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Applies every attribute of a [`StrokeDefinition`] to an SVG element builder.
///
/// Emits `stroke` and `stroke-width`, plus `stroke-dasharray` for patterned
/// styles and `stroke-opacity` for translucent colors.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let mut elem = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());

        if stroke.color().alpha() < 1.0 {
            elem = elem.set("stroke-opacity", stroke.color().alpha());
        }

        if let Some(dasharray) = stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element::Line;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "#000000");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_style_svg_values() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
    }

    #[test]
    fn test_apply_stroke_solid() {
        let stroke = StrokeDefinition::solid(Color::new("#333").unwrap(), 2.0);
        let line = crate::apply_stroke!(Line::new(), &stroke).to_string();

        assert!(line.contains("stroke=\"#333333\""));
        assert!(line.contains("stroke-width=\"2\""));
        assert!(!line.contains("stroke-dasharray"));
        assert!(!line.contains("stroke-opacity"));
    }

    #[test]
    fn test_apply_stroke_dashed_translucent() {
        let color = Color::new("#333").unwrap().with_alpha(0.5);
        let stroke = StrokeDefinition::dashed(color, 1.0);
        let line = crate::apply_stroke!(Line::new(), &stroke).to_string();

        assert!(line.contains("stroke-dasharray=\"5,5\""));
        assert!(line.contains("stroke-opacity=\"0.5\""));
    }
}
