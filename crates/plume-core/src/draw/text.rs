//! Text rendering definitions for diagram labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - Content combined with a [`TextDefinition`], rendered as an SVG `<text>` element
//!
//! ```
//! # use plume_core::draw::{Text, TextAnchor, TextDefinition};
//! # use plume_core::geometry::Point;
//! let style = TextDefinition::new()
//!     .with_font_size(14)
//!     .with_bold(true)
//!     .with_anchor(TextAnchor::Middle);
//!
//! let svg_text = Text::new(&style, "Alice").render_at(Point::new(100.0, 45.0));
//! let markup = svg_text.to_string();
//! assert!(markup.contains("font-weight=\"bold\""));
//! assert!(markup.contains(">Alice<"));
//! ```

use svg::node::element as svg_element;

use crate::{color::Color, geometry::Point};

/// Horizontal alignment of a label relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor point (SVG default, no attribute emitted)
    #[default]
    Start,
    /// Text is centered on the anchor point
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Start => None,
            Self::Middle => Some("middle"),
        }
    }
}

/// Defines the visual style for text elements in diagrams.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `12` |
/// | Bold | `false` |
/// | Color | `None` (SVG default, black) |
/// | Anchor | [`TextAnchor::Start`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family name (e.g., "Arial", "monospace").
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the font size in points.
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Renders the text in bold weight when `bold` is true.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the fill color of the text.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the horizontal alignment of the text.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("Arial"),
            font_size: 12,
            bold: false,
            color: None,
            anchor: TextAnchor::Start,
        }
    }
}

/// A label: content plus the style it is drawn with.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: String,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: impl Into<String>) -> Self {
        Self {
            definition,
            content: content.into(),
        }
    }

    /// Renders the label with its baseline anchored at `position`.
    ///
    /// The content is escaped by the `svg` crate, so user text can never
    /// inject markup into the document.
    pub fn render_at(&self, position: Point) -> svg_element::Text {
        let definition = self.definition;
        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", position.x())
            .set("y", position.y())
            .set("font-family", definition.font_family.as_str())
            .set("font-size", definition.font_size);

        if let Some(anchor) = definition.anchor.to_svg_value() {
            text = text.set("text-anchor", anchor);
        }
        if definition.bold {
            text = text.set("font-weight", "bold");
        }
        if let Some(color) = definition.color {
            text = text.set("fill", color);
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_label() {
        let def = TextDefinition::new();
        let markup = Text::new(&def, "name").render_at(Point::new(10.0, 20.0)).to_string();

        assert!(markup.starts_with("<text"));
        assert!(markup.contains("x=\"10\""));
        assert!(markup.contains("y=\"20\""));
        assert!(markup.contains("font-family=\"Arial\""));
        assert!(!markup.contains("text-anchor"));
        assert!(!markup.contains("font-weight"));
        assert!(!markup.contains("fill"));
    }

    #[test]
    fn test_render_styled_label() {
        let def = TextDefinition::new()
            .with_font_family("Helvetica")
            .with_font_size(16)
            .with_bold(true)
            .with_color(Color::new("white").unwrap())
            .with_anchor(TextAnchor::Middle);
        let markup = Text::new(&def, "Header").render_at(Point::new(0.0, 0.0)).to_string();

        assert!(markup.contains("font-family=\"Helvetica\""));
        assert!(markup.contains("font-size=\"16\""));
        assert!(markup.contains("font-weight=\"bold\""));
        assert!(markup.contains("fill=\"#ffffff\""));
        assert!(markup.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_render_escapes_content() {
        let def = TextDefinition::new();
        let markup = Text::new(&def, "List<String> & more")
            .render_at(Point::default())
            .to_string();

        assert!(markup.contains("List&lt;String&gt; &amp; more"));
        assert!(!markup.contains("<String>"));
    }
}
