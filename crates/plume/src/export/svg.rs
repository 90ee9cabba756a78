//! SVG exporter.
//!
//! [`Svg`] draws every layout variant into one standalone document: marker
//! definitions, a full-canvas background, then one `<g>` per entity and one
//! per relation. Each group carries a `class` attribute naming what it draws.
//! Per-kind drawing lives in the submodules as `impl Svg` blocks.

mod activity;
mod class;
mod component;
mod gantt;
mod generic;
mod mindmap;
mod sequence;
mod theme;
mod usecase;

use std::fmt::Write as _;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use plume_core::{
    apply_stroke,
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle, SvgNode, TextDefinition},
    geometry::{Bounds, Size},
    semantic::LineStyle,
};

use super::{Error, Exporter};
use crate::layout::{Edge, Layout, LayoutSizing, Marker};

use theme::Theme;

const NAMESPACE: &str = "http://www.w3.org/2000/svg";
const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Builder for [`Svg`] exporters.
#[derive(Debug, Clone, Default)]
pub struct SvgBuilder {
    background: Option<Color>,
    font_family: Option<String>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Resolves the theme. White background and Arial unless overridden.
    pub fn build(self) -> Result<Svg, Error> {
        let background = match self.background {
            Some(color) => color,
            None => Color::new("white").map_err(Error::Theme)?,
        };
        Ok(Svg {
            theme: Theme::new(background).map_err(Error::Theme)?,
            font_family: self
                .font_family
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        })
    }
}

/// SVG exporter holding the resolved theme.
#[derive(Debug, Clone)]
pub struct Svg {
    theme: Theme,
    font_family: String,
}

impl Svg {
    /// A label style in the configured font family.
    fn text_style(&self, font_size: u16) -> TextDefinition {
        TextDefinition::new()
            .with_font_family(self.font_family.as_str())
            .with_font_size(font_size)
    }

    /// An empty group tagged with the kind of element it holds.
    fn group(class: &'static str) -> svg_element::Group {
        svg_element::Group::new().set("class", class)
    }

    fn rect(bounds: Bounds) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
    }

    /// Draws an edge as a straight line, dashed when the edge says so and
    /// capped by its marker.
    fn render_edge(&self, edge: &Edge, stroke: &StrokeDefinition) -> svg_element::Line {
        let stroke = match edge.line_style {
            LineStyle::Solid => stroke.clone(),
            LineStyle::Dashed => stroke.clone().with_style(StrokeStyle::Dashed),
        };
        let line = svg_element::Line::new()
            .set("x1", edge.start.x())
            .set("y1", edge.start.y())
            .set("x2", edge.end.x())
            .set("y2", edge.end.y());
        let line = apply_stroke!(line, &stroke);
        match edge.marker {
            Some(marker) => line.set("marker-end", format!("url(#{})", marker.id())),
            None => line,
        }
    }

    fn render_background(&self, size: Size) -> SvgNode {
        let stroke = StrokeDefinition::solid(self.theme.canvas_border, 1.0);
        let rect = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", self.theme.background);
        Box::new(apply_stroke!(rect, &stroke))
    }

    fn marker_definitions(&self) -> svg_element::Definitions {
        let triangle = "M 0 0 L 10 5 L 0 10 z";

        let arrowhead = svg_element::Marker::new()
            .set("id", Marker::Arrowhead.id())
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 8)
            .set("markerHeight", 8)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", triangle)
                    .set("fill", self.theme.edge),
            );

        let open_triangle = svg_element::Path::new()
            .set("d", triangle)
            .set("fill", self.theme.background);
        let inheritance = svg_element::Marker::new()
            .set("id", Marker::Inheritance.id())
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerWidth", 12)
            .set("markerHeight", 12)
            .set("orient", "auto")
            .add(apply_stroke!(
                open_triangle,
                &StrokeDefinition::solid(self.theme.edge, 1.0)
            ));

        svg_element::Definitions::new().add(arrowhead).add(inheritance)
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout<'_>) -> Result<String, Error> {
        let size = layout.layout_size();
        if !size.is_drawable() {
            return Err(Error::Canvas {
                width: size.width(),
                height: size.height(),
            });
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, self.render_background(size));
        output.merge(match layout {
            Layout::Sequence(layout) => self.render_sequence(layout),
            Layout::Class(layout) => self.render_class(layout),
            Layout::UseCase(layout) => self.render_use_case(layout),
            Layout::Activity(layout) => self.render_activity(layout),
            Layout::Component(layout) => self.render_component(layout),
            Layout::MindMap(layout) => self.render_mind_map(layout),
            Layout::Gantt(layout) => self.render_gantt(layout),
            Layout::Generic(layout) => self.render_generic(layout),
        });
        let nodes = output.render();
        info!(nodes = nodes.len(); "Rendering SVG document");

        let mut document = Document::new()
            .set("xmlns", NAMESPACE)
            .set("width", size.width())
            .set("height", size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .add(self.marker_definitions());
        for node in nodes {
            document = document.add(node);
        }

        let mut markup = String::new();
        write!(markup, "{document}")?;
        debug!(bytes = markup.len(); "SVG document rendered");
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use plume_core::{
        geometry::Point,
        semantic::{Diagram, GenericDiagram},
    };

    use super::*;

    fn export(diagram: &Diagram) -> String {
        let svg = SvgBuilder::new().build().unwrap();
        svg.export_layout(&Layout::from_diagram(diagram)).unwrap()
    }

    #[test]
    fn test_document_header() {
        let markup = export(&Diagram::Generic(GenericDiagram::new(1)));

        assert!(markup.contains("<svg"));
        assert!(markup.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(markup.contains("width=\"600\""));
        assert!(markup.contains("height=\"400\""));
        assert!(markup.contains("viewBox=\"0 0 600 400\""));
        assert!(markup.contains("id=\"arrowhead\""));
        assert!(markup.contains("id=\"inheritance\""));
        assert!(markup.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_background_uses_configured_color() {
        let svg = SvgBuilder::new()
            .with_background(Color::new("#fafafa").unwrap())
            .build()
            .unwrap();
        let diagram = Diagram::Generic(GenericDiagram::new(0));
        let markup = svg.export_layout(&Layout::from_diagram(&diagram)).unwrap();
        assert!(markup.contains("fill=\"#fafafa\""));
    }

    #[test]
    fn test_font_family_reaches_labels() {
        let svg = SvgBuilder::new().with_font_family("Helvetica").build().unwrap();
        let diagram = Diagram::Generic(GenericDiagram::new(0));
        let markup = svg.export_layout(&Layout::from_diagram(&diagram)).unwrap();
        assert!(markup.contains("font-family=\"Helvetica\""));
        assert!(!markup.contains("font-family=\"Arial\""));
    }

    #[test]
    fn test_render_edge_attributes() {
        let svg = SvgBuilder::new().build().unwrap();
        let edge = Edge::plain(Point::new(0.0, 0.0), Point::new(10.0, 5.0))
            .with_marker(Marker::Inheritance)
            .with_line_style(LineStyle::Dashed);
        let stroke = StrokeDefinition::solid(Color::default(), 2.0);
        let line = svg.render_edge(&edge, &stroke).to_string();

        assert!(line.contains("x2=\"10\""));
        assert!(line.contains("y2=\"5\""));
        assert!(line.contains("stroke-dasharray=\"5,5\""));
        assert!(line.contains("marker-end=\"url(#inheritance)\""));
    }
}
