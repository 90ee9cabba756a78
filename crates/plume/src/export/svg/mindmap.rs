use svg::node::element as svg_element;

use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
    geometry::Point,
};

use super::Svg;
use crate::layout::mindmap;

/// Opacity of a node's fill relative to its stroke color.
const FILL_OPACITY: f32 = 0.125;
const LABEL_OFFSET: f32 = 5.0;

impl Svg {
    pub(super) fn render_mind_map(&self, layout: &mindmap::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for shape in &layout.nodes {
            output.add_to_layer(RenderLayer::Entity, self.render_mind_map_node(shape));
        }
        let stroke = StrokeDefinition::solid(self.theme.branch, 2.0);
        for branch in &layout.branches {
            output.add_to_layer(
                RenderLayer::Relation,
                Box::new(Self::group("branch").add(self.render_edge(branch, &stroke))),
            );
        }
        output
    }

    fn render_mind_map_node(&self, shape: &mindmap::NodeShape<'_>) -> Box<dyn svg::Node> {
        let color = self.theme.branch_color(shape.palette_index);
        let fill = color.with_alpha(FILL_OPACITY);
        let center = shape.center;
        let ellipse = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", shape.radii.width())
            .set("ry", shape.radii.height())
            .set("fill", fill)
            .set("fill-opacity", fill.alpha());
        let style = self
            .text_style(12)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle);
        let label = Text::new(&style, shape.node.text())
            .render_at(Point::new(center.x(), center.y() + LABEL_OFFSET));

        Box::new(
            Self::group("node")
                .add(apply_stroke!(ellipse, &StrokeDefinition::solid(color, 2.0)))
                .add(label),
        )
    }
}
