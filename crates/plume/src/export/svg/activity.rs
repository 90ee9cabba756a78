use svg::node::element as svg_element;

use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
    geometry::{Bounds, Point},
};

use super::{Svg, theme::Paint};
use crate::layout::activity::{self, ACTIVITY_SIZE, DECISION_HALF, NodeKind, TERMINAL_RADIUS};

const LABEL_OFFSET: f32 = 5.0;

impl Svg {
    pub(super) fn render_activity(&self, layout: &activity::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for node in &layout.nodes {
            output.add_to_layer(RenderLayer::Entity, self.render_activity_node(node));
        }
        for flow in &layout.flows {
            let line = self.render_edge(flow, &StrokeDefinition::solid(self.theme.edge, 2.0));
            output.add_to_layer(RenderLayer::Relation, Box::new(Self::group("flow").add(line)));
        }
        output
    }

    fn render_activity_node(&self, node: &activity::Node<'_>) -> Box<dyn svg::Node> {
        let center = node.center;
        let label_at = Point::new(center.x(), center.y() + LABEL_OFFSET);

        let group = match node.kind {
            NodeKind::Start => self.render_terminal(self.theme.start, "START", center),
            NodeKind::Stop => self.render_terminal(self.theme.stop, "STOP", center),
            NodeKind::Activity => {
                let paint = self.theme.activity;
                let rect = Self::rect(Bounds::new_from_center(center, ACTIVITY_SIZE))
                    .set("rx", 5)
                    .set("fill", paint.fill);
                let style = self.text_style(12).with_anchor(TextAnchor::Middle);
                Self::group("activity")
                    .add(apply_stroke!(rect, &StrokeDefinition::solid(paint.stroke, 2.0)))
                    .add(Text::new(&style, node.text).render_at(label_at))
            }
            NodeKind::Decision => {
                let paint = self.theme.decision;
                let (dx, dy) = (DECISION_HALF.width(), DECISION_HALF.height());
                let (x, y) = (center.x(), center.y());
                let points = format!(
                    "{},{} {},{} {},{} {},{}",
                    x,
                    y - dy,
                    x + dx,
                    y,
                    x,
                    y + dy,
                    x - dx,
                    y
                );
                let diamond = svg_element::Polygon::new()
                    .set("points", points)
                    .set("fill", paint.fill);
                let style = self.text_style(10).with_anchor(TextAnchor::Middle);
                Self::group("decision")
                    .add(apply_stroke!(diamond, &StrokeDefinition::solid(paint.stroke, 2.0)))
                    .add(Text::new(&style, node.text).render_at(label_at))
            }
        };

        Box::new(group)
    }

    fn render_terminal(&self, paint: Paint, caption: &str, center: Point) -> svg_element::Group {
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", TERMINAL_RADIUS)
            .set("fill", paint.fill);
        let style = self
            .text_style(10)
            .with_color(self.theme.inverse_text)
            .with_anchor(TextAnchor::Middle);
        Self::group("terminal")
            .add(apply_stroke!(circle, &StrokeDefinition::solid(paint.stroke, 2.0)))
            .add(
                Text::new(&style, caption)
                    .render_at(Point::new(center.x(), center.y() + LABEL_OFFSET)),
            )
    }
}

#[cfg(test)]
mod tests {
    use plume_core::semantic::{ActivityDiagram, Step};

    use super::*;
    use crate::export::svg::SvgBuilder;

    #[test]
    fn test_lane_groups() {
        let diagram = ActivityDiagram::new(
            true,
            true,
            vec![
                Step::Activity("Load".to_string()),
                Step::Decision("valid?".to_string()),
            ],
        );
        let svg = SvgBuilder::new().build().unwrap();
        let nodes: Vec<String> = svg
            .render_activity(&activity::Layout::new(&diagram))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(nodes.len(), 7);
        assert!(nodes[0].contains("class=\"terminal\""));
        assert!(nodes[0].contains(">START<"));
        assert!(nodes[1].contains("class=\"activity\""));
        assert!(nodes[1].contains(">Load<"));
        assert!(nodes[2].contains("class=\"decision\""));
        assert!(nodes[2].contains("points=\"200,170 240,190 200,210 160,190\""));
        assert!(nodes[3].contains(">STOP<"));
        assert!(nodes[4..].iter().all(|node| node.contains("class=\"flow\"")));
    }
}
