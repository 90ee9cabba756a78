use svg::node::element as svg_element;

use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
    geometry::Point,
};

use super::Svg;
use crate::layout::usecase::{self, USE_CASE_RADII};

const HEAD_RADIUS: f32 = 15.0;
const NAME_OFFSET: f32 = 85.0;
const LABEL_OFFSET: f32 = 5.0;

/// Limb segments of the stick figure, relative to the head center.
const LIMBS: [((f32, f32), (f32, f32)); 4] = [
    ((0.0, 15.0), (0.0, 45.0)),
    ((-15.0, 25.0), (15.0, 25.0)),
    ((0.0, 45.0), (-10.0, 65.0)),
    ((0.0, 45.0), (10.0, 65.0)),
];

impl Svg {
    pub(super) fn render_use_case(&self, layout: &usecase::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for actor in &layout.actors {
            output.add_to_layer(RenderLayer::Entity, self.render_actor(actor));
        }
        for use_case in &layout.use_cases {
            output.add_to_layer(RenderLayer::Entity, self.render_use_case_shape(use_case));
        }
        for link in &layout.links {
            let line = self.render_edge(link, &StrokeDefinition::solid(self.theme.edge, 2.0));
            output.add_to_layer(RenderLayer::Relation, Box::new(Self::group("link").add(line)));
        }
        output
    }

    fn render_actor(&self, actor: &usecase::ActorFigure<'_>) -> Box<dyn svg::Node> {
        let head = actor.head;
        let paint = self.theme.actor_head;
        let circle = svg_element::Circle::new()
            .set("cx", head.x())
            .set("cy", head.y())
            .set("r", HEAD_RADIUS)
            .set("fill", paint.fill);
        let mut group = Self::group("actor").add(apply_stroke!(
            circle,
            &StrokeDefinition::solid(paint.stroke, 2.0)
        ));

        let limb_stroke = StrokeDefinition::solid(self.theme.edge, 2.0);
        for ((x1, y1), (x2, y2)) in LIMBS {
            let limb = svg_element::Line::new()
                .set("x1", head.x() + x1)
                .set("y1", head.y() + y1)
                .set("x2", head.x() + x2)
                .set("y2", head.y() + y2);
            group = group.add(apply_stroke!(limb, &limb_stroke));
        }

        let style = self
            .text_style(12)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle);
        let name = Text::new(&style, actor.name)
            .render_at(Point::new(head.x(), head.y() + NAME_OFFSET));

        Box::new(group.add(name))
    }

    fn render_use_case_shape(&self, use_case: &usecase::UseCaseShape<'_>) -> Box<dyn svg::Node> {
        let paint = self.theme.use_case;
        let center = use_case.center;
        let ellipse = svg_element::Ellipse::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("rx", USE_CASE_RADII.width())
            .set("ry", USE_CASE_RADII.height())
            .set("fill", paint.fill);
        let style = self.text_style(12).with_anchor(TextAnchor::Middle);
        let label = Text::new(&style, use_case.label)
            .render_at(Point::new(center.x(), center.y() + LABEL_OFFSET));

        Box::new(
            Self::group("usecase")
                .add(apply_stroke!(
                    ellipse,
                    &StrokeDefinition::solid(paint.stroke, 2.0)
                ))
                .add(label),
        )
    }
}
