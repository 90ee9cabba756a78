use svg::node::element as svg_element;

use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
    geometry::{Bounds, Point, Size},
};

use super::Svg;
use crate::layout::class::{self, HEADER_HEIGHT, MEMBER_HEIGHT};

const NAME_BASELINE: f32 = 20.0;
const FIRST_MEMBER_OFFSET: f32 = 50.0;
const MEMBER_INDENT: f32 = 10.0;
const SEPARATOR_GAP: f32 = 10.0;

impl Svg {
    pub(super) fn render_class(&self, layout: &class::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for class_box in &layout.classes {
            output.add_to_layer(RenderLayer::Entity, self.render_class_box(class_box));
        }
        for relation in &layout.relations {
            let line = self.render_edge(relation, &StrokeDefinition::solid(self.theme.edge, 2.0));
            output.add_to_layer(
                RenderLayer::Relation,
                Box::new(Self::group("relationship").add(line)),
            );
        }
        output
    }

    fn render_class_box(&self, class_box: &class::ClassBox<'_>) -> Box<dyn svg::Node> {
        let paint = self.theme.class;
        let bounds = class_box.bounds;
        let class = class_box.class;

        let body = apply_stroke!(
            Self::rect(bounds).set("fill", paint.fill),
            &StrokeDefinition::solid(paint.stroke, 2.0)
        );
        let header = Self::rect(Bounds::new_from_top_left(
            bounds.min_point(),
            Size::new(bounds.width(), HEADER_HEIGHT),
        ))
        .set("fill", paint.stroke);

        let title = match class.stereotype() {
            Some(stereotype) => format!("{} {}", stereotype.label(), class.name()),
            None => class.name().to_string(),
        };
        let title_style = self
            .text_style(14)
            .with_bold(true)
            .with_color(self.theme.inverse_text)
            .with_anchor(TextAnchor::Middle);
        let title = Text::new(&title_style, title).render_at(Point::new(
            bounds.center().x(),
            bounds.min_y() + NAME_BASELINE,
        ));

        let mut group = Self::group("class").add(body).add(header).add(title);

        let member_style = self.text_style(12);
        let x = bounds.min_x() + MEMBER_INDENT;
        let mut y = bounds.min_y() + FIRST_MEMBER_OFFSET;
        for attribute in class.attributes() {
            group = group.add(Text::new(&member_style, attribute.as_str()).render_at(Point::new(x, y)));
            y += MEMBER_HEIGHT;
        }

        if !class.attributes().is_empty() && !class.methods().is_empty() {
            let separator = svg_element::Line::new()
                .set("x1", bounds.min_x())
                .set("y1", y)
                .set("x2", bounds.max_x())
                .set("y2", y);
            group = group.add(apply_stroke!(
                separator,
                &StrokeDefinition::solid(paint.stroke, 1.0)
            ));
            y += SEPARATOR_GAP;
        }

        for method in class.methods() {
            group = group.add(Text::new(&member_style, method.as_str()).render_at(Point::new(x, y)));
            y += MEMBER_HEIGHT;
        }

        Box::new(group)
    }
}
