use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
    geometry::Point,
};

use super::Svg;
use crate::layout::component;

const PACKAGE_NAME_OFFSET: Point = Point::new(10.0, 25.0);
const COMPONENT_NAME_OFFSET: f32 = 30.0;
const CONNECTION_LABEL_OFFSET: f32 = 5.0;

impl Svg {
    pub(super) fn render_component(&self, layout: &component::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for package in &layout.packages {
            output.add_to_layer(RenderLayer::Container, self.render_package(package));
        }
        for component in &layout.components {
            output.add_to_layer(RenderLayer::Entity, self.render_component_box(component));
        }
        for connector in &layout.connectors {
            output.add_to_layer(RenderLayer::Relation, self.render_connector(connector));
        }
        output
    }

    fn render_package(&self, package: &component::PackageBox<'_>) -> Box<dyn svg::Node> {
        let paint = self.theme.package;
        let frame = Self::rect(package.bounds)
            .set("rx", 10)
            .set("fill", paint.fill);
        let style = self
            .text_style(16)
            .with_bold(true)
            .with_color(paint.stroke);
        let name = Text::new(&style, package.name).render_at(Point::new(
            package.bounds.min_x() + PACKAGE_NAME_OFFSET.x(),
            package.bounds.min_y() + PACKAGE_NAME_OFFSET.y(),
        ));

        Box::new(
            Self::group("package")
                .add(apply_stroke!(frame, &StrokeDefinition::dashed(paint.stroke, 2.0)))
                .add(name),
        )
    }

    fn render_component_box(&self, component: &component::ComponentBox<'_>) -> Box<dyn svg::Node> {
        let paint = if component.standalone {
            self.theme.standalone
        } else {
            self.theme.component
        };
        let bounds = component.bounds;
        let rect = Self::rect(bounds).set("rx", 5).set("fill", paint.fill);
        let style = self
            .text_style(11)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle);
        let name = Text::new(&style, component.component.name()).render_at(Point::new(
            bounds.center().x(),
            bounds.min_y() + COMPONENT_NAME_OFFSET,
        ));

        Box::new(
            Self::group("component")
                .add(apply_stroke!(rect, &StrokeDefinition::solid(paint.stroke, 2.0)))
                .add(name),
        )
    }

    fn render_connector(&self, connector: &component::Connector<'_>) -> Box<dyn svg::Node> {
        let line = self.render_edge(
            &connector.edge,
            &StrokeDefinition::solid(self.theme.edge, 2.0),
        );
        let group = Self::group("connection").add(line);

        match connector.connection.label() {
            Some(label) => {
                let style = self
                    .text_style(10)
                    .with_color(self.theme.muted_text)
                    .with_anchor(TextAnchor::Middle);
                let midpoint = connector.edge.midpoint();
                let label = Text::new(&style, label).render_at(Point::new(
                    midpoint.x(),
                    midpoint.y() - CONNECTION_LABEL_OFFSET,
                ));
                Box::new(group.add(label))
            }
            None => Box::new(group),
        }
    }
}
