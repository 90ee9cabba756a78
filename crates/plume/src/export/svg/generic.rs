use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
};

use super::Svg;
use crate::layout::generic;

const TITLE: &str = "PlantUML Diagram";
const SUBTITLE: &str = "Parsed from your code";

impl Svg {
    pub(super) fn render_generic(&self, layout: &generic::Layout) -> LayeredOutput {
        let paint = self.theme.panel;
        let panel = Self::rect(layout.panel).set("rx", 10).set("fill", paint.fill);

        let [title_at, subtitle_at, count_at] = layout.captions;
        let title_style = self
            .text_style(16)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle);
        let subtitle_style = self.text_style(14).with_anchor(TextAnchor::Middle);
        let count_style = self
            .text_style(12)
            .with_color(self.theme.muted_text)
            .with_anchor(TextAnchor::Middle);

        let group = Self::group("panel")
            .add(apply_stroke!(panel, &StrokeDefinition::solid(paint.stroke, 2.0)))
            .add(Text::new(&title_style, TITLE).render_at(title_at))
            .add(Text::new(&subtitle_style, SUBTITLE).render_at(subtitle_at))
            .add(Text::new(&count_style, layout.line_count_caption()).render_at(count_at));

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Entity, Box::new(group));
        output
    }
}
