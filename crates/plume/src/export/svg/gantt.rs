use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
};

use super::Svg;
use crate::layout::gantt;

const TITLE: &str = "Gantt Chart";

impl Svg {
    pub(super) fn render_gantt(&self, layout: &gantt::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let title_style = self
            .text_style(16)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle);
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(Text::new(&title_style, TITLE).render_at(layout.title_position)),
        );

        let label_style = self.text_style(12);
        if let Some((date, position)) = layout.start_label {
            output.add_to_layer(
                RenderLayer::Background,
                Box::new(Text::new(&label_style, format!("Start: {date}")).render_at(position)),
            );
        }

        let caption_style = self.text_style(10);
        let paint = self.theme.task;
        for bar in &layout.bars {
            let rect = Self::rect(bar.bounds).set("fill", paint.fill);
            let group = Self::group("task")
                .add(apply_stroke!(rect, &StrokeDefinition::solid(paint.stroke, 1.0)))
                .add(Text::new(&label_style, bar.task.name()).render_at(bar.name_position))
                .add(
                    Text::new(&caption_style, bar.task.duration_caption())
                        .render_at(bar.caption_position),
                );
            output.add_to_layer(RenderLayer::Entity, Box::new(group));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use plume_core::semantic::{GanttChart, Task};

    use super::*;
    use crate::export::svg::SvgBuilder;

    #[test]
    fn test_title_start_and_bars() {
        let chart = GanttChart::new(
            Some("2024-01-01".to_string()),
            vec![Task::new("Design", 5), Task::new("Review", 1)],
        );
        let svg = SvgBuilder::new().build().unwrap();
        let nodes: Vec<String> = svg
            .render_gantt(&gantt::Layout::new(&chart))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(nodes.len(), 4);
        assert!(nodes[0].contains(">Gantt Chart<"));
        assert!(nodes[0].contains("x=\"400\""));
        assert!(nodes[1].contains(">Start: 2024-01-01<"));
        assert!(nodes[2].contains("class=\"task\""));
        assert!(nodes[2].contains("width=\"100\""));
        assert!(nodes[2].contains(">5 days<"));
        assert!(nodes[3].contains(">1 day<"));
    }

    #[test]
    fn test_no_start_label() {
        let chart = GanttChart::new(None, vec![Task::new("Build", 2)]);
        let svg = SvgBuilder::new().build().unwrap();
        let nodes = svg.render_gantt(&gantt::Layout::new(&chart)).render();
        assert_eq!(nodes.len(), 2);
    }
}
