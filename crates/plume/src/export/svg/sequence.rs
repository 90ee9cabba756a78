use plume_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor},
    geometry::Point,
};

use super::Svg;
use crate::layout::sequence;

const NAME_BASELINE: f32 = 45.0;

impl Svg {
    pub(super) fn render_sequence(&self, layout: &sequence::Layout<'_>) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for participant in &layout.participants {
            output.add_to_layer(RenderLayer::Entity, self.render_participant(participant));
        }
        for message in &layout.messages {
            output.add_to_layer(RenderLayer::Relation, self.render_message(message));
        }
        output
    }

    fn render_participant(&self, participant: &sequence::Participant<'_>) -> Box<dyn svg::Node> {
        let paint = self.theme.participant;
        let header = Self::rect(participant.header)
            .set("rx", 5)
            .set("fill", paint.fill);
        let header = apply_stroke!(header, &StrokeDefinition::solid(paint.stroke, 2.0));

        let style = self
            .text_style(14)
            .with_bold(true)
            .with_anchor(TextAnchor::Middle);
        let name = Text::new(&style, participant.name).render_at(Point::new(
            participant.header.center().x(),
            NAME_BASELINE,
        ));

        let lifeline = self.render_edge(
            &participant.lifeline,
            &StrokeDefinition::solid(self.theme.lifeline, 2.0),
        );

        Box::new(Self::group("participant").add(header).add(name).add(lifeline))
    }

    fn render_message(&self, message: &sequence::Message<'_>) -> Box<dyn svg::Node> {
        let line = self.render_edge(
            &message.edge,
            &StrokeDefinition::solid(self.theme.edge, 2.0),
        );
        let style = self.text_style(12).with_anchor(TextAnchor::Middle);
        let label = Text::new(&style, message.interaction.message()).render_at(message.label_position);

        Box::new(Self::group("message").add(line).add(label))
    }
}

#[cfg(test)]
mod tests {
    use plume_core::semantic::{ArrowDirection, Interaction, LineStyle, Participant, SequenceDiagram};

    use super::*;
    use crate::export::svg::SvgBuilder;

    fn rendered(diagram: &SequenceDiagram) -> Vec<String> {
        let svg = SvgBuilder::new().build().unwrap();
        svg.render_sequence(&sequence::Layout::new(diagram))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_participants_render_before_messages() {
        let diagram = SequenceDiagram::new(
            vec![Participant::new("Alice"), Participant::new("Bob")],
            vec![Interaction::new(
                "Alice",
                "Bob",
                "Hello",
                LineStyle::Solid,
                ArrowDirection::Forward,
            )],
        );
        let nodes = rendered(&diagram);

        assert_eq!(nodes.len(), 3);
        assert!(nodes[0].contains("class=\"participant\""));
        assert!(nodes[0].contains(">Alice<"));
        assert!(nodes[1].contains(">Bob<"));
        assert!(nodes[2].contains("class=\"message\""));
        assert!(nodes[2].contains("marker-end=\"url(#arrowhead)\""));
        assert!(nodes[2].contains(">Hello<"));
    }

    #[test]
    fn test_dashed_reply() {
        let diagram = SequenceDiagram::new(
            vec![Participant::new("A"), Participant::new("B")],
            vec![Interaction::new(
                "B",
                "A",
                "ok",
                LineStyle::Dashed,
                ArrowDirection::Forward,
            )],
        );
        let nodes = rendered(&diagram);
        let message = nodes.last().unwrap();
        assert!(message.contains("stroke-dasharray=\"5,5\""));
        assert!(message.contains("x1=\"250\""));
        assert!(message.contains("x2=\"100\""));
    }
}
