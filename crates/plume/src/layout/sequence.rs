//! Sequence diagram layout: one column per participant, one row per message.

use std::collections::HashMap;

use plume_core::{
    geometry::{Bounds, Point, Size},
    semantic::{Interaction, LineStyle, SequenceDiagram},
};

use super::{Edge, LayoutSizing, Marker, units};

const FIRST_COLUMN_X: f32 = 100.0;
const COLUMN_SPACING: f32 = 150.0;
const HEADER_TOP: f32 = 20.0;
const HEADER_SIZE: Size = Size::new(80.0, 40.0);
const LIFELINE_TOP: f32 = 60.0;
const LIFELINE_BOTTOM_MARGIN: f32 = 20.0;
const FIRST_MESSAGE_Y: f32 = 100.0;
const MESSAGE_SPACING: f32 = 60.0;
const LABEL_OFFSET: f32 = 10.0;
const MIN_WIDTH: f32 = 600.0;
const BASE_HEIGHT: f32 = 200.0;

#[derive(Debug, Clone)]
pub struct Participant<'a> {
    pub name: &'a str,
    /// The header box at the top of the lifeline.
    pub header: Bounds,
    pub lifeline: Edge,
}

#[derive(Debug, Clone)]
pub struct Message<'a> {
    pub interaction: &'a Interaction,
    pub edge: Edge,
    /// Centered label anchor, above the line.
    pub label_position: Point,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub participants: Vec<Participant<'a>>,
    pub messages: Vec<Message<'a>>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(diagram: &'a SequenceDiagram) -> Self {
        let size = Size::new(
            MIN_WIDTH.max(COLUMN_SPACING * units(diagram.participants().len())),
            BASE_HEIGHT + MESSAGE_SPACING * units(diagram.interactions().len()),
        );

        let columns: HashMap<&str, f32> = diagram
            .participants()
            .iter()
            .enumerate()
            .map(|(i, participant)| (participant.name(), column_x(i)))
            .collect();

        let participants = diagram
            .participants()
            .iter()
            .enumerate()
            .map(|(i, participant)| {
                let x = column_x(i);
                Participant {
                    name: participant.name(),
                    header: Bounds::new_from_top_left(
                        Point::new(x - HEADER_SIZE.width() / 2.0, HEADER_TOP),
                        HEADER_SIZE,
                    ),
                    lifeline: Edge::plain(
                        Point::new(x, LIFELINE_TOP),
                        Point::new(x, size.height() - LIFELINE_BOTTOM_MARGIN),
                    )
                    .with_line_style(LineStyle::Dashed),
                }
            })
            .collect();

        let messages = diagram
            .interactions()
            .iter()
            .enumerate()
            .filter_map(|(j, interaction)| {
                let from_x = *columns.get(interaction.from())?;
                let to_x = *columns.get(interaction.to())?;
                let y = FIRST_MESSAGE_Y + MESSAGE_SPACING * units(j);
                let edge = Edge::directed(
                    Point::new(from_x, y),
                    Point::new(to_x, y),
                    interaction.direction(),
                    Marker::Arrowhead,
                )
                .with_line_style(interaction.line_style());
                Some(Message {
                    interaction,
                    edge,
                    label_position: Point::new((from_x + to_x) / 2.0, y - LABEL_OFFSET),
                })
            })
            .collect();

        Self {
            participants,
            messages,
            size,
        }
    }
}

fn column_x(index: usize) -> f32 {
    FIRST_COLUMN_X + COLUMN_SPACING * units(index)
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        self.size
    }
}
