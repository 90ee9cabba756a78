//! Use-case diagram layout: actors in a left column, use cases in a right one.

use plume_core::{
    geometry::{Point, Size},
    semantic::UseCaseDiagram,
};

use super::{Edge, LayoutSizing, units};

const ACTOR_X: f32 = 100.0;
const ACTOR_SPACING: f32 = 100.0;
const USE_CASE_X: f32 = 400.0;
const USE_CASE_SPACING: f32 = 80.0;
const FIRST_ROW_Y: f32 = 100.0;
pub const USE_CASE_RADII: Size = Size::new(80.0, 30.0);
/// Links leave just right of the actor head and stop at the ellipse's left edge.
const LINK_START_X: f32 = 115.0;
const LINK_END_X: f32 = 320.0;
const WIDTH: f32 = 800.0;
const MIN_HEIGHT: f32 = 600.0;

#[derive(Debug, Clone)]
pub struct ActorFigure<'a> {
    pub name: &'a str,
    /// Center of the head circle.
    pub head: Point,
}

#[derive(Debug, Clone)]
pub struct UseCaseShape<'a> {
    pub label: &'a str,
    pub center: Point,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub actors: Vec<ActorFigure<'a>>,
    pub use_cases: Vec<UseCaseShape<'a>>,
    pub links: Vec<Edge>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(diagram: &'a UseCaseDiagram) -> Self {
        let actors: Vec<ActorFigure<'a>> = diagram
            .actors()
            .iter()
            .enumerate()
            .map(|(i, actor)| ActorFigure {
                name: actor.name(),
                head: Point::new(ACTOR_X, FIRST_ROW_Y + ACTOR_SPACING * units(i)),
            })
            .collect();

        let use_cases: Vec<UseCaseShape<'a>> = diagram
            .use_cases()
            .iter()
            .enumerate()
            .map(|(j, use_case)| UseCaseShape {
                label: use_case.label(),
                center: Point::new(USE_CASE_X, FIRST_ROW_Y + USE_CASE_SPACING * units(j)),
            })
            .collect();

        let links = diagram
            .links()
            .iter()
            .filter_map(|link| {
                let actor = actors.iter().find(|actor| actor.name == link.actor())?;
                let use_case = use_cases
                    .iter()
                    .find(|use_case| use_case.label == link.use_case())?;
                Some(Edge::plain(
                    actor.head.with_x(LINK_START_X),
                    use_case.center.with_x(LINK_END_X),
                ))
            })
            .collect();

        let rows = (ACTOR_SPACING * units(actors.len()))
            .max(USE_CASE_SPACING * units(use_cases.len()));
        let size = Size::new(WIDTH, MIN_HEIGHT.max(FIRST_ROW_Y + rows + 50.0));

        Self {
            actors,
            use_cases,
            links,
            size,
        }
    }
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        self.size
    }
}
