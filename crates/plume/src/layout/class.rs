//! Class diagram layout: one box per class in a single row.

use plume_core::{
    geometry::{Bounds, Point, Size},
    semantic::{ClassDecl, ClassDiagram, ClassRelationKind},
};

use super::{Edge, LayoutSizing, Marker, units};

const LEFT: f32 = 50.0;
const TOP: f32 = 50.0;
const SLOT_SPACING: f32 = 250.0;
const BOX_WIDTH: f32 = 200.0;
const BASE_HEIGHT: f32 = 80.0;
pub const MEMBER_HEIGHT: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 30.0;
/// Relations connect fixed anchors, not box borders.
const ANCHOR_Y: f32 = 150.0;
const MIN_WIDTH: f32 = 800.0;
const MIN_HEIGHT: f32 = 400.0;
const BOTTOM_MARGIN: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct ClassBox<'a> {
    pub class: &'a ClassDecl,
    pub bounds: Bounds,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub classes: Vec<ClassBox<'a>>,
    pub relations: Vec<Edge>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(diagram: &'a ClassDiagram) -> Self {
        let classes: Vec<ClassBox<'a>> = diagram
            .classes()
            .iter()
            .enumerate()
            .map(|(i, class)| ClassBox {
                class,
                bounds: Bounds::new_from_top_left(
                    Point::new(LEFT + SLOT_SPACING * units(i), TOP),
                    Size::new(
                        BOX_WIDTH,
                        BASE_HEIGHT + MEMBER_HEIGHT * units(class.member_count()),
                    ),
                ),
            })
            .collect();

        let relations = diagram
            .relations()
            .iter()
            .filter_map(|relation| {
                let from = diagram.class_index(relation.from())?;
                let to = diagram.class_index(relation.to())?;
                let marker = match relation.kind() {
                    ClassRelationKind::Inheritance | ClassRelationKind::Association => {
                        Marker::Inheritance
                    }
                };
                Some(Edge::plain(anchor(from), anchor(to)).with_marker(marker))
            })
            .collect();

        let count = diagram.classes().len();
        let tallest = classes
            .iter()
            .map(|class| class.bounds.height())
            .fold(0.0, f32::max);
        let size = Size::new(
            MIN_WIDTH.max(SLOT_SPACING * units(count)),
            (MIN_HEIGHT + 100.0 * units(count.saturating_sub(2))).max(tallest + BOTTOM_MARGIN),
        );

        Self {
            classes,
            relations,
            size,
        }
    }
}

fn anchor(slot: usize) -> Point {
    Point::new(LEFT + BOX_WIDTH / 2.0 + SLOT_SPACING * units(slot), ANCHOR_Y)
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        self.size
    }
}
