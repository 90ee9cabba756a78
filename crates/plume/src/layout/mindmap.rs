//! Mind-map layout: one row per node, indented by level.

use plume_core::{
    geometry::{Point, Size},
    semantic::{MindMap, MindMapNode},
};

use super::{Edge, LayoutSizing, units};

const FIRST_X: f32 = 100.0;
const LEVEL_INDENT: f32 = 150.0;
const FIRST_Y: f32 = 100.0;
const ROW_SPACING: f32 = 60.0;
const BASE_RADIUS_X: f32 = 60.0;
const RADIUS_X_PER_LEVEL: f32 = 10.0;
const RADIUS_Y: f32 = 25.0;
/// Connectors attach this far from the ellipse centers.
const CONNECTOR_INSET: f32 = 60.0;
/// Number of colors the exporter cycles through.
pub const PALETTE_SIZE: usize = 5;
const MIN_WIDTH: f32 = 800.0;
const MIN_HEIGHT: f32 = 600.0;
const RIGHT_MARGIN: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct NodeShape<'a> {
    pub node: &'a MindMapNode,
    pub center: Point,
    pub radii: Size,
    /// Index into the branch palette, `level mod PALETTE_SIZE`.
    pub palette_index: usize,
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub nodes: Vec<NodeShape<'a>>,
    pub branches: Vec<Edge>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(mind_map: &'a MindMap) -> Self {
        let nodes: Vec<NodeShape<'a>> = mind_map
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let level = units(node.level());
                NodeShape {
                    node,
                    center: Point::new(
                        FIRST_X + LEVEL_INDENT * level,
                        FIRST_Y + ROW_SPACING * units(i),
                    ),
                    radii: Size::new(BASE_RADIUS_X + RADIUS_X_PER_LEVEL * level, RADIUS_Y),
                    palette_index: node.level() % PALETTE_SIZE,
                }
            })
            .collect();

        let branches = (0..nodes.len())
            .filter_map(|i| {
                let parent = &nodes[mind_map.parent_of(i)?];
                let child = &nodes[i];
                Some(Edge::plain(
                    parent.center.with_x(parent.center.x() + CONNECTOR_INSET),
                    child.center.with_x(child.center.x() - CONNECTOR_INSET),
                ))
            })
            .collect();

        let right_edge = nodes
            .iter()
            .map(|shape| shape.center.x() + shape.radii.width())
            .fold(0.0, f32::max);
        let size = Size::new(
            MIN_WIDTH.max(right_edge + RIGHT_MARGIN),
            MIN_HEIGHT.max(FIRST_Y + ROW_SPACING * units(nodes.len())),
        );

        Self {
            nodes,
            branches,
            size,
        }
    }
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        self.size
    }
}
