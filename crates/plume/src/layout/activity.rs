//! Activity diagram layout: a single vertical lane.

use plume_core::{
    geometry::{Point, Size},
    semantic::{ActivityDiagram, Step},
};

use super::{Edge, LayoutSizing, Marker, units};

const LANE_X: f32 = 200.0;
const FIRST_Y: f32 = 50.0;
const AFTER_START: f32 = 60.0;
const STEP_SPACING: f32 = 80.0;
pub const TERMINAL_RADIUS: f32 = 15.0;
pub const ACTIVITY_SIZE: Size = Size::new(160.0, 40.0);
/// Half-width and half-height of the decision diamond.
pub const DECISION_HALF: Size = Size::new(40.0, 20.0);
const WIDTH: f32 = 400.0;
const TERMINAL_ROOM: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Start,
    Stop,
    Activity,
    Decision,
}

#[derive(Debug, Clone)]
pub struct Node<'a> {
    pub kind: NodeKind,
    /// Empty for terminals.
    pub text: &'a str,
    pub center: Point,
}

impl Node<'_> {
    fn half_height(&self) -> f32 {
        match self.kind {
            NodeKind::Start | NodeKind::Stop => TERMINAL_RADIUS,
            NodeKind::Activity => ACTIVITY_SIZE.height() / 2.0,
            NodeKind::Decision => DECISION_HALF.height(),
        }
    }

    fn top(&self) -> Point {
        self.center.with_y(self.center.y() - self.half_height())
    }

    fn bottom(&self) -> Point {
        self.center.with_y(self.center.y() + self.half_height())
    }
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub nodes: Vec<Node<'a>>,
    /// Arrows between consecutive nodes, bottom edge to top edge.
    pub flows: Vec<Edge>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(diagram: &'a ActivityDiagram) -> Self {
        let mut nodes = Vec::with_capacity(diagram.steps().len() + 2);
        let mut cursor = FIRST_Y;

        if diagram.has_start() {
            nodes.push(Node {
                kind: NodeKind::Start,
                text: "",
                center: Point::new(LANE_X, cursor),
            });
            cursor += AFTER_START;
        }

        for step in diagram.steps() {
            let kind = match step {
                Step::Activity(_) => NodeKind::Activity,
                Step::Decision(_) => NodeKind::Decision,
            };
            nodes.push(Node {
                kind,
                text: step.text(),
                center: Point::new(LANE_X, cursor),
            });
            cursor += STEP_SPACING;
        }

        if diagram.has_stop() {
            nodes.push(Node {
                kind: NodeKind::Stop,
                text: "",
                center: Point::new(LANE_X, cursor),
            });
        }

        let flows = nodes
            .windows(2)
            .map(|pair| Edge::plain(pair[0].bottom(), pair[1].top()).with_marker(Marker::Arrowhead))
            .collect();

        let terminals = units(usize::from(diagram.has_start()) + usize::from(diagram.has_stop()));
        let size = Size::new(
            WIDTH,
            100.0 + STEP_SPACING * units(diagram.steps().len()) + TERMINAL_ROOM * terminals,
        );

        Self { nodes, flows, size }
    }
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn steps() -> Vec<Step> {
        vec![
            Step::Activity("Read".to_string()),
            Step::Decision("ok?".to_string()),
        ]
    }

    #[test]
    fn test_lane_positions() {
        let diagram = ActivityDiagram::new(true, true, steps());
        let layout = Layout::new(&diagram);

        let ys: Vec<f32> = layout.nodes.iter().map(|node| node.center.y()).collect();
        assert_eq!(ys, [50.0, 110.0, 190.0, 270.0]);
        assert_eq!(layout.nodes[0].kind, NodeKind::Start);
        assert_eq!(layout.nodes[2].kind, NodeKind::Decision);
        assert_eq!(layout.nodes[3].kind, NodeKind::Stop);

        let size = layout.layout_size();
        assert_approx_eq!(f32, size.width(), 400.0);
        assert_approx_eq!(f32, size.height(), 360.0);
    }

    #[test]
    fn test_flows_join_node_edges() {
        let diagram = ActivityDiagram::new(true, true, steps());
        let layout = Layout::new(&diagram);

        assert_eq!(layout.flows.len(), 3);
        // start circle bottom to activity top
        assert_approx_eq!(f32, layout.flows[0].start.y(), 65.0);
        assert_approx_eq!(f32, layout.flows[0].end.y(), 90.0);
        // decision bottom to stop circle top
        assert_approx_eq!(f32, layout.flows[2].start.y(), 210.0);
        assert_approx_eq!(f32, layout.flows[2].end.y(), 255.0);
        assert!(layout.flows.iter().all(|flow| flow.marker == Some(Marker::Arrowhead)));
    }

    #[test]
    fn test_without_terminals() {
        let diagram = ActivityDiagram::new(false, false, steps());
        let layout = Layout::new(&diagram);

        assert_approx_eq!(f32, layout.nodes[0].center.y(), 50.0);
        assert_eq!(layout.flows.len(), 1);
        assert_approx_eq!(f32, layout.layout_size().height(), 260.0);
    }
}
