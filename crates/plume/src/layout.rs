//! Layout engines.
//!
//! Every diagram kind has a fixed-formula layout that places its entities
//! directly in canvas coordinates. [`Layout`] is the tagged union the
//! exporter consumes; the canvas size of each variant comes from
//! [`LayoutSizing`].

pub mod activity;
pub mod class;
pub mod component;
pub mod gantt;
pub mod generic;
pub mod mindmap;
pub mod sequence;
pub mod usecase;

use log::debug;

use plume_core::{
    geometry::{Point, Size},
    semantic::{ArrowDirection, Diagram, LineStyle},
};

/// Anything that knows the canvas it needs.
pub trait LayoutSizing {
    fn layout_size(&self) -> Size;
}

/// A reusable arrowhead drawn at the end of an [`Edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Filled triangle
    Arrowhead,
    /// Open triangle, used for every class relationship
    Inheritance,
}

impl Marker {
    /// The id of the marker definition in the document.
    pub fn id(self) -> &'static str {
        match self {
            Self::Arrowhead => "arrowhead",
            Self::Inheritance => "inheritance",
        }
    }
}

/// A positioned straight line, optionally capped by a marker at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    pub marker: Option<Marker>,
    pub line_style: LineStyle,
}

impl Edge {
    /// A plain solid line without a marker.
    pub fn plain(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            marker: None,
            line_style: LineStyle::Solid,
        }
    }

    /// A line between the written `from` and `to` positions.
    ///
    /// The marker always sits at `end`, so a backward arrow is emitted
    /// reversed. Undirected edges carry no marker.
    pub fn directed(from: Point, to: Point, direction: ArrowDirection, marker: Marker) -> Self {
        match direction {
            ArrowDirection::Forward => Self::plain(from, to).with_marker(marker),
            ArrowDirection::Backward => Self::plain(to, from).with_marker(marker),
            ArrowDirection::Undirected => Self::plain(from, to),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Point halfway along the edge.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// The computed geometry of one diagram.
#[derive(Debug)]
pub enum Layout<'a> {
    Sequence(sequence::Layout<'a>),
    Class(class::Layout<'a>),
    UseCase(usecase::Layout<'a>),
    Activity(activity::Layout<'a>),
    Component(component::Layout<'a>),
    MindMap(mindmap::Layout<'a>),
    Gantt(gantt::Layout<'a>),
    Generic(generic::Layout),
}

impl<'a> Layout<'a> {
    /// Runs the layout engine matching the diagram's kind.
    pub fn from_diagram(diagram: &'a Diagram) -> Self {
        let layout = match diagram {
            Diagram::Sequence(diagram) => Self::Sequence(sequence::Layout::new(diagram)),
            Diagram::Class(diagram) => Self::Class(class::Layout::new(diagram)),
            Diagram::UseCase(diagram) => Self::UseCase(usecase::Layout::new(diagram)),
            Diagram::Activity(diagram) => Self::Activity(activity::Layout::new(diagram)),
            Diagram::Component(diagram) => Self::Component(component::Layout::new(diagram)),
            Diagram::MindMap(diagram) => Self::MindMap(mindmap::Layout::new(diagram)),
            Diagram::Gantt(diagram) => Self::Gantt(gantt::Layout::new(diagram)),
            Diagram::Generic(diagram) => Self::Generic(generic::Layout::new(diagram)),
        };
        let size = layout.layout_size();
        debug!(
            kind = diagram.kind().name(),
            width = size.width(),
            height = size.height();
            "Layout calculated"
        );
        layout
    }
}

impl LayoutSizing for Layout<'_> {
    fn layout_size(&self) -> Size {
        match self {
            Self::Sequence(layout) => layout.layout_size(),
            Self::Class(layout) => layout.layout_size(),
            Self::UseCase(layout) => layout.layout_size(),
            Self::Activity(layout) => layout.layout_size(),
            Self::Component(layout) => layout.layout_size(),
            Self::MindMap(layout) => layout.layout_size(),
            Self::Gantt(layout) => layout.layout_size(),
            Self::Generic(layout) => layout.layout_size(),
        }
    }
}

/// `count` as a layout coordinate.
pub(crate) fn units(count: usize) -> f32 {
    count as f32
}
