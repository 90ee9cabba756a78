//! Component diagram layout.
//!
//! Named packages are dashed containers laid out left to right, each holding
//! a two-column grid of components. Components declared outside any package
//! form one row below the tallest package. Connections join component centers
//! and resolve their endpoints through a [`ComponentIndex`].

use indexmap::IndexMap;
use log::debug;

use plume_core::{
    geometry::{Bounds, Point, Size},
    semantic::{Component, ComponentDiagram, Connection},
};

use super::{Edge, LayoutSizing, Marker, units};

const LEFT: f32 = 50.0;
const TOP: f32 = 50.0;
const PACKAGE_SPACING: f32 = 350.0;
const PACKAGE_WIDTH: f32 = 300.0;
const PACKAGE_MIN_HEIGHT: f32 = 200.0;
const GRID_INSET_X: f32 = 20.0;
const GRID_TOP: f32 = 100.0;
const COLUMN_SPACING: f32 = 130.0;
const ROW_SPACING: f32 = 70.0;
const GRID_COLUMNS: usize = 2;
pub const COMPONENT_SIZE: Size = Size::new(120.0, 50.0);
const STANDALONE_SPACING: f32 = 150.0;
const ROW_GAP: f32 = 50.0;
const MIN_WIDTH: f32 = 800.0;
const MIN_HEIGHT: f32 = 600.0;

#[derive(Debug, Clone)]
pub struct PackageBox<'a> {
    pub name: &'a str,
    pub bounds: Bounds,
}

#[derive(Debug, Clone)]
pub struct ComponentBox<'a> {
    pub component: &'a Component,
    pub bounds: Bounds,
    /// Declared outside any package.
    pub standalone: bool,
}

#[derive(Debug, Clone)]
pub struct Connector<'a> {
    pub connection: &'a Connection,
    pub edge: Edge,
}

/// Resolves a connection endpoint to a component slot.
///
/// Built once per layout from the placed components. Lookup tries aliases
/// first and falls back to full names.
#[derive(Debug, Default)]
pub struct ComponentIndex<'a> {
    by_alias: IndexMap<&'a str, usize>,
    by_name: IndexMap<&'a str, usize>,
}

impl<'a> ComponentIndex<'a> {
    pub fn new<'c>(components: impl IntoIterator<Item = &'c ComponentBox<'a>>) -> Self
    where
        'a: 'c,
    {
        let mut index = Self::default();
        for (slot, placed) in components.into_iter().enumerate() {
            if let Some(alias) = placed.component.alias() {
                index.by_alias.entry(alias).or_insert(slot);
            }
            index.by_name.entry(placed.component.name()).or_insert(slot);
        }
        index
    }

    pub fn resolve(&self, reference: &str) -> Option<usize> {
        self.by_alias
            .get(reference)
            .or_else(|| self.by_name.get(reference))
            .copied()
    }
}

#[derive(Debug, Clone)]
pub struct Layout<'a> {
    pub packages: Vec<PackageBox<'a>>,
    pub components: Vec<ComponentBox<'a>>,
    pub connectors: Vec<Connector<'a>>,
    size: Size,
}

impl<'a> Layout<'a> {
    pub fn new(diagram: &'a ComponentDiagram) -> Self {
        let mut packages = Vec::new();
        let mut components = Vec::new();

        for (k, package) in diagram.named_packages().enumerate() {
            let x = LEFT + PACKAGE_SPACING * units(k);
            let rows = package.components().len().div_ceil(GRID_COLUMNS);
            let height = PACKAGE_MIN_HEIGHT.max(50.0 + ROW_SPACING * units(rows) + 10.0);
            packages.push(PackageBox {
                name: package.name().unwrap_or_default(),
                bounds: Bounds::new_from_top_left(
                    Point::new(x, TOP),
                    Size::new(PACKAGE_WIDTH, height),
                ),
            });

            for (c, component) in package.components().iter().enumerate() {
                let top_left = Point::new(
                    x + GRID_INSET_X + COLUMN_SPACING * units(c % GRID_COLUMNS),
                    GRID_TOP + ROW_SPACING * units(c / GRID_COLUMNS),
                );
                components.push(ComponentBox {
                    component,
                    bounds: Bounds::new_from_top_left(top_left, COMPONENT_SIZE),
                    standalone: false,
                });
            }
        }

        let tallest = packages
            .iter()
            .map(|package| package.bounds.height())
            .fold(PACKAGE_MIN_HEIGHT, f32::max);
        let standalone_y = TOP + tallest + ROW_GAP;
        for (i, component) in diagram.standalone().iter().enumerate() {
            components.push(ComponentBox {
                component,
                bounds: Bounds::new_from_top_left(
                    Point::new(LEFT + STANDALONE_SPACING * units(i), standalone_y),
                    COMPONENT_SIZE,
                ),
                standalone: true,
            });
        }

        let index = ComponentIndex::new(&components);
        let connectors: Vec<Connector<'a>> = diagram
            .connections()
            .iter()
            .filter_map(|connection| {
                let from = index.resolve(connection.from())?;
                let to = index.resolve(connection.to())?;
                Some(Connector {
                    connection,
                    edge: Edge::directed(
                        components[from].bounds.center(),
                        components[to].bounds.center(),
                        connection.direction(),
                        Marker::Arrowhead,
                    ),
                })
            })
            .collect();

        let dropped = diagram.connections().len() - connectors.len();
        if dropped > 0 {
            debug!(dropped = dropped; "Dropped connections with unknown endpoints");
        }

        let size = Size::new(
            MIN_WIDTH
                .max(PACKAGE_SPACING * units(packages.len()) + 50.0)
                .max(STANDALONE_SPACING * units(diagram.standalone().len()) + 100.0),
            MIN_HEIGHT.max(standalone_y + 100.0),
        );

        Self {
            packages,
            components,
            connectors,
            size,
        }
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

    use plume_core::semantic::{ArrowDirection, Package};

    use super::*;

    fn package(name: Option<&str>, components: &[(&str, Option<&str>)]) -> Package {
        let mut package = Package::new(name.map(str::to_string));
        for (component, alias) in components {
            package.push_component(Component::new(*component, alias.map(str::to_string)));
        }
        package
    }

    fn connection(from: &str, to: &str) -> Connection {
        Connection::new(from, to, ArrowDirection::Forward, None)
    }

    #[test]
    fn test_alias_and_full_name_resolve_to_same_position() {
        let diagram = ComponentDiagram::new(
            vec![
                package(Some("Backend"), &[("Authentication Service", Some("Auth"))]),
                package(None, &[("Client", None)]),
            ],
            vec![
                connection("Client", "Auth"),
                connection("Client", "Authentication Service"),
            ],
        );
        let layout = Layout::new(&diagram);

        assert_eq!(layout.connectors.len(), 2);
        assert_eq!(layout.connectors[0].edge.end, layout.connectors[1].edge.end);
        assert_approx_eq!(f32, layout.connectors[0].edge.end.x(), 130.0);
        assert_approx_eq!(f32, layout.connectors[0].edge.end.y(), 125.0);
    }

    #[test]
    fn test_alias_wins_over_full_name() {
        let diagram = ComponentDiagram::new(
            vec![package(None, &[("DB", None), ("Database", Some("DB"))])],
            vec![],
        );
        let layout = Layout::new(&diagram);
        let index = ComponentIndex::new(&layout.components);

        assert_eq!(index.resolve("DB"), Some(1));
        assert_eq!(index.resolve("Database"), Some(1));
        assert_eq!(index.resolve("nothing"), None);
    }

    #[test]
    fn test_dangling_connection_is_dropped() {
        let diagram = ComponentDiagram::new(
            vec![package(Some("P"), &[("A", None)])],
            vec![connection("A", "Missing"), connection("Ghost", "A")],
        );
        let layout = Layout::new(&diagram);
        assert!(layout.connectors.is_empty());
        assert_eq!(layout.components.len(), 1);
    }

    #[test]
    fn test_package_grid() {
        let diagram = ComponentDiagram::new(
            vec![
                package(Some("P0"), &[]),
                package(
                    Some("P1"),
                    &[("A", None), ("B", None), ("C", None), ("D", None), ("E", None)],
                ),
            ],
            vec![],
        );
        let layout = Layout::new(&diagram);

        assert_approx_eq!(f32, layout.packages[0].bounds.height(), 200.0);
        let p1 = layout.packages[1].bounds;
        assert_approx_eq!(f32, p1.min_x(), 400.0);
        // three rows: 50 + 210 + 10
        assert_approx_eq!(f32, p1.height(), 270.0);

        let b = layout.components[1].bounds;
        assert_approx_eq!(f32, b.min_x(), 550.0);
        assert_approx_eq!(f32, b.min_y(), 100.0);
        let e = layout.components[4].bounds;
        assert_approx_eq!(f32, e.min_x(), 420.0);
        assert_approx_eq!(f32, e.min_y(), 240.0);
    }

    #[test]
    fn test_standalone_row_below_tallest_package() {
        let diagram = ComponentDiagram::new(vec![package(None, &[("X", None), ("Y", None)])], vec![]);
        let layout = Layout::new(&diagram);

        let y = layout.components[1].bounds;
        assert!(layout.components[1].standalone);
        assert_approx_eq!(f32, y.min_x(), 200.0);
        assert_approx_eq!(f32, y.min_y(), 300.0);

        let size = layout.layout_size();
        assert_approx_eq!(f32, size.width(), 800.0);
        assert_approx_eq!(f32, size.height(), 600.0);
    }

    #[test]
    fn test_canvas_widens_with_packages() {
        let packages = (0..3)
            .map(|k| package(Some(&format!("P{k}")), &[]))
            .collect();
        let diagram = ComponentDiagram::new(packages, vec![]);
        assert_approx_eq!(f32, Layout::new(&diagram).layout_size().width(), 1100.0);
    }
}
