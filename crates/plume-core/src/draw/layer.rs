//! Layer-based rendering system for SVG output.
//!
//! Drawables push their nodes onto a [`RenderLayer`]; [`LayeredOutput::render`]
//! emits them bottom to top. Within a layer, insertion order is preserved.
//!
//! # Example
//!
//! ```
//! # use plume_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Rectangle};
//! let mut output = LayeredOutput::new();
//!
//! // Relations are added first but still render above entities
//! output.add_to_layer(RenderLayer::Relation, Box::new(Line::new()));
//! output.add_to_layer(RenderLayer::Entity, Box::new(Rectangle::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background - renders first
    Background,
    /// Containers that enclose other entities (packages)
    Container,
    /// One shape and label group per entity
    Entity,
    /// Lines, arrows and their labels between entities - renders last
    Relation,
}

/// Represents SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes are appended to the layer in the order they are added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Renders all nodes in layer order, consuming the output.
    ///
    /// Nodes are emitted flat, without a wrapping group per layer, so every
    /// entity and relation group is a direct child of the document.
    pub fn render(mut self) -> Vec<SvgNode> {
        // Stable: preserves insertion order within one layer
        self.items.sort_by_key(|(layer, _)| *layer);
        self.items.into_iter().map(|(_, node)| node).collect()
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Group, Rectangle};

    use super::*;

    fn labelled(label: &str) -> SvgNode {
        Box::new(Group::new().set("class", label.to_string()))
    }

    #[test]
    fn test_layered_output_new() {
        assert!(LayeredOutput::new().render().is_empty());
    }

    #[test]
    fn test_layered_output_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Entity, Box::new(Rectangle::new()));
        assert_eq!(output.render().len(), 1);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Entity, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Relation, Box::new(Rectangle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_render_orders_by_layer_then_insertion() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Relation, labelled("r1"));
        output.add_to_layer(RenderLayer::Entity, labelled("e1"));
        output.add_to_layer(RenderLayer::Background, labelled("bg"));
        output.add_to_layer(RenderLayer::Entity, labelled("e2"));
        output.add_to_layer(RenderLayer::Container, labelled("c1"));

        let rendered: Vec<String> = output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        let order: Vec<&str> = ["bg", "c1", "e1", "e2", "r1"].to_vec();
        for (node, expected) in rendered.iter().zip(order) {
            assert!(
                node.contains(&format!("class=\"{expected}\"")),
                "expected {expected} in {node}"
            );
        }
    }

    #[test]
    fn test_layer_order() {
        assert!(RenderLayer::Background < RenderLayer::Container);
        assert!(RenderLayer::Entity < RenderLayer::Relation);
    }
}
