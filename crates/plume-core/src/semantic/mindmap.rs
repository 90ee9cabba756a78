//! Mind-map entities.

/// A mind-map node. `level` is the number of leading asterisks, always >= 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindMapNode {
    level: usize,
    text: String,
}

impl MindMapNode {
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Nodes in encounter order. Parent links are derived from levels at layout time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MindMap {
    nodes: Vec<MindMapNode>,
}

impl MindMap {
    pub fn new(nodes: Vec<MindMapNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[MindMapNode] {
        &self.nodes
    }

    /// Index of the nearest node before `index` whose level is one less than
    /// the node at `index`, or `None` for roots and orphans.
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        let level = self.nodes.get(index)?.level();
        if level <= 1 {
            return None;
        }
        self.nodes[..index]
            .iter()
            .rposition(|node| node.level() == level - 1)
    }
}
