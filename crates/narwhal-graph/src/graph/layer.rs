//! Layers: ordered groups of nodes drawn at the same rank.
//!
//! Membership is only changed through `LGraph` so that a node's `layer` index and the layer's
//! node list never disagree.

use crate::geometry::Size;
use crate::graph::NodeId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layer {
    pub(crate) nodes: Vec<NodeId>,
    pub size: Size,
    /// Horizontal position of the layer's left border, set by edge routing.
    pub x: f64,
}

impl Layer {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position_of(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }
}
