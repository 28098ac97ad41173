//! Spacing policy.
//!
//! In-layer spacing is a lookup table indexed by `(current, previous)` node type. The table is
//! built from the symmetric spacing options and may then be overridden per ordered pair, so
//! callers must always ask in `(current, previous)` order.

use crate::graph::NodeType;
use crate::options::SpacingOptions;

const N: usize = NodeType::COUNT;

#[derive(Debug, Clone, PartialEq)]
pub struct Spacings {
    vertical: [[f64; N]; N],
    between_layers: f64,
}

impl Spacings {
    pub fn new(node_node: f64, edge_node: f64, edge_edge: f64, between_layers: f64) -> Self {
        let mut vertical = [[0.0; N]; N];
        for current in NodeType::ALL {
            for previous in NodeType::ALL {
                vertical[current.index()][previous.index()] =
                    match (current.is_dummy(), previous.is_dummy()) {
                        (false, false) => node_node,
                        (true, true) => edge_edge,
                        _ => edge_node,
                    };
            }
        }
        Self {
            vertical,
            between_layers,
        }
    }

    pub fn from_options(options: &SpacingOptions) -> Self {
        let mut spacings = Self::new(
            options.node_node,
            options.edge_node,
            options.edge_edge,
            options.node_node_between_layers,
        );
        for o in &options.overrides {
            spacings = spacings.with_override(o.current, o.previous, o.value);
        }
        spacings
    }

    /// Sets the spacing used when a node of type `current` follows one of type `previous`.
    /// The swapped pair is left untouched.
    pub fn with_override(mut self, current: NodeType, previous: NodeType, value: f64) -> Self {
        self.vertical[current.index()][previous.index()] = value;
        self
    }

    /// Minimum gap between the margin box of a `previous` node and the margin box of the
    /// `current` node that follows it in the same layer.
    pub fn vertical_spacing(&self, current: NodeType, previous: NodeType) -> f64 {
        self.vertical[current.index()][previous.index()]
    }

    /// Gap above the first node of a layer. The layer's top border acts like a normal node.
    pub fn baseline(&self, current: NodeType) -> f64 {
        self.vertical_spacing(current, NodeType::Normal)
    }

    /// Minimum horizontal gap between two adjacent layers.
    pub fn layer_spacing(&self) -> f64 {
        self.between_layers
    }
}

impl Default for Spacings {
    fn default() -> Self {
        Self::from_options(&SpacingOptions::default())
    }
}
