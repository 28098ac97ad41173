//! Property keys read and written by the layout pipeline.
//!
//! The importer fills in the graph-level keys (`SPACINGS`, `GRAPH_PROPERTIES`) and any position
//! hints it knows about; the phases use the remaining keys to hand information to each other.

use crate::graph::{NodeId, PortSide, Property};
use crate::spacing::Spacings;
use std::collections::BTreeSet;

/// Graph-wide capability flags discovered by the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GraphProperty {
    /// The graph has ports on the boundary of its enclosing node, represented by
    /// `NodeType::ExternalPort` dummies.
    ExternalPorts,
}

pub type GraphProperties = BTreeSet<GraphProperty>;

// Graph level.

pub const SPACINGS: Property<Spacings> = Property::new("narwhal.spacings");

pub const GRAPH_PROPERTIES: Property<GraphProperties> =
    Property::with_default("narwhal.graphProperties", BTreeSet::new);

// Nodes.

/// Previously known y coordinate of a dummy node (top of its box).
pub const ORIGINAL_DUMMY_NODE_POSITION: Property<f64> =
    Property::new("narwhal.originalDummyNodePosition");

/// Requested y coordinate of an external port dummy, relative to the graph's top border.
pub const EXTERNAL_PORT_POSITION: Property<f64> = Property::new("narwhal.externalPortPosition");

/// Side of the enclosing node an external port dummy stands for.
pub const EXTERNAL_PORT_SIDE: Property<PortSide> =
    Property::with_default("narwhal.externalPortSide", PortSide::default);

pub const LONG_EDGE_SOURCE: Property<NodeId> = Property::new("narwhal.longEdgeSource");

pub const LONG_EDGE_TARGET: Property<NodeId> = Property::new("narwhal.longEdgeTarget");

/// Position of a long-edge dummy along its chain, in `(0, 1)`.
pub const LONG_EDGE_PROGRESS: Property<f64> = Property::new("narwhal.longEdgeProgress");

// Edges.

pub const REVERSED: Property<bool> = Property::with_default("narwhal.reversed", not_reversed);

fn not_reversed() -> bool {
    false
}
