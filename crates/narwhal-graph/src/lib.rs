#![forbid(unsafe_code)]

//! Layered graph model used by `narwhal`.
//!
//! An [`LGraph`] owns every node, port and edge of one layout run in arenas and hands out
//! copyable ids. Nodes start out layerless and are moved into ordered [`Layer`]s by the layering
//! phase. Each element carries a [`PropertyMap`] keyed by typed [`Property`] constants.

mod error;
mod geometry;
mod graph;
mod property;

pub use error::{GraphError, Result};
pub use geometry::{Margins, Point, Size};
pub use graph::{EdgeId, LEdge, LGraph, LNode, LPort, Layer, NodeId, NodeType, PortId, PortSide};
pub use property::{Property, PropertyHolder, PropertyMap};
