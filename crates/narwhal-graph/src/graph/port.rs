//! Ports: attachment points of edges on nodes.

use crate::geometry::{Point, Size};
use crate::graph::{EdgeId, NodeId};
use crate::property::{PropertyHolder, PropertyMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PortId(pub(crate) usize);

impl PortId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PortSide {
    #[default]
    Undefined,
    North,
    East,
    South,
    West,
}

#[derive(Debug)]
pub struct LPort {
    pub(crate) id: PortId,
    pub(crate) node: NodeId,
    pub(crate) incoming: Vec<EdgeId>,
    pub(crate) outgoing: Vec<EdgeId>,
    pub side: PortSide,
    /// Position relative to the owning node's top-left corner.
    pub position: Point,
    pub size: Size,
    properties: PropertyMap,
}

impl LPort {
    pub(crate) fn new(id: PortId, node: NodeId, side: PortSide) -> Self {
        Self {
            id,
            node,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            side,
            position: Point::ZERO,
            size: Size::default(),
            properties: PropertyMap::new(),
        }
    }

    pub fn id(&self) -> PortId {
        self.id
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }
}

impl PropertyHolder for LPort {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
