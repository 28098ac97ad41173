use crate::geometry::Point;
use crate::graph::PortId;
use crate::property::{PropertyHolder, PropertyMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct LEdge {
    pub(crate) id: EdgeId,
    pub(crate) source: PortId,
    pub(crate) target: PortId,
    pub(crate) removed: bool,
    pub bend_points: Vec<Point>,
    properties: PropertyMap,
}

impl LEdge {
    pub(crate) fn new(id: EdgeId, source: PortId, target: PortId) -> Self {
        Self {
            id,
            source,
            target,
            removed: false,
            bend_points: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> PortId {
        self.source
    }

    pub fn target(&self) -> PortId {
        self.target
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }
}

impl PropertyHolder for LEdge {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
