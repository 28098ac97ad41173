//! Nodes: real diagram elements and the dummies inserted by earlier phases.

use crate::geometry::{Margins, Point, Size};
use crate::graph::PortId;
use crate::property::{PropertyHolder, PropertyMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum NodeType {
    #[default]
    Normal,
    /// One segment of an edge spanning several layers.
    LongEdge,
    /// Stand-in for a port on the boundary of the enclosing (hierarchical) node.
    ExternalPort,
    /// Stand-in for an edge attached to the north or south side of a node.
    NorthSouthPort,
    /// Carries an edge label through its layer.
    Label,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Normal,
        NodeType::LongEdge,
        NodeType::ExternalPort,
        NodeType::NorthSouthPort,
        NodeType::Label,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        match self {
            NodeType::Normal => 0,
            NodeType::LongEdge => 1,
            NodeType::ExternalPort => 2,
            NodeType::NorthSouthPort => 3,
            NodeType::Label => 4,
        }
    }

    pub const fn is_dummy(self) -> bool {
        !matches!(self, NodeType::Normal)
    }
}

#[derive(Debug)]
pub struct LNode {
    pub(crate) id: NodeId,
    pub(crate) node_type: NodeType,
    pub(crate) layer: Option<usize>,
    pub(crate) ports: Vec<PortId>,
    pub(crate) removed: bool,
    pub name: Option<String>,
    /// Top-left corner of the node box (margins excluded).
    pub position: Point,
    pub size: Size,
    pub margin: Margins,
    properties: PropertyMap,
}

impl LNode {
    pub(crate) fn new(id: NodeId, node_type: NodeType) -> Self {
        Self {
            id,
            node_type,
            layer: None,
            ports: Vec::new(),
            removed: false,
            name: None,
            position: Point::ZERO,
            size: Size::default(),
            margin: Margins::default(),
            properties: PropertyMap::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn set_node_type(&mut self, node_type: NodeType) {
        self.node_type = node_type;
    }

    /// Index of the layer this node belongs to; `None` while layerless.
    pub fn layer(&self) -> Option<usize> {
        self.layer
    }

    pub fn ports(&self) -> &[PortId] {
        &self.ports
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Vertical extent including margins: `[y - margin.top, y + height + margin.bottom]`.
    pub fn vertical_extent(&self) -> (f64, f64) {
        (
            self.position.y - self.margin.top,
            self.position.y + self.size.height + self.margin.bottom,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }
}

impl PropertyHolder for LNode {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
