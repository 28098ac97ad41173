//! The `LGraph` container.
//!
//! Nodes, ports and edges live in arenas indexed by their ids. Ids are never reused: removing an
//! element only marks it removed and unlinks it, so ids held by callers stay unambiguous for the
//! whole layout run. Ids are only meaningful for the graph that created them.

mod edge;
mod layer;
mod node;
mod port;

pub use edge::{EdgeId, LEdge};
pub use layer::Layer;
pub use node::{LNode, NodeId, NodeType};
pub use port::{LPort, PortId, PortSide};

use crate::error::{GraphError, Result};
use crate::geometry::{Point, Size};
use crate::property::{PropertyHolder, PropertyMap};

#[derive(Debug, Default)]
pub struct LGraph {
    nodes: Vec<LNode>,
    ports: Vec<LPort>,
    edges: Vec<LEdge>,
    layers: Vec<Layer>,
    layerless: Vec<NodeId>,
    pub size: Size,
    pub offset: Point,
    properties: PropertyMap,
}

impl LGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LNode::new(id, node_type));
        self.layerless.push(id);
        id
    }

    pub fn add_port(&mut self, node: NodeId, side: PortSide) -> PortId {
        let id = PortId(self.ports.len());
        self.ports.push(LPort::new(id, node, side));
        self.nodes[node.0].ports.push(id);
        id
    }

    pub fn add_edge(&mut self, source: PortId, target: PortId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(LEdge::new(id, source, target));
        self.ports[source.0].outgoing.push(id);
        self.ports[target.0].incoming.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &LNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut LNode {
        &mut self.nodes[id.0]
    }

    pub fn port(&self, id: PortId) -> &LPort {
        &self.ports[id.0]
    }

    pub fn port_mut(&mut self, id: PortId) -> &mut LPort {
        &mut self.ports[id.0]
    }

    pub fn edge(&self, id: EdgeId) -> &LEdge {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut LEdge {
        &mut self.edges[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &LNode> + '_ {
        self.nodes.iter().filter(|n| !n.removed)
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes().map(|n| n.id).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edges(&self) -> impl Iterator<Item = &LEdge> + '_ {
        self.edges.iter().filter(|e| !e.removed)
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges().map(|e| e.id).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layerless_nodes(&self) -> &[NodeId] {
        &self.layerless
    }

    pub fn add_layer(&mut self) -> usize {
        self.layers.push(Layer::default());
        self.layers.len() - 1
    }

    /// Inserts an empty layer at `index`, shifting later layers to the right.
    pub fn insert_layer(&mut self, index: usize) -> Result<()> {
        if index > self.layers.len() {
            return Err(GraphError::LayerOutOfBounds {
                index,
                len: self.layers.len(),
            });
        }
        self.layers.insert(index, Layer::default());
        self.renumber_layers_from(index + 1);
        Ok(())
    }

    /// Removes the layer at `index`. Its nodes become layerless and are returned in layer order.
    pub fn remove_layer(&mut self, index: usize) -> Result<Vec<NodeId>> {
        self.check_layer(index)?;
        let layer = self.layers.remove(index);
        for &n in &layer.nodes {
            self.nodes[n.0].layer = None;
            self.layerless.push(n);
        }
        self.renumber_layers_from(index);
        Ok(layer.nodes)
    }

    /// Drops every layer without nodes and returns how many were removed.
    pub fn remove_empty_layers(&mut self) -> usize {
        let before = self.layers.len();
        self.layers.retain(|l| !l.nodes.is_empty());
        self.renumber_layers_from(0);
        before - self.layers.len()
    }

    /// Moves `node` to the end of `layer`, detaching it from wherever it was before.
    pub fn append_to_layer(&mut self, node: NodeId, layer: usize) -> Result<()> {
        let len = self.layers.get(layer).map(|l| l.nodes.len());
        match len {
            Some(len) => self.insert_into_layer(node, layer, len),
            None => Err(GraphError::LayerOutOfBounds {
                index: layer,
                len: self.layers.len(),
            }),
        }
    }

    /// Moves `node` into `layer` at `position` (clamped to the layer length). The relative order
    /// of the other nodes is preserved.
    pub fn insert_into_layer(&mut self, node: NodeId, layer: usize, position: usize) -> Result<()> {
        self.check_layer(layer)?;
        if self.nodes[node.0].removed {
            return Err(GraphError::RemovedElement);
        }
        self.remove_from_layer(node);
        self.layerless.retain(|&n| n != node);

        let nodes = &mut self.layers[layer].nodes;
        let position = position.min(nodes.len());
        nodes.insert(position, node);
        self.nodes[node.0].layer = Some(layer);
        Ok(())
    }

    /// Detaches `node` from its layer, making it layerless. Returns the layer it was in.
    pub fn remove_from_layer(&mut self, node: NodeId) -> Option<usize> {
        let layer = self.nodes[node.0].layer.take()?;
        self.layers[layer].nodes.retain(|&n| n != node);
        self.layerless.push(node);
        Some(layer)
    }

    /// Replaces the node order of `layer`. `order` must contain exactly the layer's nodes.
    pub fn reorder_layer(&mut self, layer: usize, order: Vec<NodeId>) -> Result<()> {
        self.check_layer(layer)?;
        let current = &self.layers[layer].nodes;
        let mut a = current.clone();
        let mut b = order.clone();
        a.sort_unstable();
        b.sort_unstable();
        if a != b {
            return Err(GraphError::NotAPermutation { layer });
        }
        self.layers[layer].nodes = order;
        Ok(())
    }

    /// Unlinks the node from its layer and removes every edge attached to its ports.
    pub fn remove_node(&mut self, node: NodeId) -> Result<()> {
        if self.nodes[node.0].removed {
            return Err(GraphError::RemovedElement);
        }
        if let Some(layer) = self.nodes[node.0].layer.take() {
            self.layers[layer].nodes.retain(|&n| n != node);
        }
        self.layerless.retain(|&n| n != node);

        let ports = self.nodes[node.0].ports.clone();
        for p in ports {
            let attached: Vec<EdgeId> = self.ports[p.0]
                .incoming
                .iter()
                .chain(self.ports[p.0].outgoing.iter())
                .copied()
                .collect();
            for e in attached {
                let _ = self.remove_edge(e);
            }
        }
        self.nodes[node.0].removed = true;
        Ok(())
    }

    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<()> {
        let e = &self.edges[edge.0];
        if e.removed {
            return Err(GraphError::RemovedElement);
        }
        let (source, target) = (e.source, e.target);
        self.ports[source.0].outgoing.retain(|&x| x != edge);
        self.ports[target.0].incoming.retain(|&x| x != edge);
        self.edges[edge.0].removed = true;
        Ok(())
    }

    pub fn set_edge_source(&mut self, edge: EdgeId, port: PortId) {
        let old = self.edges[edge.0].source;
        self.ports[old.0].outgoing.retain(|&x| x != edge);
        self.ports[port.0].outgoing.push(edge);
        self.edges[edge.0].source = port;
    }

    pub fn set_edge_target(&mut self, edge: EdgeId, port: PortId) {
        let old = self.edges[edge.0].target;
        self.ports[old.0].incoming.retain(|&x| x != edge);
        self.ports[port.0].incoming.push(edge);
        self.edges[edge.0].target = port;
    }

    /// Swaps source and target of `edge`.
    pub fn reverse_edge(&mut self, edge: EdgeId) {
        let (source, target) = (self.edges[edge.0].source, self.edges[edge.0].target);
        self.set_edge_source(edge, target);
        self.set_edge_target(edge, source);
    }

    pub fn edge_source_node(&self, edge: EdgeId) -> NodeId {
        self.ports[self.edges[edge.0].source.0].node
    }

    pub fn edge_target_node(&self, edge: EdgeId) -> NodeId {
        self.ports[self.edges[edge.0].target.0].node
    }

    pub fn is_self_loop(&self, edge: EdgeId) -> bool {
        self.edge_source_node(edge) == self.edge_target_node(edge)
    }

    pub fn outgoing_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.nodes[node.0]
            .ports
            .iter()
            .flat_map(|p| self.ports[p.0].outgoing.iter().copied())
            .collect()
    }

    pub fn incoming_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.nodes[node.0]
            .ports
            .iter()
            .flat_map(|p| self.ports[p.0].incoming.iter().copied())
            .collect()
    }

    fn check_layer(&self, index: usize) -> Result<()> {
        if index < self.layers.len() {
            Ok(())
        } else {
            Err(GraphError::LayerOutOfBounds {
                index,
                len: self.layers.len(),
            })
        }
    }

    fn renumber_layers_from(&mut self, start: usize) {
        for (index, layer) in self.layers.iter().enumerate().skip(start) {
            for &n in &layer.nodes {
                self.nodes[n.0].layer = Some(index);
            }
        }
    }
}

impl PropertyHolder for LGraph {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
