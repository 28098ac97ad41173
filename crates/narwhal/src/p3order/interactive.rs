//! Crossing minimization that keeps the drawing's existing vertical arrangement.
//!
//! Each layer is sorted by the previous vertical centre of its nodes. Long-edge dummies have no
//! previous position of their own: unless one was recorded already, it is interpolated between
//! the edge's end nodes and stored as the dummy's position hint for node placement.

use crate::Result;
use crate::graph::{LGraph, NodeId, NodeType, PropertyHolder};
use crate::phase::{LayoutPhase, LayoutProcessor, require_layering};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use crate::properties::{
    LONG_EDGE_PROGRESS, LONG_EDGE_SOURCE, LONG_EDGE_TARGET, ORIGINAL_DUMMY_NODE_POSITION,
};

#[derive(Debug, Default)]
pub struct InteractiveCrossingMinimizer;

impl LayoutPhase for InteractiveCrossingMinimizer {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        None
    }
}

impl LayoutProcessor for InteractiveCrossingMinimizer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Interactive crossing minimization", 1.0);
        require_layering(graph, "interactive crossing minimization")?;

        for layer in 0..graph.layer_count() {
            let nodes: Vec<NodeId> = graph.layers()[layer].nodes().to_vec();
            let mut keyed: Vec<(f64, usize, NodeId)> = Vec::with_capacity(nodes.len());
            for (i, n) in nodes.into_iter().enumerate() {
                keyed.push((vertical_center(graph, n), i, n));
            }
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            graph.reorder_layer(layer, keyed.into_iter().map(|(_, _, n)| n).collect())?;
        }

        monitor.done();
        Ok(())
    }
}

fn vertical_center(graph: &mut LGraph, id: NodeId) -> f64 {
    let node = graph.node(id);
    let half = node.size.height / 2.0;
    if node.node_type() == NodeType::Normal {
        return node.position.y + half;
    }
    if let Some(&y) = node.properties().get_ref(&ORIGINAL_DUMMY_NODE_POSITION) {
        return y + half;
    }
    if node.node_type() != NodeType::LongEdge {
        return node.position.y + half;
    }

    let props = node.properties();
    let (Some(&source), Some(&target), Some(&progress)) = (
        props.get_ref(&LONG_EDGE_SOURCE),
        props.get_ref(&LONG_EDGE_TARGET),
        props.get_ref(&LONG_EDGE_PROGRESS),
    ) else {
        return node.position.y + half;
    };

    let from = graph.node(source).center().y;
    let to = graph.node(target).center().y;
    let center = from + (to - from) * progress;
    graph
        .node_mut(id)
        .set_property(&ORIGINAL_DUMMY_NODE_POSITION, center - half);
    center
}
