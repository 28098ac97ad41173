//! Removes long-edge dummies again once they have coordinates.
//!
//! Layers are walked left to right, so by the time a dummy is joined its incoming segment
//! already carries the bend points of every dummy before it.

use crate::graph::{LGraph, NodeId, NodeType};
use crate::phase::LayoutProcessor;
use crate::progress::ProgressMonitor;
use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct LongEdgeJoiner;

impl LayoutProcessor for LongEdgeJoiner {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Edge joining", 1.0);

        for layer in 0..graph.layer_count() {
            let dummies: Vec<NodeId> = graph.layers()[layer]
                .nodes()
                .iter()
                .copied()
                .filter(|&n| graph.node(n).node_type() == NodeType::LongEdge)
                .collect();
            for dummy in dummies {
                join(graph, dummy)?;
            }
        }

        monitor.done();
        Ok(())
    }
}

fn join(graph: &mut LGraph, dummy: NodeId) -> Result<()> {
    let incoming = graph.incoming_edges(dummy);
    let outgoing = graph.outgoing_edges(dummy);
    let ([incoming], [outgoing]) = (incoming.as_slice(), outgoing.as_slice()) else {
        return Err(Error::UnsupportedGraph {
            phase: "long edge joiner",
            reason: format!(
                "long edge dummy {} has {} incoming and {} outgoing edges",
                dummy.index(),
                incoming.len(),
                outgoing.len()
            ),
        });
    };
    let (incoming, outgoing) = (*incoming, *outgoing);

    let center = graph.node(dummy).center();
    let target = graph.edge(outgoing).target();
    let tail = std::mem::take(&mut graph.edge_mut(outgoing).bend_points);
    let bends = &mut graph.edge_mut(incoming).bend_points;
    bends.push(center);
    bends.extend(tail);

    graph.remove_edge(outgoing)?;
    graph.set_edge_target(incoming, target);
    graph.remove_node(dummy)?;
    Ok(())
}
