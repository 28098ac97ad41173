//! Cycle breaking that keeps the drawing's existing left-to-right direction.
//!
//! Nodes are ordered by the x coordinate of their centres (ties broken by id), and every edge
//! pointing against that order is reversed. Because the order is total, the result is acyclic.

use crate::Result;
use crate::graph::{LGraph, NodeId};
use crate::phase::{LayoutPhase, LayoutProcessor};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use std::cmp::Ordering;

#[derive(Debug, Default)]
pub struct InteractiveCycleBreaker;

impl LayoutPhase for InteractiveCycleBreaker {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        Some(super::processing_additions())
    }
}

impl LayoutProcessor for InteractiveCycleBreaker {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Interactive cycle breaking", 1.0);

        for edge in graph.edge_ids() {
            if graph.is_self_loop(edge) {
                continue;
            }
            let source = order_key(graph, graph.edge_source_node(edge));
            let target = order_key(graph, graph.edge_target_node(edge));
            if source.0.total_cmp(&target.0).then(source.1.cmp(&target.1)) == Ordering::Greater {
                super::reverse(graph, edge);
            }
        }

        monitor.done();
        Ok(())
    }
}

fn order_key(graph: &LGraph, node: NodeId) -> (f64, usize) {
    (graph.node(node).center().x, node.index())
}
