use crate::Result;
use crate::graph::{LGraph, NodeId};
use crate::phase::{LayoutPhase, LayoutProcessor};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use rustc_hash::FxHashMap;

/// Puts every node one layer to the right of its furthest predecessor; sources end up in the
/// first layer.
#[derive(Debug, Default)]
pub struct LongestPathLayerer;

impl LayoutPhase for LongestPathLayerer {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        Some(super::processing_additions())
    }
}

impl LayoutProcessor for LongestPathLayerer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Longest path layering", 1.0);

        let nodes: Vec<NodeId> = graph.layerless_nodes().to_vec();
        let order = super::topological_order(graph, &nodes, "longest path layering")?;

        let mut layer: FxHashMap<NodeId, usize> = nodes.iter().map(|&n| (n, 0)).collect();
        for n in order {
            let next = layer[&n] + 1;
            for e in graph.outgoing_edges(n) {
                let w = graph.edge_target_node(e);
                if w == n {
                    continue;
                }
                if let Some(l) = layer.get_mut(&w) {
                    *l = (*l).max(next);
                }
            }
        }

        super::materialize(graph, &nodes, &layer)?;
        tracing::debug!(layers = graph.layer_count(), "longest path layering");
        monitor.done();
        Ok(())
    }
}
