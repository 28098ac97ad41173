//! Layering that follows the drawing's existing horizontal arrangement.
//!
//! Nodes whose horizontal extents overlap share a layer. Afterwards nodes are pushed right
//! until every edge points from a lower to a higher layer, and layers left empty by that are
//! dropped.

use crate::Result;
use crate::graph::{LGraph, NodeId};
use crate::phase::{LayoutPhase, LayoutProcessor};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct InteractiveLayerer;

struct LayerSpan {
    start: f64,
    end: f64,
}

impl LayoutPhase for InteractiveLayerer {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        Some(super::processing_additions())
    }
}

impl LayoutProcessor for InteractiveLayerer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Interactive layering", 1.0);

        let mut nodes: Vec<NodeId> = graph.layerless_nodes().to_vec();
        nodes.sort_by(|&a, &b| {
            let (na, nb) = (graph.node(a), graph.node(b));
            na.position
                .x
                .total_cmp(&nb.position.x)
                .then(a.index().cmp(&b.index()))
        });

        let mut spans: Vec<LayerSpan> = Vec::new();
        let mut layer: FxHashMap<NodeId, usize> = FxHashMap::default();
        for &n in &nodes {
            let node = graph.node(n);
            let min = node.position.x;
            let max = node.position.x + node.size.width;

            let hit = spans
                .iter()
                .position(|s| s.start <= max && s.end >= min);
            let index = match hit {
                Some(i) => {
                    let span = &mut spans[i];
                    span.start = span.start.min(min);
                    span.end = span.end.max(max);
                    i
                }
                None => {
                    spans.push(LayerSpan {
                        start: min,
                        end: max,
                    });
                    spans.len() - 1
                }
            };
            layer.insert(n, index);
        }

        for n in super::topological_order(graph, &nodes, "interactive layering")? {
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
        let dropped = graph.remove_empty_layers();
        tracing::debug!(layers = graph.layer_count(), dropped, "interactive layering");
        monitor.done();
        Ok(())
    }
}
