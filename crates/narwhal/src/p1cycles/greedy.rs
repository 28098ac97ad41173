//! Greedy cycle breaking after Eades, Lin and Smyth.
//!
//! Sinks are peeled off to the right end of a linear node order, sources to the left end; when
//! neither exists, the node with the largest outdegree surplus goes left. Every edge pointing
//! leftwards in the final order is reversed. Self loops are ignored.

use crate::Result;
use crate::graph::{EdgeId, LGraph, NodeId};
use crate::phase::{LayoutPhase, LayoutProcessor};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct GreedyCycleBreaker;

impl LayoutPhase for GreedyCycleBreaker {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        Some(super::processing_additions())
    }
}

impl LayoutProcessor for GreedyCycleBreaker {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Greedy cycle removal", 1.0);

        let order = linear_order(graph);
        let mut reversed = 0usize;
        for edge in graph.edge_ids() {
            if graph.is_self_loop(edge) {
                continue;
            }
            let source = order[&graph.edge_source_node(edge)];
            let target = order[&graph.edge_target_node(edge)];
            if source > target {
                super::reverse(graph, edge);
                reversed += 1;
            }
        }

        tracing::debug!(reversed, "greedy cycle removal");
        monitor.done();
        Ok(())
    }
}

fn linear_order(graph: &LGraph) -> FxHashMap<NodeId, i64> {
    let nodes = graph.node_ids();
    let proper = |e: EdgeId| !graph.is_self_loop(e);

    let mut indeg: FxHashMap<NodeId, usize> = FxHashMap::default();
    let mut outdeg: FxHashMap<NodeId, usize> = FxHashMap::default();
    for &n in &nodes {
        indeg.insert(n, graph.incoming_edges(n).iter().filter(|&&e| proper(e)).count());
        outdeg.insert(n, graph.outgoing_edges(n).iter().filter(|&&e| proper(e)).count());
    }

    let mut mark: FxHashMap<NodeId, i64> = FxHashMap::default();
    let mut next_left: i64 = 1;
    let mut next_right: i64 = -1;

    let remove = |n: NodeId,
                  indeg: &mut FxHashMap<NodeId, usize>,
                  outdeg: &mut FxHashMap<NodeId, usize>,
                  mark: &FxHashMap<NodeId, i64>| {
        for e in graph.outgoing_edges(n).into_iter().filter(|&e| proper(e)) {
            let w = graph.edge_target_node(e);
            if !mark.contains_key(&w) {
                if let Some(d) = indeg.get_mut(&w) {
                    *d = d.saturating_sub(1);
                }
            }
        }
        for e in graph.incoming_edges(n).into_iter().filter(|&e| proper(e)) {
            let v = graph.edge_source_node(e);
            if !mark.contains_key(&v) {
                if let Some(d) = outdeg.get_mut(&v) {
                    *d = d.saturating_sub(1);
                }
            }
        }
    };

    while mark.len() < nodes.len() {
        let mut progressed = true;
        while progressed {
            progressed = false;
            for &n in &nodes {
                if mark.contains_key(&n) {
                    continue;
                }
                if outdeg[&n] == 0 {
                    mark.insert(n, next_right);
                    next_right -= 1;
                    remove(n, &mut indeg, &mut outdeg, &mark);
                    progressed = true;
                } else if indeg[&n] == 0 {
                    mark.insert(n, next_left);
                    next_left += 1;
                    remove(n, &mut indeg, &mut outdeg, &mark);
                    progressed = true;
                }
            }
        }

        let candidate = nodes
            .iter()
            .copied()
            .filter(|n| !mark.contains_key(n))
            .max_by_key(|n| {
                // `max_by_key` keeps the last maximum; negate the position to prefer the first.
                let surplus = outdeg[n] as i64 - indeg[n] as i64;
                (surplus, -(n.index() as i64))
            });
        if let Some(n) = candidate {
            mark.insert(n, next_left);
            next_left += 1;
            remove(n, &mut indeg, &mut outdeg, &mark);
        }
    }

    // Right-hand marks count down from -1; move them behind every left-hand mark.
    let shift = nodes.len() as i64 + 1;
    for m in mark.values_mut() {
        if *m < 0 {
            *m += shift;
        }
    }
    mark
}
