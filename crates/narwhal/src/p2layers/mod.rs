//! Phase 2: layer assignment.
//!
//! Moves every layerless node into a layer such that all edges point from a lower to a higher
//! layer index. Long edges are split into dummy chains before crossing minimization and joined
//! again after edge routing.

mod interactive;
mod longest_path;

pub use interactive::InteractiveLayerer;
pub use longest_path::LongestPathLayerer;

use crate::graph::{LGraph, NodeId};
use crate::intermediate::IntermediateProcessor;
use crate::phase::{LayoutPhase, Phase};
use crate::processing::ProcessingConfiguration;
use crate::{Error, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayeringStrategy {
    #[default]
    LongestPath,
    Interactive,
}

impl LayeringStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            LayeringStrategy::LongestPath => "longest path layering",
            LayeringStrategy::Interactive => "interactive layering",
        }
    }

    pub fn create(self) -> Box<dyn LayoutPhase> {
        match self {
            LayeringStrategy::LongestPath => Box::new(LongestPathLayerer),
            LayeringStrategy::Interactive => Box::new(InteractiveLayerer),
        }
    }
}

fn processing_additions() -> ProcessingConfiguration {
    ProcessingConfiguration::new()
        .before(
            Phase::CrossingMinimization,
            IntermediateProcessor::LongEdgeSplitter,
        )
        .after(Phase::EdgeRouting, IntermediateProcessor::LongEdgeJoiner)
}

/// Topological order of `nodes`, considering only edges between them and ignoring self loops.
fn topological_order(graph: &LGraph, nodes: &[NodeId], phase: &'static str) -> Result<Vec<NodeId>> {
    let members: FxHashSet<NodeId> = nodes.iter().copied().collect();
    let mut indeg: FxHashMap<NodeId, usize> = nodes.iter().map(|&n| (n, 0)).collect();
    for &n in nodes {
        for e in graph.outgoing_edges(n) {
            let w = graph.edge_target_node(e);
            if w != n && members.contains(&w) {
                *indeg.entry(w).or_insert(0) += 1;
            }
        }
    }

    let mut queue: VecDeque<NodeId> = nodes.iter().copied().filter(|n| indeg[n] == 0).collect();
    let mut order = Vec::with_capacity(nodes.len());
    while let Some(n) = queue.pop_front() {
        order.push(n);
        for e in graph.outgoing_edges(n) {
            let w = graph.edge_target_node(e);
            if w == n || !members.contains(&w) {
                continue;
            }
            if let Some(d) = indeg.get_mut(&w) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(w);
                }
            }
        }
    }

    if order.len() != nodes.len() {
        return Err(Error::UnsupportedGraph {
            phase,
            reason: "graph contains a cycle; cycle breaking must run first".to_string(),
        });
    }
    Ok(order)
}

/// Creates `count` new layers after the existing ones and moves each node into
/// `first_new_layer + assignment[node]`, keeping the order of `nodes` within a layer.
fn materialize(
    graph: &mut LGraph,
    nodes: &[NodeId],
    assignment: &FxHashMap<NodeId, usize>,
) -> Result<()> {
    let base = graph.layer_count();
    let count = assignment.values().copied().max().map_or(0, |m| m + 1);
    for _ in 0..count {
        graph.add_layer();
    }
    for &n in nodes {
        graph.append_to_layer(n, base + assignment[&n])?;
    }
    Ok(())
}
