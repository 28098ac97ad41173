//! Phase 3: crossing minimization.
//!
//! Reorders the nodes inside each layer. Layer membership is left untouched.

mod barycenter;
mod interactive;

pub use barycenter::BarycenterCrossingMinimizer;
pub use interactive::InteractiveCrossingMinimizer;

use crate::graph::{LGraph, NodeId};
use crate::phase::LayoutPhase;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrossingMinimizationStrategy {
    #[default]
    Barycenter,
    Interactive,
}

impl CrossingMinimizationStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            CrossingMinimizationStrategy::Barycenter => "barycenter crossing minimization",
            CrossingMinimizationStrategy::Interactive => "interactive crossing minimization",
        }
    }

    pub fn create(self) -> Box<dyn LayoutPhase> {
        match self {
            CrossingMinimizationStrategy::Barycenter => {
                Box::new(BarycenterCrossingMinimizer::default())
            }
            CrossingMinimizationStrategy::Interactive => Box::new(InteractiveCrossingMinimizer),
        }
    }
}

/// Number of edge crossings between all pairs of adjacent layers.
pub fn count_crossings(graph: &LGraph) -> usize {
    let mut total = 0;
    for pair in graph.layers().windows(2) {
        let upper = positions(pair[0].nodes());
        let lower = positions(pair[1].nodes());

        let mut segments: Vec<(usize, usize)> = Vec::new();
        for (&n, &i) in &upper {
            for e in graph.outgoing_edges(n) {
                if let Some(&j) = lower.get(&graph.edge_target_node(e)) {
                    segments.push((i, j));
                }
            }
        }

        for (k, &(a1, b1)) in segments.iter().enumerate() {
            for &(a2, b2) in &segments[k + 1..] {
                if (a1 < a2 && b1 > b2) || (a1 > a2 && b1 < b2) {
                    total += 1;
                }
            }
        }
    }
    total
}

fn positions(nodes: &[NodeId]) -> FxHashMap<NodeId, usize> {
    nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect()
}
