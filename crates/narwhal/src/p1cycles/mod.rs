//! Phase 1: cycle breaking.
//!
//! Reverses a set of edges so that the graph becomes acyclic. Reversed edges are marked with
//! `REVERSED` and turned back by the reversed-edge restorer after edge routing.

mod greedy;
mod interactive;

pub use greedy::GreedyCycleBreaker;
pub use interactive::InteractiveCycleBreaker;

use crate::graph::{EdgeId, LGraph, PropertyHolder};
use crate::intermediate::IntermediateProcessor;
use crate::phase::{LayoutPhase, Phase};
use crate::processing::ProcessingConfiguration;
use crate::properties::REVERSED;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleBreakingStrategy {
    #[default]
    Greedy,
    Interactive,
}

impl CycleBreakingStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            CycleBreakingStrategy::Greedy => "greedy cycle breaking",
            CycleBreakingStrategy::Interactive => "interactive cycle breaking",
        }
    }

    pub fn create(self) -> Box<dyn LayoutPhase> {
        match self {
            CycleBreakingStrategy::Greedy => Box::new(GreedyCycleBreaker),
            CycleBreakingStrategy::Interactive => Box::new(InteractiveCycleBreaker),
        }
    }
}

fn processing_additions() -> ProcessingConfiguration {
    ProcessingConfiguration::new().after(
        Phase::EdgeRouting,
        IntermediateProcessor::ReversedEdgeRestorer,
    )
}

fn reverse(graph: &mut LGraph, edge: EdgeId) {
    graph.reverse_edge(edge);
    let e = graph.edge_mut(edge);
    e.bend_points.reverse();
    let reversed = e.property(&REVERSED).unwrap_or(false);
    e.set_property(&REVERSED, !reversed);
}
