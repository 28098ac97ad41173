//! The contract shared by main phases and intermediate processors.

use crate::Result;
use crate::graph::LGraph;
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use std::fmt;

/// The five fixed main phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    CycleBreaking,
    Layering,
    CrossingMinimization,
    NodePlacement,
    EdgeRouting,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::CycleBreaking,
        Phase::Layering,
        Phase::CrossingMinimization,
        Phase::NodePlacement,
        Phase::EdgeRouting,
    ];

    /// 1-based phase number.
    pub const fn number(self) -> usize {
        match self {
            Phase::CycleBreaking => 1,
            Phase::Layering => 2,
            Phase::CrossingMinimization => 3,
            Phase::NodePlacement => 4,
            Phase::EdgeRouting => 5,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase {}", self.number())
    }
}

/// Anything the pipeline can run against a graph.
pub trait LayoutProcessor {
    /// Mutates the graph in place. Implementations report through `monitor` with
    /// `begin(..)` / `done()`.
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()>;

    /// Share of the run's progress this step accounts for.
    fn work_units(&self) -> f64 {
        1.0
    }
}

/// A main phase: a processor that may ask for extra processors around the main phases.
pub trait LayoutPhase: LayoutProcessor {
    /// Extra steps this phase needs for `graph`, or `None`.
    fn processing_configuration(&self, graph: &LGraph) -> Option<ProcessingConfiguration>;
}

/// Fails with `UnsupportedGraph` unless every node has been assigned to a layer.
pub(crate) fn require_layering(graph: &LGraph, phase: &'static str) -> Result<()> {
    let layerless = graph.layerless_nodes().len();
    if layerless > 0 {
        return Err(crate::Error::UnsupportedGraph {
            phase,
            reason: format!("{layerless} node(s) have not been assigned to a layer"),
        });
    }
    Ok(())
}
