//! Intermediate processors: named steps that phases schedule around the main phases.

mod hierarchical_port_position;
mod long_edge_joiner;
mod long_edge_splitter;
mod reversed_edge_restorer;

pub use hierarchical_port_position::HierarchicalPortPositionProcessor;
pub use long_edge_joiner::LongEdgeJoiner;
pub use long_edge_splitter::LongEdgeSplitter;
pub use reversed_edge_restorer::ReversedEdgeRestorer;

use crate::phase::LayoutProcessor;

/// Registry of intermediate processors. Declaration order is execution order within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntermediateProcessor {
    HierarchicalPortPosition,
    LongEdgeSplitter,
    LongEdgeJoiner,
    ReversedEdgeRestorer,
}

impl IntermediateProcessor {
    pub const ALL: [IntermediateProcessor; 4] = [
        IntermediateProcessor::HierarchicalPortPosition,
        IntermediateProcessor::LongEdgeSplitter,
        IntermediateProcessor::LongEdgeJoiner,
        IntermediateProcessor::ReversedEdgeRestorer,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IntermediateProcessor::HierarchicalPortPosition => "hierarchical port position",
            IntermediateProcessor::LongEdgeSplitter => "long edge splitter",
            IntermediateProcessor::LongEdgeJoiner => "long edge joiner",
            IntermediateProcessor::ReversedEdgeRestorer => "reversed edge restorer",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn create(self) -> Box<dyn LayoutProcessor> {
        match self {
            IntermediateProcessor::HierarchicalPortPosition => {
                Box::new(HierarchicalPortPositionProcessor)
            }
            IntermediateProcessor::LongEdgeSplitter => Box::new(LongEdgeSplitter),
            IntermediateProcessor::LongEdgeJoiner => Box::new(LongEdgeJoiner),
            IntermediateProcessor::ReversedEdgeRestorer => Box::new(ReversedEdgeRestorer),
        }
    }
}
