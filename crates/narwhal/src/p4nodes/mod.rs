//! Phase 4: node placement.
//!
//! Assigns vertical coordinates to the nodes of each layer, sets each layer's height and the
//! graph's height. The graph offset is left at the origin.

mod interactive;
mod simple;

pub use interactive::InteractiveNodePlacer;
pub use simple::SimpleNodePlacer;

use crate::phase::LayoutPhase;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodePlacementStrategy {
    #[default]
    Simple,
    Interactive,
}

impl NodePlacementStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            NodePlacementStrategy::Simple => "simple node placement",
            NodePlacementStrategy::Interactive => "interactive node placement",
        }
    }

    pub fn create(self) -> Box<dyn LayoutPhase> {
        match self {
            NodePlacementStrategy::Simple => Box::new(SimpleNodePlacer),
            NodePlacementStrategy::Interactive => Box::new(InteractiveNodePlacer),
        }
    }
}
