//! Phase 5: edge routing.
//!
//! Fixes the horizontal geometry: layer x coordinates, node x coordinates inside their layer,
//! and the graph's width. Bend points for long edges are produced when the long-edge joiner
//! removes the dummies after this phase.

mod polyline;

pub use polyline::PolylineEdgeRouter;

use crate::phase::LayoutPhase;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeRoutingStrategy {
    #[default]
    Polyline,
}

impl EdgeRoutingStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            EdgeRoutingStrategy::Polyline => "polyline edge routing",
        }
    }

    pub fn create(self) -> Box<dyn LayoutPhase> {
        match self {
            EdgeRoutingStrategy::Polyline => Box::new(PolylineEdgeRouter),
        }
    }
}
