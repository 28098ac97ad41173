//! Turns the requested positions of east/west external ports into dummy position hints.
//!
//! Runs before node placement, so the interactive placer treats the requested position like
//! any other previously known dummy position and only moves it down to resolve overlaps.

use crate::Result;
use crate::graph::{LGraph, NodeId, NodeType, PortSide, PropertyHolder};
use crate::phase::LayoutProcessor;
use crate::progress::ProgressMonitor;
use crate::properties::{EXTERNAL_PORT_POSITION, EXTERNAL_PORT_SIDE, ORIGINAL_DUMMY_NODE_POSITION};

#[derive(Debug, Default)]
pub struct HierarchicalPortPositionProcessor;

impl LayoutProcessor for HierarchicalPortPositionProcessor {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Hierarchical port position processing", 1.0);

        let external: Vec<NodeId> = graph
            .layers()
            .iter()
            .flat_map(|l| l.nodes().iter().copied())
            .filter(|&n| graph.node(n).node_type() == NodeType::ExternalPort)
            .collect();

        for id in external {
            let node = graph.node_mut(id);
            if !matches!(node.property(&EXTERNAL_PORT_SIDE)?, PortSide::East | PortSide::West) {
                continue;
            }
            if node.has_property(&ORIGINAL_DUMMY_NODE_POSITION) {
                continue;
            }
            let Some(&y) = node.properties().get_ref(&EXTERNAL_PORT_POSITION) else {
                continue;
            };
            node.set_property(&ORIGINAL_DUMMY_NODE_POSITION, y);
        }

        monitor.done();
        Ok(())
    }
}
