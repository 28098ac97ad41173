//! Node placement for layouts computed from scratch.
//!
//! Stacks the nodes of each layer from the top, separated by the spacing policy, then centres
//! every layer vertically against the tallest one.

use crate::Result;
use crate::graph::{LGraph, NodeId, NodeType, PropertyHolder};
use crate::phase::{LayoutPhase, LayoutProcessor, require_layering};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use crate::properties::SPACINGS;

#[derive(Debug, Default)]
pub struct SimpleNodePlacer;

impl LayoutPhase for SimpleNodePlacer {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        None
    }
}

impl LayoutProcessor for SimpleNodePlacer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Simple node placement", 1.0);
        require_layering(graph, "simple node placement")?;
        let spacings = graph.property(&SPACINGS)?;

        let mut max_height: f64 = 0.0;
        for layer in 0..graph.layer_count() {
            let nodes: Vec<NodeId> = graph.layers()[layer].nodes().to_vec();
            let mut y = 0.0;
            let mut prev_type: Option<NodeType> = None;
            for id in nodes {
                let node = graph.node_mut(id);
                if let Some(prev) = prev_type {
                    y += spacings.vertical_spacing(node.node_type(), prev);
                }
                node.position.y = y + node.margin.top;
                y = node.position.y + node.size.height + node.margin.bottom;
                prev_type = Some(node.node_type());
            }
            if let Some(l) = graph.layer_mut(layer) {
                l.size.height = y;
            }
            max_height = max_height.max(y);
        }

        for layer in 0..graph.layer_count() {
            let offset = (max_height - graph.layers()[layer].size.height) / 2.0;
            if offset <= 0.0 {
                continue;
            }
            let nodes: Vec<NodeId> = graph.layers()[layer].nodes().to_vec();
            for id in nodes {
                graph.node_mut(id).position.y += offset;
            }
        }

        graph.size.height = max_height;
        monitor.done();
        Ok(())
    }
}
