use crate::Result;
use crate::graph::{LGraph, NodeId, PropertyHolder};
use crate::phase::{LayoutPhase, LayoutProcessor, require_layering};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use crate::properties::SPACINGS;

/// Places layers left to right, `layer_spacing()` apart, and centres every node horizontally
/// inside its layer.
#[derive(Debug, Default)]
pub struct PolylineEdgeRouter;

impl LayoutPhase for PolylineEdgeRouter {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        None
    }
}

impl LayoutProcessor for PolylineEdgeRouter {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Polyline edge routing", 1.0);
        require_layering(graph, "polyline edge routing")?;
        let layer_spacing = graph.property(&SPACINGS)?.layer_spacing();

        let mut x = 0.0;
        for layer in 0..graph.layer_count() {
            let nodes: Vec<NodeId> = graph.layers()[layer].nodes().to_vec();
            let width = nodes
                .iter()
                .map(|&n| {
                    let node = graph.node(n);
                    node.size.width + node.margin.left + node.margin.right
                })
                .fold(0.0, f64::max);

            for &n in &nodes {
                let node = graph.node_mut(n);
                let total = node.size.width + node.margin.left + node.margin.right;
                node.position.x = x + (width - total) / 2.0 + node.margin.left;
            }
            if let Some(l) = graph.layer_mut(layer) {
                l.x = x;
                l.size.width = width;
            }
            x += width + layer_spacing;
        }

        graph.size.width = if graph.layer_count() == 0 {
            0.0
        } else {
            x - layer_spacing
        };

        monitor.done();
        Ok(())
    }
}
