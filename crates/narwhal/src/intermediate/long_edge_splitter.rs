//! Splits edges spanning more than one layer into chains through long-edge dummies.
//!
//! Each dummy gets one input port (west) and one output port (east). If the original edge has
//! exactly one bend point per dummy, those bend points are taken as the positions at which the
//! edge used to cross the intermediate layers and are stored as dummy position hints.

use crate::Result;
use crate::graph::{LGraph, NodeType, PortSide, PropertyHolder};
use crate::phase::LayoutProcessor;
use crate::progress::ProgressMonitor;
use crate::properties::{
    LONG_EDGE_PROGRESS, LONG_EDGE_SOURCE, LONG_EDGE_TARGET, ORIGINAL_DUMMY_NODE_POSITION,
    REVERSED,
};

#[derive(Debug, Default)]
pub struct LongEdgeSplitter;

impl LayoutProcessor for LongEdgeSplitter {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Edge splitting", 1.0);

        let mut dummies = 0usize;
        for edge in graph.edge_ids() {
            let source = graph.edge_source_node(edge);
            let target = graph.edge_target_node(edge);
            let (Some(source_layer), Some(target_layer)) =
                (graph.node(source).layer(), graph.node(target).layer())
            else {
                continue;
            };
            if target_layer <= source_layer + 1 {
                continue;
            }

            let span = target_layer - source_layer - 1;
            let hints: Option<Vec<f64>> = {
                let bends = &graph.edge(edge).bend_points;
                (bends.len() == span).then(|| bends.iter().map(|p| p.y).collect())
            };
            graph.edge_mut(edge).bend_points.clear();
            let reversed = graph.edge(edge).property(&REVERSED)?;
            let final_target = graph.edge(edge).target();

            let mut current = edge;
            for i in 0..span {
                let dummy = graph.add_node(NodeType::LongEdge);
                let input = graph.add_port(dummy, PortSide::West);
                let output = graph.add_port(dummy, PortSide::East);
                graph.append_to_layer(dummy, source_layer + 1 + i)?;

                let node = graph.node_mut(dummy);
                node.set_property(&LONG_EDGE_SOURCE, source);
                node.set_property(&LONG_EDGE_TARGET, target);
                node.set_property(&LONG_EDGE_PROGRESS, (i + 1) as f64 / (span + 1) as f64);
                if let Some(hints) = &hints {
                    node.set_property(&ORIGINAL_DUMMY_NODE_POSITION, hints[i]);
                }

                graph.set_edge_target(current, input);
                let next = graph.add_edge(output, final_target);
                graph.edge_mut(next).set_property(&REVERSED, reversed);
                current = next;
            }
            dummies += span;
        }

        tracing::debug!(dummies, "split long edges");
        monitor.done();
        Ok(())
    }
}
