//! Node placement that keeps pre-existing y coordinates.
//!
//! Normal nodes keep the y coordinate they came in with. Dummy nodes use their recorded
//! position hint if there is one; otherwise they are stacked below the previous node. Whatever
//! the source of a coordinate, a node overlapping the nodes placed above it (margins and
//! spacing included) is moved down just far enough. Nodes are never moved up.
//!
//! Preconditions: layering and in-layer order come from the interactive layering and crossing
//! minimization phases, or are otherwise final.

use crate::Result;
use crate::graph::{LGraph, NodeId, NodeType, PropertyHolder};
use crate::intermediate::IntermediateProcessor;
use crate::phase::{LayoutPhase, LayoutProcessor, Phase, require_layering};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;
use crate::properties::{GRAPH_PROPERTIES, GraphProperty, ORIGINAL_DUMMY_NODE_POSITION, SPACINGS};
use crate::spacing::Spacings;

#[derive(Debug, Default)]
pub struct InteractiveNodePlacer;

impl LayoutPhase for InteractiveNodePlacer {
    fn processing_configuration(&self, graph: &LGraph) -> Option<ProcessingConfiguration> {
        let external_ports = graph
            .property(&GRAPH_PROPERTIES)
            .is_ok_and(|props| props.contains(&GraphProperty::ExternalPorts));
        external_ports.then(|| {
            ProcessingConfiguration::new().before(
                Phase::NodePlacement,
                IntermediateProcessor::HierarchicalPortPosition,
            )
        })
    }
}

impl LayoutProcessor for InteractiveNodePlacer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Interactive node placement", 1.0);
        require_layering(graph, "interactive node placement")?;
        let spacings = graph.property(&SPACINGS)?;

        let mut graph_height: Option<f64> = None;
        for layer in 0..graph.layer_count() {
            let nodes: Vec<NodeId> = graph.layers()[layer].nodes().to_vec();
            let Some(bottom) = place_nodes(graph, &nodes, &spacings) else {
                continue;
            };
            // The layer's top border is the graph origin.
            if let Some(l) = graph.layer_mut(layer) {
                l.size.height = bottom;
            }
            graph_height = Some(graph_height.map_or(bottom, |h| h.max(bottom)));
        }

        if let Some(height) = graph_height {
            graph.size.height = height;
        }

        monitor.done();
        Ok(())
    }
}

/// Places the nodes of one layer from top to bottom and returns the lowest occupied y
/// coordinate (margins included), or `None` for an empty layer.
fn place_nodes(graph: &mut LGraph, nodes: &[NodeId], spacings: &Spacings) -> Option<f64> {
    if nodes.is_empty() {
        return None;
    }

    let mut min_valid_y = f64::NEG_INFINITY;
    let mut prev_type: Option<NodeType> = None;

    for &id in nodes {
        let node = graph.node_mut(id);
        let node_type = node.node_type();
        let spacing = match prev_type {
            Some(prev) => spacings.vertical_spacing(node_type, prev),
            None => spacings.baseline(node_type),
        };

        if node_type.is_dummy() {
            let known = node.properties().get_ref(&ORIGINAL_DUMMY_NODE_POSITION).copied();
            match known {
                Some(y) => node.position.y = y,
                None => {
                    min_valid_y = min_valid_y.max(0.0);
                    node.position.y = min_valid_y + spacing;
                }
            }
        }

        let required = min_valid_y + spacing + node.margin.top;
        if node.position.y < required {
            tracing::trace!(
                node = id.index(),
                from = node.position.y,
                to = required,
                "moving node down to resolve overlap"
            );
            node.position.y = required;
        }

        min_valid_y = node.position.y + node.size.height + node.margin.bottom;
        prev_type = Some(node_type);
    }

    Some(min_valid_y)
}
