//! Layer sweep with the barycenter heuristic.
//!
//! Alternates forward sweeps (ordering each layer by the mean position of its predecessors) and
//! backward sweeps (by the mean position of its successors), keeping the best order seen.
//! Nodes without neighbours in the fixed layer keep their current position as barycenter.

use crate::Result;
use crate::graph::{LGraph, NodeId};
use crate::phase::{LayoutPhase, LayoutProcessor, require_layering};
use crate::processing::ProcessingConfiguration;
use crate::progress::ProgressMonitor;

#[derive(Debug)]
pub struct BarycenterCrossingMinimizer {
    pub sweeps: usize,
}

impl Default for BarycenterCrossingMinimizer {
    fn default() -> Self {
        Self { sweeps: 4 }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl LayoutPhase for BarycenterCrossingMinimizer {
    fn processing_configuration(&self, _graph: &LGraph) -> Option<ProcessingConfiguration> {
        None
    }
}

impl LayoutProcessor for BarycenterCrossingMinimizer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Barycenter crossing minimization", self.sweeps as f64);
        require_layering(graph, "barycenter crossing minimization")?;

        let mut best_crossings = super::count_crossings(graph);
        let mut best = snapshot(graph);

        for sweep in 0..self.sweeps {
            if best_crossings == 0 {
                break;
            }
            let direction = if sweep % 2 == 0 {
                Direction::Forward
            } else {
                Direction::Backward
            };
            sweep_layers(graph, direction)?;

            let crossings = super::count_crossings(graph);
            if crossings < best_crossings {
                best_crossings = crossings;
                best = snapshot(graph);
            }
            monitor.worked(1.0);
        }

        for (layer, order) in best.into_iter().enumerate() {
            graph.reorder_layer(layer, order)?;
        }

        tracing::debug!(crossings = best_crossings, "barycenter crossing minimization");
        monitor.done();
        Ok(())
    }
}

fn snapshot(graph: &LGraph) -> Vec<Vec<NodeId>> {
    graph.layers().iter().map(|l| l.nodes().to_vec()).collect()
}

fn sweep_layers(graph: &mut LGraph, direction: Direction) -> Result<()> {
    let count = graph.layer_count();
    if count < 2 {
        return Ok(());
    }
    let steps: Vec<(usize, usize)> = match direction {
        Direction::Forward => (1..count).map(|l| (l, l - 1)).collect(),
        Direction::Backward => (0..count - 1).rev().map(|l| (l, l + 1)).collect(),
    };

    for (free, fixed) in steps {
        let fixed_positions = super::positions(graph.layers()[fixed].nodes());
        let mut keyed: Vec<(f64, usize, NodeId)> = graph.layers()[free]
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let neighbours: Vec<usize> = match direction {
                    Direction::Forward => graph
                        .incoming_edges(n)
                        .into_iter()
                        .filter_map(|e| fixed_positions.get(&graph.edge_source_node(e)).copied())
                        .collect(),
                    Direction::Backward => graph
                        .outgoing_edges(n)
                        .into_iter()
                        .filter_map(|e| fixed_positions.get(&graph.edge_target_node(e)).copied())
                        .collect(),
                };
                let barycenter = if neighbours.is_empty() {
                    i as f64
                } else {
                    neighbours.iter().sum::<usize>() as f64 / neighbours.len() as f64
                };
                (barycenter, i, n)
            })
            .collect();

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        graph.reorder_layer(free, keyed.into_iter().map(|(_, _, n)| n).collect())?;
    }
    Ok(())
}
