use crate::Result;
use crate::graph::{LGraph, PropertyHolder};
use crate::phase::LayoutProcessor;
use crate::progress::ProgressMonitor;
use crate::properties::REVERSED;

/// Turns edges reversed by cycle breaking back into their original direction.
#[derive(Debug, Default)]
pub struct ReversedEdgeRestorer;

impl LayoutProcessor for ReversedEdgeRestorer {
    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        monitor.begin("Restoring reversed edges", 1.0);

        for edge in graph.edge_ids() {
            if !graph.edge(edge).property(&REVERSED)? {
                continue;
            }
            graph.reverse_edge(edge);
            let e = graph.edge_mut(edge);
            e.bend_points.reverse();
            e.set_property(&REVERSED, false);
        }

        monitor.done();
        Ok(())
    }
}
