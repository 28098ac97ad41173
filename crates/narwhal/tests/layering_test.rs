use narwhal::graph::{LGraph, NodeId, NodeType, PortSide, Size};
use narwhal::p2layers::{InteractiveLayerer, LongestPathLayerer};
use narwhal::{
    Error, IntermediateProcessor, LayoutPhase, LayoutProcessor, Phase, ProcessingSlot,
    ProgressMonitor,
};

fn node(g: &mut LGraph, x: f64, width: f64) -> NodeId {
    let n = g.add_node(NodeType::Normal);
    g.node_mut(n).position.x = x;
    g.node_mut(n).size = Size::new(width, 10.0);
    n
}

fn edge(g: &mut LGraph, from: NodeId, to: NodeId) {
    let out = g.add_port(from, PortSide::East);
    let inp = g.add_port(to, PortSide::West);
    g.add_edge(out, inp);
}

#[test]
fn longest_path_puts_sources_first() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 10.0);
    let b = node(&mut g, 0.0, 10.0);
    let c = node(&mut g, 0.0, 10.0);
    let d = node(&mut g, 0.0, 10.0);
    edge(&mut g, a, b);
    edge(&mut g, b, c);
    edge(&mut g, a, c);
    edge(&mut g, d, c);

    LongestPathLayerer
        .process(&mut g, &mut ProgressMonitor::new())
        .unwrap();

    assert!(g.layerless_nodes().is_empty());
    assert_eq!(g.layer_count(), 3);
    assert_eq!(g.layer(0).unwrap().nodes(), &[a, d]);
    assert_eq!(g.layer(1).unwrap().nodes(), &[b]);
    assert_eq!(g.layer(2).unwrap().nodes(), &[c]);
}

#[test]
fn longest_path_rejects_cycles() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 10.0);
    let b = node(&mut g, 0.0, 10.0);
    edge(&mut g, a, b);
    edge(&mut g, b, a);

    let err = LongestPathLayerer
        .process(&mut g, &mut ProgressMonitor::new())
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedGraph { .. }), "{err:?}");
}

#[test]
fn interactive_groups_overlapping_nodes() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 30.0);
    let b = node(&mut g, 20.0, 30.0);
    let c = node(&mut g, 100.0, 30.0);
    let d = node(&mut g, 45.0, 10.0);

    InteractiveLayerer
        .process(&mut g, &mut ProgressMonitor::new())
        .unwrap();

    assert_eq!(g.layer_count(), 2);
    assert_eq!(g.layer(0).unwrap().nodes(), &[a, b, d]);
    assert_eq!(g.layer(1).unwrap().nodes(), &[c]);
}

#[test]
fn interactive_pushes_successors_right() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 30.0);
    let b = node(&mut g, 10.0, 30.0);
    let c = node(&mut g, 200.0, 30.0);
    edge(&mut g, a, b);

    InteractiveLayerer
        .process(&mut g, &mut ProgressMonitor::new())
        .unwrap();

    assert_eq!(g.layer_count(), 2);
    assert_eq!(g.node(a).layer(), Some(0));
    assert_eq!(g.node(b).layer(), Some(1));
    assert_eq!(g.node(c).layer(), Some(1));
}

#[test]
fn empty_graph_is_a_no_op() {
    let mut g = LGraph::new();
    LongestPathLayerer
        .process(&mut g, &mut ProgressMonitor::new())
        .unwrap();
    InteractiveLayerer
        .process(&mut g, &mut ProgressMonitor::new())
        .unwrap();
    assert_eq!(g.layer_count(), 0);
}

#[test]
fn layerers_schedule_splitter_and_joiner() {
    let g = LGraph::new();
    let config = LongestPathLayerer.processing_configuration(&g).unwrap();
    assert_eq!(
        config.slot_of(IntermediateProcessor::LongEdgeSplitter),
        Some(ProcessingSlot::Before(Phase::CrossingMinimization))
    );
    assert_eq!(
        config.slot_of(IntermediateProcessor::LongEdgeJoiner),
        Some(ProcessingSlot::After(Phase::EdgeRouting))
    );
    assert_eq!(Some(config), InteractiveLayerer.processing_configuration(&g));
}
