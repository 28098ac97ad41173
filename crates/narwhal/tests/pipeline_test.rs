use narwhal::graph::{EdgeId, LGraph, NodeId, NodeType, PortSide, PropertyHolder, Size};
use narwhal::properties::{GRAPH_PROPERTIES, GraphProperty, SPACINGS};
use narwhal::{
    Error, LayeredLayout, LayeredOptions, LayoutMode, PhaseStrategies, Pipeline, PipelineState,
    ProgressMonitor, Spacings,
};

fn node(g: &mut LGraph, x: f64, y: f64) -> NodeId {
    let n = g.add_node(NodeType::Normal);
    let node = g.node_mut(n);
    node.position.x = x;
    node.position.y = y;
    node.size = Size::new(30.0, 20.0);
    n
}

fn edge(g: &mut LGraph, from: NodeId, to: NodeId) -> EdgeId {
    let out = g.add_port(from, PortSide::East);
    let inp = g.add_port(to, PortSide::West);
    g.add_edge(out, inp)
}

fn labels(pipeline: &Pipeline) -> Vec<String> {
    pipeline.steps().iter().map(|s| s.to_string()).collect()
}

fn configured() -> LGraph {
    let mut g = LGraph::new();
    g.set_property(&SPACINGS, Spacings::default());
    g
}

#[test]
fn interactive_pipeline_expands_processors_around_phases() {
    let g = configured();
    let mut pipeline = Pipeline::new(PhaseStrategies::for_mode(LayoutMode::Interactive));
    assert_eq!(pipeline.state(), PipelineState::Unconfigured);
    assert!(pipeline.steps().is_empty());

    pipeline.assemble(&g).unwrap();
    assert_eq!(pipeline.state(), PipelineState::Assembled);
    assert_eq!(
        labels(&pipeline),
        vec![
            "phase 1: interactive cycle breaking",
            "phase 2: interactive layering",
            "before phase 3: long edge splitter",
            "phase 3: interactive crossing minimization",
            "phase 4: interactive node placement",
            "phase 5: polyline edge routing",
            "after phase 5: long edge joiner",
            "after phase 5: reversed edge restorer",
        ]
    );
}

#[test]
fn external_ports_add_one_step_before_node_placement() {
    let mut g = configured();
    g.set_property(&GRAPH_PROPERTIES, [GraphProperty::ExternalPorts].into());
    let mut pipeline = Pipeline::new(PhaseStrategies::for_mode(LayoutMode::Interactive));
    pipeline.assemble(&g).unwrap();

    let labels = labels(&pipeline);
    let hierarchical: Vec<_> = labels
        .iter()
        .filter(|l| l.ends_with("hierarchical port position"))
        .collect();
    assert_eq!(hierarchical, vec!["before phase 4: hierarchical port position"]);
    let at = labels
        .iter()
        .position(|l| l == "before phase 4: hierarchical port position")
        .unwrap();
    assert_eq!(labels[at + 1], "phase 4: interactive node placement");
}

#[test]
fn from_scratch_pipeline_skips_the_hierarchical_step() {
    let mut g = configured();
    g.set_property(&GRAPH_PROPERTIES, [GraphProperty::ExternalPorts].into());
    let mut pipeline = Pipeline::new(PhaseStrategies::for_mode(LayoutMode::FromScratch));
    pipeline.assemble(&g).unwrap();
    assert_eq!(
        labels(&pipeline),
        vec![
            "phase 1: greedy cycle breaking",
            "phase 2: longest path layering",
            "before phase 3: long edge splitter",
            "phase 3: barycenter crossing minimization",
            "phase 4: simple node placement",
            "phase 5: polyline edge routing",
            "after phase 5: long edge joiner",
            "after phase 5: reversed edge restorer",
        ]
    );
}

#[test]
fn missing_spacings_fails_assembly() {
    let g = LGraph::new();
    let mut pipeline = Pipeline::new(PhaseStrategies::default());
    let err = pipeline.assemble(&g).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }), "{err:?}");
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert!(pipeline.steps().is_empty());
}

#[test]
fn pipeline_rejects_out_of_order_calls() {
    let mut g = configured();
    let mut pipeline = Pipeline::new(PhaseStrategies::default());
    let err = pipeline
        .run(&mut g, &mut ProgressMonitor::new())
        .unwrap_err();
    assert!(
        matches!(
            err,
            Error::InvalidState {
                action: "run",
                state: PipelineState::Unconfigured
            }
        ),
        "{err:?}"
    );

    pipeline.assemble(&g).unwrap();
    pipeline.run(&mut g, &mut ProgressMonitor::new()).unwrap();
    assert_eq!(pipeline.state(), PipelineState::Done);
    assert!(matches!(
        pipeline.assemble(&g),
        Err(Error::InvalidState { action: "assemble", .. })
    ));
    assert!(matches!(
        pipeline.run(&mut g, &mut ProgressMonitor::new()),
        Err(Error::InvalidState { action: "run", .. })
    ));
}

#[test]
fn failing_step_aborts_the_run() {
    let mut g = configured();
    // A long-edge dummy that no splitter created cannot be joined.
    g.add_node(NodeType::LongEdge);

    let mut pipeline = Pipeline::new(PhaseStrategies::default());
    pipeline.assemble(&g).unwrap();
    let mut monitor = ProgressMonitor::new();
    let err = pipeline.run(&mut g, &mut monitor).unwrap_err();

    match &err {
        Error::StepFailed { step, source } => {
            assert_eq!(step, "after phase 5: long edge joiner");
            assert!(matches!(**source, Error::UnsupportedGraph { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert!(monitor.progress() < 1.0);
    assert!(!monitor.tasks().iter().any(|t| t.name == "Restoring reversed edges"));
}

#[test]
fn from_scratch_layout_end_to_end() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 0.0);
    let b = node(&mut g, 0.0, 0.0);
    let c = node(&mut g, 0.0, 0.0);
    edge(&mut g, a, b);
    edge(&mut g, b, c);
    let long = edge(&mut g, a, c);

    let mut monitor = ProgressMonitor::new();
    LayeredLayout::new(LayeredOptions::default())
        .layout(&mut g, &mut monitor)
        .unwrap();

    assert_eq!(g.layer_count(), 3);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.edge_target_node(long), c);

    assert_eq!(g.node(a).position.x, 0.0);
    assert_eq!(g.node(b).position.x, 50.0);
    assert_eq!(g.node(c).position.x, 100.0);
    assert_eq!(g.size.width, 130.0);

    // Layer 1 holds b and the dummy of a -> c, 10 below b.
    assert_eq!(g.node(b).position.y, 0.0);
    assert_eq!(g.node(a).position.y, 5.0);
    assert_eq!(g.node(c).position.y, 5.0);
    assert_eq!(g.size.height, 30.0);

    let bends = &g.edge(long).bend_points;
    assert_eq!(bends.len(), 1);
    assert_eq!((bends[0].x, bends[0].y), (65.0, 30.0));

    assert_eq!(monitor.progress(), 1.0);
    let tasks = monitor.tasks();
    assert_eq!(tasks[0].name, "Layered layout");
    assert_eq!(tasks.iter().filter(|t| t.depth == 1).count(), 8);
}

#[test]
fn interactive_layout_keeps_positions_and_resolves_overlaps() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 0.0);
    let b = node(&mut g, 100.0, 0.0);
    let c = node(&mut g, 100.0, 10.0);
    edge(&mut g, a, b);
    edge(&mut g, a, c);

    let options = LayeredOptions {
        mode: LayoutMode::Interactive,
        ..Default::default()
    };
    LayeredLayout::new(options)
        .layout(&mut g, &mut ProgressMonitor::new())
        .unwrap();

    assert_eq!(g.layer_count(), 2);
    assert_eq!(g.layer(1).unwrap().nodes(), &[b, c]);
    assert_eq!(g.node(a).position.y, 0.0);
    assert_eq!(g.node(b).position.y, 0.0);
    assert_eq!(g.node(c).position.y, 40.0);
    assert_eq!(g.size.height, 60.0);
    assert_eq!(g.node(b).position.x, 50.0);
}

#[test]
fn interactive_layout_reuses_long_edge_bend_points() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 0.0);
    let b = node(&mut g, 100.0, 0.0);
    let c = node(&mut g, 200.0, 0.0);
    edge(&mut g, a, b);
    let long = edge(&mut g, a, c);
    g.edge_mut(long)
        .bend_points
        .push(narwhal::graph::Point::new(115.0, 80.0));

    let options = LayeredOptions {
        mode: LayoutMode::Interactive,
        ..Default::default()
    };
    LayeredLayout::new(options)
        .layout(&mut g, &mut ProgressMonitor::new())
        .unwrap();

    assert_eq!(g.layer_count(), 3);
    let bends = &g.edge(long).bend_points;
    assert_eq!(bends.len(), 1);
    assert_eq!((bends[0].x, bends[0].y), (65.0, 80.0));
}

#[test]
fn reversed_edges_point_back_after_layout() {
    let mut g = LGraph::new();
    let a = node(&mut g, 0.0, 0.0);
    let b = node(&mut g, 0.0, 0.0);
    let forward = edge(&mut g, a, b);
    let backward = edge(&mut g, b, a);

    LayeredLayout::default()
        .layout(&mut g, &mut ProgressMonitor::new())
        .unwrap();

    assert_eq!(g.edge_source_node(forward), a);
    assert_eq!(g.edge_source_node(backward), b);
    assert_eq!(g.edge_target_node(backward), a);
    assert_eq!(g.layer_count(), 2);
}

#[test]
fn empty_graph_lays_out_to_nothing() {
    let mut g = LGraph::new();
    let mut monitor = ProgressMonitor::new();
    LayeredLayout::default()
        .layout(&mut g, &mut monitor)
        .unwrap();
    assert_eq!(g.layer_count(), 0);
    assert_eq!(g.size.width, 0.0);
    assert_eq!(monitor.progress(), 1.0);
}
