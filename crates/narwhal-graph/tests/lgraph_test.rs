use narwhal_graph::{GraphError, LGraph, NodeId, NodeType, PortSide};

fn layered(layer_sizes: &[usize]) -> (LGraph, Vec<Vec<NodeId>>) {
    let mut g = LGraph::new();
    let mut ids = Vec::new();
    for &size in layer_sizes {
        let layer = g.add_layer();
        let mut in_layer = Vec::new();
        for _ in 0..size {
            let n = g.add_node(NodeType::Normal);
            g.append_to_layer(n, layer).unwrap();
            in_layer.push(n);
        }
        ids.push(in_layer);
    }
    (g, ids)
}

#[test]
fn new_nodes_start_layerless() {
    let mut g = LGraph::new();
    let a = g.add_node(NodeType::Normal);
    let b = g.add_node(NodeType::LongEdge);
    assert_eq!(g.layerless_nodes(), &[a, b]);
    assert_eq!(g.node(a).layer(), None);
    assert!(g.node(b).node_type().is_dummy());
}

#[test]
fn append_moves_node_out_of_its_previous_layer() {
    let (mut g, ids) = layered(&[2, 1]);
    let moved = ids[0][0];
    g.append_to_layer(moved, 1).unwrap();

    assert_eq!(g.layer(0).unwrap().nodes(), &[ids[0][1]]);
    assert_eq!(g.layer(1).unwrap().nodes(), &[ids[1][0], moved]);
    assert_eq!(g.node(moved).layer(), Some(1));
    assert!(g.layerless_nodes().is_empty());
}

#[test]
fn insert_into_layer_keeps_relative_order_of_others() {
    let (mut g, ids) = layered(&[3]);
    let extra = g.add_node(NodeType::LongEdge);
    g.insert_into_layer(extra, 0, 1).unwrap();
    assert_eq!(
        g.layer(0).unwrap().nodes(),
        &[ids[0][0], extra, ids[0][1], ids[0][2]]
    );

    g.remove_from_layer(ids[0][1]);
    assert_eq!(g.layer(0).unwrap().nodes(), &[ids[0][0], extra, ids[0][2]]);
    assert_eq!(g.layerless_nodes(), &[ids[0][1]]);
}

#[test]
fn inserting_a_layer_renumbers_later_nodes() {
    let (mut g, ids) = layered(&[1, 1]);
    g.insert_layer(1).unwrap();
    assert_eq!(g.layer_count(), 3);
    assert_eq!(g.node(ids[0][0]).layer(), Some(0));
    assert_eq!(g.node(ids[1][0]).layer(), Some(2));
    assert!(g.layer(1).unwrap().is_empty());
}

#[test]
fn removing_a_layer_makes_its_nodes_layerless() {
    let (mut g, ids) = layered(&[1, 2, 1]);
    let removed = g.remove_layer(1).unwrap();
    assert_eq!(removed, ids[1]);
    assert_eq!(g.layerless_nodes(), ids[1].as_slice());
    assert_eq!(g.node(ids[2][0]).layer(), Some(1));
    for n in &ids[1] {
        assert_eq!(g.node(*n).layer(), None);
    }
}

#[test]
fn layer_index_errors_are_reported() {
    let (mut g, ids) = layered(&[1]);
    assert_eq!(
        g.append_to_layer(ids[0][0], 4),
        Err(GraphError::LayerOutOfBounds { index: 4, len: 1 })
    );
    assert_eq!(
        g.insert_layer(3),
        Err(GraphError::LayerOutOfBounds { index: 3, len: 1 })
    );
}

#[test]
fn reorder_layer_requires_a_permutation() {
    let (mut g, ids) = layered(&[3]);
    let l = &ids[0];
    g.reorder_layer(0, vec![l[2], l[0], l[1]]).unwrap();
    assert_eq!(g.layer(0).unwrap().nodes(), &[l[2], l[0], l[1]]);

    assert_eq!(
        g.reorder_layer(0, vec![l[0], l[1]]),
        Err(GraphError::NotAPermutation { layer: 0 })
    );
}

#[test]
fn remove_empty_layers_compacts_indices() {
    let (mut g, ids) = layered(&[1, 0, 1, 0]);
    assert_eq!(g.remove_empty_layers(), 2);
    assert_eq!(g.layer_count(), 2);
    assert_eq!(g.node(ids[2][0]).layer(), Some(1));
}

#[test]
fn edges_connect_ports_and_can_be_reversed() {
    let mut g = LGraph::new();
    let a = g.add_node(NodeType::Normal);
    let b = g.add_node(NodeType::Normal);
    let pa = g.add_port(a, PortSide::East);
    let pb = g.add_port(b, PortSide::West);
    let e = g.add_edge(pa, pb);

    assert_eq!(g.outgoing_edges(a), vec![e]);
    assert_eq!(g.incoming_edges(b), vec![e]);
    assert_eq!(g.edge_source_node(e), a);

    g.reverse_edge(e);
    assert_eq!(g.edge_source_node(e), b);
    assert_eq!(g.edge_target_node(e), a);
    assert_eq!(g.outgoing_edges(b), vec![e]);
    assert!(g.outgoing_edges(a).is_empty());
}

#[test]
fn removing_a_node_drops_its_edges() {
    let mut g = LGraph::new();
    let a = g.add_node(NodeType::Normal);
    let b = g.add_node(NodeType::LongEdge);
    let c = g.add_node(NodeType::Normal);
    let pa = g.add_port(a, PortSide::East);
    let pb_in = g.add_port(b, PortSide::West);
    let pb_out = g.add_port(b, PortSide::East);
    let pc = g.add_port(c, PortSide::West);
    g.add_edge(pa, pb_in);
    g.add_edge(pb_out, pc);

    g.remove_node(b).unwrap();
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.node_count(), 2);
    assert!(g.node(b).is_removed());
    assert!(g.outgoing_edges(a).is_empty());
    assert_eq!(g.remove_node(b), Err(GraphError::RemovedElement));
}
