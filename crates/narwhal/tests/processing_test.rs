use narwhal::{IntermediateProcessor, Phase, ProcessingConfiguration, ProcessingSlot};

#[test]
fn union_deduplicates_the_same_step_in_the_same_slot() {
    let a = ProcessingConfiguration::new().before(
        Phase::NodePlacement,
        IntermediateProcessor::HierarchicalPortPosition,
    );
    let b = ProcessingConfiguration::new()
        .before(
            Phase::NodePlacement,
            IntermediateProcessor::HierarchicalPortPosition,
        )
        .after(Phase::EdgeRouting, IntermediateProcessor::LongEdgeJoiner);

    let merged = a.union(&b);
    assert_eq!(merged.len(), 2);
    let before_4: Vec<_> = merged
        .processors(ProcessingSlot::Before(Phase::NodePlacement))
        .collect();
    assert_eq!(before_4, vec![IntermediateProcessor::HierarchicalPortPosition]);
}

#[test]
fn first_slot_wins() {
    let config = ProcessingConfiguration::new()
        .before(Phase::CrossingMinimization, IntermediateProcessor::LongEdgeSplitter)
        .after(Phase::Layering, IntermediateProcessor::LongEdgeSplitter);
    assert_eq!(
        config.slot_of(IntermediateProcessor::LongEdgeSplitter),
        Some(ProcessingSlot::Before(Phase::CrossingMinimization))
    );
    assert_eq!(config.len(), 1);

    let other = ProcessingConfiguration::new()
        .after(Phase::Layering, IntermediateProcessor::LongEdgeSplitter);
    let merged = config.union(&other);
    assert_eq!(
        merged.slot_of(IntermediateProcessor::LongEdgeSplitter),
        Some(ProcessingSlot::Before(Phase::CrossingMinimization))
    );
}

#[test]
fn processors_run_in_declaration_order_within_a_slot() {
    let config = ProcessingConfiguration::new()
        .after(Phase::EdgeRouting, IntermediateProcessor::ReversedEdgeRestorer)
        .after(Phase::EdgeRouting, IntermediateProcessor::LongEdgeJoiner);
    let after_5: Vec<_> = config
        .processors(ProcessingSlot::After(Phase::EdgeRouting))
        .collect();
    assert_eq!(
        after_5,
        vec![
            IntermediateProcessor::LongEdgeJoiner,
            IntermediateProcessor::ReversedEdgeRestorer,
        ]
    );
}

#[test]
fn union_keeps_both_sides() {
    let a = ProcessingConfiguration::new()
        .after(Phase::EdgeRouting, IntermediateProcessor::ReversedEdgeRestorer);
    let b = ProcessingConfiguration::new()
        .before(Phase::CrossingMinimization, IntermediateProcessor::LongEdgeSplitter);
    let merged = a.union(&b);
    assert!(merged.contains(IntermediateProcessor::ReversedEdgeRestorer));
    assert!(merged.contains(IntermediateProcessor::LongEdgeSplitter));
    assert!(!merged.contains(IntermediateProcessor::HierarchicalPortPosition));
    assert_eq!(merged, b.union(&a));
    assert!(ProcessingConfiguration::new().is_empty());
}

#[test]
fn slots_order_before_after_by_phase() {
    let mut slots = vec![
        ProcessingSlot::After(Phase::NodePlacement),
        ProcessingSlot::Before(Phase::EdgeRouting),
        ProcessingSlot::Before(Phase::NodePlacement),
        ProcessingSlot::After(Phase::CycleBreaking),
    ];
    slots.sort();
    assert_eq!(
        slots,
        vec![
            ProcessingSlot::After(Phase::CycleBreaking),
            ProcessingSlot::Before(Phase::NodePlacement),
            ProcessingSlot::After(Phase::NodePlacement),
            ProcessingSlot::Before(Phase::EdgeRouting),
        ]
    );
    assert_eq!(
        ProcessingSlot::Before(Phase::NodePlacement).to_string(),
        "before phase 4"
    );
}

#[test]
fn processors_resolve_by_name() {
    for p in IntermediateProcessor::ALL {
        assert_eq!(IntermediateProcessor::from_name(p.name()), Some(p));
    }
    assert_eq!(IntermediateProcessor::from_name("no such step"), None);
}
