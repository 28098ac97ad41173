//! Processing configurations: which intermediate processors run around which main phase.
//!
//! A configuration maps each of the ten slots (before/after phase 1..5) to a set of
//! processors. Within a slot processors run in their declaration order
//! (see [`IntermediateProcessor`]), so merging never reorders what is already there. A processor
//! lives in at most one slot per configuration: once placed, later requests for a different
//! slot are ignored.

use crate::intermediate::IntermediateProcessor;
use crate::phase::Phase;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingSlot {
    Before(Phase),
    After(Phase),
}

impl ProcessingSlot {
    pub fn phase(self) -> Phase {
        match self {
            ProcessingSlot::Before(p) | ProcessingSlot::After(p) => p,
        }
    }

    fn sort_key(self) -> (usize, u8) {
        match self {
            ProcessingSlot::Before(p) => (p.number(), 0),
            ProcessingSlot::After(p) => (p.number(), 1),
        }
    }
}

impl Ord for ProcessingSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for ProcessingSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ProcessingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingSlot::Before(p) => write!(f, "before {p}"),
            ProcessingSlot::After(p) => write!(f, "after {p}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingConfiguration {
    slots: BTreeMap<ProcessingSlot, BTreeSet<IntermediateProcessor>>,
}

impl ProcessingConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before(self, phase: Phase, processor: IntermediateProcessor) -> Self {
        self.with(ProcessingSlot::Before(phase), processor)
    }

    pub fn after(self, phase: Phase, processor: IntermediateProcessor) -> Self {
        self.with(ProcessingSlot::After(phase), processor)
    }

    pub fn with(mut self, slot: ProcessingSlot, processor: IntermediateProcessor) -> Self {
        match self.slot_of(processor) {
            Some(existing) if existing != slot => {
                tracing::warn!(
                    processor = processor.name(),
                    %existing,
                    requested = %slot,
                    "processor already scheduled in another slot; keeping the first"
                );
            }
            Some(_) => {}
            None => {
                self.slots.entry(slot).or_default().insert(processor);
            }
        }
        self
    }

    /// Union of both configurations. Slots of `self` take precedence for processors that the
    /// two configurations place differently.
    pub fn union(&self, other: &ProcessingConfiguration) -> ProcessingConfiguration {
        let mut merged = self.clone();
        for (&slot, processors) in &other.slots {
            for &p in processors {
                merged = merged.with(slot, p);
            }
        }
        merged
    }

    /// Processors scheduled in `slot`, in execution order.
    pub fn processors(
        &self,
        slot: ProcessingSlot,
    ) -> impl Iterator<Item = IntermediateProcessor> + '_ {
        self.slots.get(&slot).into_iter().flatten().copied()
    }

    pub fn slot_of(&self, processor: IntermediateProcessor) -> Option<ProcessingSlot> {
        self.slots
            .iter()
            .find(|(_, set)| set.contains(&processor))
            .map(|(&slot, _)| slot)
    }

    pub fn contains(&self, processor: IntermediateProcessor) -> bool {
        self.slot_of(processor).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
