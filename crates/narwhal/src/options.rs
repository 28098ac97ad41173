//! Layout options.
//!
//! `LayeredOptions` is what callers hand to [`crate::LayeredLayout`]. It deserializes from
//! camelCase JSON with every field optional:
//!
//! ```json
//! {
//!   "mode": "interactive",
//!   "crossingMinimization": "barycenter",
//!   "spacing": {
//!     "nodeNode": 30,
//!     "overrides": [{ "current": "longEdge", "previous": "normal", "value": 5 }]
//!   }
//! }
//! ```

use crate::graph::{LGraph, NodeType, PropertyHolder};
use crate::p1cycles::CycleBreakingStrategy;
use crate::p2layers::LayeringStrategy;
use crate::p3order::CrossingMinimizationStrategy;
use crate::p4nodes::NodePlacementStrategy;
use crate::p5edges::EdgeRoutingStrategy;
use crate::phase::{LayoutPhase, Phase};
use crate::properties::SPACINGS;
use crate::spacing::Spacings;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Selects the default strategy of every phase slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutMode {
    /// Ignore existing coordinates.
    #[default]
    FromScratch,
    /// Keep the existing arrangement wherever the spacing rules allow it.
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayeredOptions {
    pub mode: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_breaking: Option<CycleBreakingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layering: Option<LayeringStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossing_minimization: Option<CrossingMinimizationStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_placement: Option<NodePlacementStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_routing: Option<EdgeRoutingStrategy>,
    pub spacing: SpacingOptions,
}

impl LayeredOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        let options: LayeredOptions = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.spacing;
        check_spacing("spacing.nodeNode", s.node_node)?;
        check_spacing("spacing.edgeNode", s.edge_node)?;
        check_spacing("spacing.edgeEdge", s.edge_edge)?;
        check_spacing("spacing.nodeNodeBetweenLayers", s.node_node_between_layers)?;
        for o in &s.overrides {
            check_spacing("spacing.overrides", o.value)?;
        }
        Ok(())
    }

    /// The strategies of the mode, with per-slot overrides applied.
    pub fn strategies(&self) -> PhaseStrategies {
        let base = PhaseStrategies::for_mode(self.mode);
        PhaseStrategies {
            cycle_breaking: self.cycle_breaking.unwrap_or(base.cycle_breaking),
            layering: self.layering.unwrap_or(base.layering),
            crossing_minimization: self
                .crossing_minimization
                .unwrap_or(base.crossing_minimization),
            node_placement: self.node_placement.unwrap_or(base.node_placement),
            edge_routing: self.edge_routing.unwrap_or(base.edge_routing),
        }
    }

    /// Writes the graph-level properties these options control.
    pub fn apply(&self, graph: &mut LGraph) -> Result<()> {
        self.validate()?;
        graph.set_property(&SPACINGS, Spacings::from_options(&self.spacing));
        Ok(())
    }
}

fn check_spacing(option: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidOption {
            option,
            message: format!("expected a finite, non-negative spacing, got {value}"),
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacingOptions {
    /// Between two normal nodes of one layer.
    pub node_node: f64,
    /// Between a normal node and a dummy of one layer.
    pub edge_node: f64,
    /// Between two dummies of one layer.
    pub edge_edge: f64,
    /// Between adjacent layers.
    pub node_node_between_layers: f64,
    /// Ordered `(current, previous)` pairs that differ from the defaults above.
    pub overrides: Vec<SpacingOverride>,
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self {
            node_node: 20.0,
            edge_node: 10.0,
            edge_edge: 10.0,
            node_node_between_layers: 20.0,
            overrides: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingOverride {
    #[serde(with = "NodeTypeDef")]
    pub current: NodeType,
    #[serde(with = "NodeTypeDef")]
    pub previous: NodeType,
    pub value: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "NodeType", rename_all = "camelCase")]
enum NodeTypeDef {
    Normal,
    LongEdge,
    ExternalPort,
    NorthSouthPort,
    Label,
}

/// One strategy per phase slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseStrategies {
    pub cycle_breaking: CycleBreakingStrategy,
    pub layering: LayeringStrategy,
    pub crossing_minimization: CrossingMinimizationStrategy,
    pub node_placement: NodePlacementStrategy,
    pub edge_routing: EdgeRoutingStrategy,
}

impl PhaseStrategies {
    pub fn for_mode(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::FromScratch => Self::default(),
            LayoutMode::Interactive => Self {
                cycle_breaking: CycleBreakingStrategy::Interactive,
                layering: LayeringStrategy::Interactive,
                crossing_minimization: CrossingMinimizationStrategy::Interactive,
                node_placement: NodePlacementStrategy::Interactive,
                edge_routing: EdgeRoutingStrategy::Polyline,
            },
        }
    }

    /// Label of the strategy selected for `phase`.
    pub fn name(&self, phase: Phase) -> &'static str {
        match phase {
            Phase::CycleBreaking => self.cycle_breaking.name(),
            Phase::Layering => self.layering.name(),
            Phase::CrossingMinimization => self.crossing_minimization.name(),
            Phase::NodePlacement => self.node_placement.name(),
            Phase::EdgeRouting => self.edge_routing.name(),
        }
    }

    pub fn create(&self, phase: Phase) -> Box<dyn LayoutPhase> {
        match phase {
            Phase::CycleBreaking => self.cycle_breaking.create(),
            Phase::Layering => self.layering.create(),
            Phase::CrossingMinimization => self.crossing_minimization.create(),
            Phase::NodePlacement => self.node_placement.create(),
            Phase::EdgeRouting => self.edge_routing.create(),
        }
    }
}
