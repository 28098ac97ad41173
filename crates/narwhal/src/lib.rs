#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) graph layout.
//!
//! A layout run takes an [`graph::LGraph`] through five fixed phases: cycle breaking, layering,
//! crossing minimization, node placement and edge routing. Each phase slot has a from-scratch
//! and an interactive strategy; interactive strategies keep the coordinates the graph came in
//! with wherever the spacing rules allow. Phases may ask for intermediate processors to run
//! before or after any main phase; the [`Pipeline`] merges those requests and runs everything in
//! order.
//!
//! ```no_run
//! use narwhal::graph::{LGraph, NodeType, PortSide};
//! use narwhal::{LayeredLayout, LayeredOptions, ProgressMonitor};
//!
//! let mut graph = LGraph::new();
//! let a = graph.add_node(NodeType::Normal);
//! let b = graph.add_node(NodeType::Normal);
//! let out = graph.add_port(a, PortSide::East);
//! let inp = graph.add_port(b, PortSide::West);
//! graph.add_edge(out, inp);
//!
//! let mut monitor = ProgressMonitor::new();
//! LayeredLayout::new(LayeredOptions::default())
//!     .layout(&mut graph, &mut monitor)
//!     .unwrap();
//! ```

pub use narwhal_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
pub mod intermediate;
pub mod options;
pub mod p1cycles;
pub mod p2layers;
pub mod p3order;
pub mod p4nodes;
pub mod p5edges;
mod phase;
mod pipeline;
mod processing;
mod progress;
pub mod properties;
mod spacing;

pub use error::{Error, Result};
pub use intermediate::IntermediateProcessor;
pub use options::{LayeredOptions, LayoutMode, PhaseStrategies, SpacingOptions, SpacingOverride};
pub use phase::{LayoutPhase, LayoutProcessor, Phase};
pub use pipeline::{LayeredLayout, Pipeline, PipelineState, StepId};
pub use processing::{ProcessingConfiguration, ProcessingSlot};
pub use progress::{ProgressMonitor, TaskRecord};
pub use spacing::Spacings;
