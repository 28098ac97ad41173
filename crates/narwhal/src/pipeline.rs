//! The layout pipeline.
//!
//! A [`Pipeline`] runs the five main phases in order and weaves in the intermediate processors
//! the selected phases ask for. Its life cycle is
//! `Unconfigured -> Assembled -> Running -> Done`, with `Failed` reachable from assembly and
//! from any step. A pipeline runs once.

use crate::graph::{LGraph, PropertyHolder};
use crate::intermediate::IntermediateProcessor;
use crate::options::{LayeredOptions, PhaseStrategies};
use crate::phase::{LayoutPhase, LayoutProcessor, Phase};
use crate::processing::{ProcessingConfiguration, ProcessingSlot};
use crate::progress::ProgressMonitor;
use crate::properties::SPACINGS;
use crate::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Unconfigured,
    Assembled,
    Running,
    Done,
    Failed,
}

/// Identity of one step of an assembled pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Phase {
        phase: Phase,
        name: &'static str,
    },
    Processor {
        slot: ProcessingSlot,
        processor: IntermediateProcessor,
    },
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepId::Phase { phase, name } => write!(f, "{phase}: {name}"),
            StepId::Processor { slot, processor } => write!(f, "{slot}: {}", processor.name()),
        }
    }
}

enum Runner {
    Phase(Box<dyn LayoutPhase>),
    Processor(Box<dyn LayoutProcessor>),
}

impl Runner {
    fn work_units(&self) -> f64 {
        match self {
            Runner::Phase(p) => p.work_units(),
            Runner::Processor(p) => p.work_units(),
        }
    }

    fn process(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        match self {
            Runner::Phase(p) => p.process(graph, monitor),
            Runner::Processor(p) => p.process(graph, monitor),
        }
    }
}

struct Step {
    id: StepId,
    runner: Runner,
}

pub struct Pipeline {
    strategies: PhaseStrategies,
    state: PipelineState,
    steps: Vec<Step>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("strategies", &self.strategies)
            .field("state", &self.state)
            .field("steps", &self.steps())
            .finish()
    }
}

impl Pipeline {
    pub fn new(strategies: PhaseStrategies) -> Self {
        Self {
            strategies,
            state: PipelineState::Unconfigured,
            steps: Vec::new(),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn strategies(&self) -> &PhaseStrategies {
        &self.strategies
    }

    /// The execution list, empty until the pipeline is assembled.
    pub fn steps(&self) -> Vec<StepId> {
        self.steps.iter().map(|s| s.id).collect()
    }

    /// Builds the execution list for `graph`: for every main phase, the processors scheduled
    /// before it, the phase itself, then the processors scheduled after it.
    pub fn assemble(&mut self, graph: &LGraph) -> Result<()> {
        if self.state != PipelineState::Unconfigured {
            return Err(Error::InvalidState {
                action: "assemble",
                state: self.state,
            });
        }
        if !graph.has_property(&SPACINGS) {
            self.state = PipelineState::Failed;
            return Err(Error::Configuration { key: SPACINGS.id() });
        }

        let phases: Vec<(Phase, Box<dyn LayoutPhase>)> = Phase::ALL
            .into_iter()
            .map(|phase| (phase, self.strategies.create(phase)))
            .collect();

        let configuration = phases
            .iter()
            .filter_map(|(_, p)| p.processing_configuration(graph))
            .fold(ProcessingConfiguration::new(), |acc, c| acc.union(&c));

        let mut steps = Vec::with_capacity(phases.len() + configuration.len());
        for (phase, runner) in phases {
            push_processors(&mut steps, &configuration, ProcessingSlot::Before(phase));
            steps.push(Step {
                id: StepId::Phase {
                    phase,
                    name: self.strategies.name(phase),
                },
                runner: Runner::Phase(runner),
            });
            push_processors(&mut steps, &configuration, ProcessingSlot::After(phase));
        }

        self.steps = steps;
        self.state = PipelineState::Assembled;
        tracing::debug!(
            steps = self.steps.len(),
            processors = configuration.len(),
            "assembled layout pipeline"
        );
        Ok(())
    }

    /// Runs every step in order. The first failing step aborts the run; the graph keeps the
    /// changes made so far.
    pub fn run(&mut self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        if self.state != PipelineState::Assembled {
            return Err(Error::InvalidState {
                action: "run",
                state: self.state,
            });
        }
        self.state = PipelineState::Running;

        let total: f64 = self.steps.iter().map(|s| s.runner.work_units()).sum();
        monitor.begin("Layered layout", total);

        for step in &mut self.steps {
            let mut sub = monitor.sub_task(step.runner.work_units());
            tracing::debug!(step = %step.id, "running layout step");
            if let Err(err) = step.runner.process(graph, &mut sub) {
                self.state = PipelineState::Failed;
                tracing::debug!(step = %step.id, error = %err, "layout step failed");
                return Err(Error::StepFailed {
                    step: step.id.to_string(),
                    source: Box::new(err),
                });
            }
            sub.done();
        }

        monitor.done();
        self.state = PipelineState::Done;
        Ok(())
    }
}

fn push_processors(
    steps: &mut Vec<Step>,
    configuration: &ProcessingConfiguration,
    slot: ProcessingSlot,
) {
    for processor in configuration.processors(slot) {
        steps.push(Step {
            id: StepId::Processor { slot, processor },
            runner: Runner::Processor(processor.create()),
        });
    }
}

/// Lays out a graph with a given set of options.
#[derive(Debug, Clone, Default)]
pub struct LayeredLayout {
    options: LayeredOptions,
}

impl LayeredLayout {
    pub fn new(options: LayeredOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayeredOptions {
        &self.options
    }

    /// Applies the options to `graph`, then assembles and runs a fresh pipeline.
    pub fn layout(&self, graph: &mut LGraph, monitor: &mut ProgressMonitor) -> Result<()> {
        self.options.apply(graph)?;
        let mut pipeline = Pipeline::new(self.options.strategies());
        pipeline.assemble(graph)?;
        pipeline.run(graph, monitor)
    }
}
