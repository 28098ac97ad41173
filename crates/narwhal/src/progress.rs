//! Progress reporting.
//!
//! A root monitor covers the whole layout run. `sub_task(work)` hands out a child monitor that
//! owns `work` units of its parent; whatever the child reports is scaled into the root's
//! fraction. All monitors of one run share their state behind a mutex, so `worked` calls coming
//! from several threads are never lost.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub name: String,
    pub total_work: f64,
    pub depth: usize,
}

#[derive(Debug, Default)]
struct Shared {
    progress: f64,
    tasks: Vec<TaskRecord>,
}

#[derive(Debug)]
pub struct ProgressMonitor {
    shared: Arc<Mutex<Shared>>,
    name: Option<String>,
    total_work: f64,
    completed: f64,
    /// Fraction of the whole run this monitor accounts for.
    share: f64,
    depth: usize,
    started: Option<Instant>,
    closed: bool,
}

impl Default for ProgressMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressMonitor {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            name: None,
            total_work: 0.0,
            completed: 0.0,
            share: 1.0,
            depth: 0,
            started: None,
            closed: false,
        }
    }

    pub fn begin(&mut self, name: &str, total_work: f64) {
        tracing::debug!(task = name, total_work, depth = self.depth, "begin");
        self.name = Some(name.to_string());
        self.total_work = total_work.max(0.0);
        self.completed = 0.0;
        self.started = Some(Instant::now());
        self.lock().tasks.push(TaskRecord {
            name: name.to_string(),
            total_work: self.total_work,
            depth: self.depth,
        });
    }

    /// Reports `work` completed units of this task. Work beyond the declared total is ignored.
    pub fn worked(&mut self, work: f64) {
        if self.closed || self.total_work <= 0.0 || work <= 0.0 {
            return;
        }
        let work = work.min(self.total_work - self.completed);
        if work <= 0.0 {
            return;
        }
        self.completed += work;
        let delta = self.share * work / self.total_work;
        self.lock().progress += delta;
    }

    /// Creates a monitor for a subtask worth `work` units of this task. The units count as done
    /// for this monitor right away; the child reports its share as it progresses.
    pub fn sub_task(&mut self, work: f64) -> ProgressMonitor {
        let work = if self.total_work > 0.0 {
            work.clamp(0.0, self.total_work - self.completed)
        } else {
            0.0
        };
        let share = if self.total_work > 0.0 {
            self.share * work / self.total_work
        } else {
            0.0
        };
        self.completed += work;
        ProgressMonitor {
            shared: Arc::clone(&self.shared),
            name: None,
            total_work: 0.0,
            completed: 0.0,
            share,
            depth: self.depth + 1,
            started: None,
            closed: false,
        }
    }

    pub fn done(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        let remaining = if self.total_work > 0.0 {
            self.share * (self.total_work - self.completed) / self.total_work
        } else {
            self.share
        };
        self.completed = self.total_work;

        let depth = self.depth;
        let mut shared = self.lock();
        if depth == 0 {
            shared.progress = 1.0;
        } else {
            shared.progress = (shared.progress + remaining).min(1.0);
        }
        drop(shared);

        if let (Some(name), Some(started)) = (self.name.as_deref(), self.started) {
            tracing::debug!(
                task = name,
                depth,
                elapsed_us = started.elapsed().as_micros() as u64,
                "done"
            );
        }
    }

    pub fn is_done(&self) -> bool {
        self.closed
    }

    /// Overall progress of the run in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.lock().progress.clamp(0.0, 1.0)
    }

    /// Every `begin` call of the run so far, in call order.
    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.lock().tasks.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // A poisoned lock only means another monitor panicked mid-update; the counters are
        // still usable.
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }
}
