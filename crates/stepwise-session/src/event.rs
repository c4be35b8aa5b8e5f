//! What a session reports back to its caller.

use stepwise_core::Error;
use stepwise_paths::{Path, Snapshot, Vertex};
use stepwise_sort::{Counts, Highlight, StepRecord};

/// One resume of the live generator, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A search closed one more vertex.
    Visited(Snapshot),
    /// A sort performed one step.
    Step(StepRecord),
    /// The verification sweep checked one pair.
    Sweep(StepRecord),
    PathFound(Path),
    NoPath,
    /// A sort finished with these totals.
    Sorted(Counts),
    Swept {
        sorted: bool,
        first_inversion: Option<usize>,
    },
    /// The terminals moved under a running search; the run was dropped.
    Invalidated,
    Failed(Error),
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PathFound { vertices: usize, cost: f64 },
    NoPath,
    Sorted,
    Swept { sorted: bool },
    Failed(Error),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    Finished(Outcome),
}

impl Status {
    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running)
    }
}

/// Which generator a session is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Searching,
    Sorting,
    Sweeping,
}

/// Accumulated run statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Resumes that yielded.
    pub steps: u64,
    /// Vertices closed by the current search.
    pub visited: usize,
    /// Sort operation totals; the sweep is not counted.
    pub counts: Counts,
}

/// Visual side effects of the current or last run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Closed vertices in closing order.
    pub visited: Vec<Vertex>,
    pub path: Vec<Vertex>,
    pub path_cost: Option<f64>,
    /// Highlights of the latest sort or sweep record.
    pub highlights: Vec<Highlight>,
}

impl Overlay {
    pub fn clear(&mut self) {
        *self = Overlay::default();
    }
}
