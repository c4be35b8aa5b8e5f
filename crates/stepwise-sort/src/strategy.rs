//! The sorting strategy contract and the runner driving every strategy.
//!
//! A strategy is an explicit state machine ([`SortMachine`]) that advances in
//! chunks: one pass, one insertion, one partition, one merge. Each chunk
//! routes its element touches through the [`ArrayTracker`] and emits records
//! into its queue; [`SortRun`] hands those records out one resume at a time,
//! so a paused run continues exactly where it stopped.

use stepwise_core::{Generator, Resume, Result, Stepper};

use crate::record::{Counts, StepRecord};
use crate::strategies::quick::PivotRule;
use crate::tracker::ArrayTracker;

/// Generator type produced by every sorting strategy.
pub type SortGenerator = Generator<StepRecord, SortOutcome>;

/// Run settings for strategies that need them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortOptions {
    /// Pivot choice for the quicksort family.
    pub pivot: PivotRule,
    /// Seed for randomized pivot selection.
    pub seed: u64,
}

/// Final value of a sorting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// The array after the run.
    pub values: Vec<u32>,
    /// Sum of the counts of all yielded records.
    pub totals: Counts,
    /// Calls made to the swap primitive.
    pub swap_calls: u64,
}

/// A pluggable sorting algorithm.
pub trait SortingStrategy {
    /// Stable registry key, e.g. `"bubble-sort"`.
    fn key(&self) -> &'static str;

    fn name(&self) -> &'static str;

    /// Whether the strategy consults [`SortOptions::pivot`].
    fn uses_pivot(&self) -> bool {
        false
    }

    /// Start sorting a copy of `values`.
    fn generator(&self, values: Vec<u32>, options: &SortOptions) -> SortGenerator;
}

/// Result of advancing a machine by one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    Continue,
    Done,
}

/// A sorting algorithm as a chunked state machine.
pub(crate) trait SortMachine {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress;
}

/// Adapts a [`SortMachine`] to the step protocol.
pub(crate) struct SortRun<M> {
    tracker: ArrayTracker,
    machine: M,
    finished: bool,
}

impl<M: SortMachine + 'static> SortRun<M> {
    pub(crate) fn generator(values: Vec<u32>, machine: M) -> SortGenerator {
        Generator::new(SortRun {
            tracker: ArrayTracker::new(values),
            machine,
            finished: false,
        })
    }
}

impl<M: SortMachine> Stepper for SortRun<M> {
    type Yield = StepRecord;
    type Return = SortOutcome;

    fn resume(&mut self) -> Result<Resume<StepRecord, SortOutcome>> {
        loop {
            if let Some(record) = self.tracker.next_record() {
                return Ok(Resume::Yield(record));
            }
            if self.finished {
                return Ok(Resume::Return(SortOutcome {
                    values: self.tracker.values().to_vec(),
                    totals: self.tracker.totals(),
                    swap_calls: self.tracker.swap_calls(),
                }));
            }
            if self.machine.advance(&mut self.tracker) == Progress::Done {
                self.tracker.settle();
                self.finished = true;
            }
        }
    }
}
