//! The verification sweep run after a sort.

use std::cmp::Ordering;

use stepwise_core::{Generator, Resume, Result, Stepper};

use crate::record::{Counts, Operation, StepRecord, active, marker};
use crate::tracker::ArrayTracker;

pub type SweepGenerator = Generator<StepRecord, SweepOutcome>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    pub sorted: bool,
    /// Index `i` of the first pair with `a[i] > a[i + 1]`.
    pub first_inversion: Option<usize>,
    pub totals: Counts,
}

/// Walk adjacent pairs left to right, one compare record per pair, marking
/// the verified prefix.
pub fn sweep(values: Vec<u32>) -> SweepGenerator {
    Generator::new(Sweep {
        tracker: ArrayTracker::new(values),
        next: 0,
        inversion: None,
    })
}

struct Sweep {
    tracker: ArrayTracker,
    next: usize,
    inversion: Option<usize>,
}

impl Stepper for Sweep {
    type Yield = StepRecord;
    type Return = SweepOutcome;

    fn resume(&mut self) -> Result<Resume<StepRecord, SweepOutcome>> {
        let i = self.next;
        if i + 1 >= self.tracker.len() {
            return Ok(Resume::Return(SweepOutcome {
                sorted: self.inversion.is_none(),
                first_inversion: self.inversion,
                totals: self.tracker.totals(),
            }));
        }
        let ord = self.tracker.compare(i, i + 1);
        if ord == Ordering::Greater && self.inversion.is_none() {
            self.inversion = Some(i);
        }
        let verified = match self.inversion {
            Some(at) => at + 1,
            None => i + 1,
        };
        self.tracker.emit(
            Operation::Compare,
            vec![marker((0..verified).collect::<Vec<_>>()), active([i + 1])],
        );
        self.next += 1;
        self.tracker
            .next_record()
            .map(Resume::Yield)
            .ok_or_else(|| stepwise_core::Invariant::ResumedAfterCompletion.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_array_sweeps_clean() {
        let (records, out) = sweep(vec![1, 2, 2, 5]).run_to_end().unwrap();
        assert_eq!(records.len(), 3);
        assert!(out.sorted);
        assert_eq!(out.first_inversion, None);
        assert_eq!(out.totals.comparisons, 3);
        assert_eq!(records[2].highlights[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn reports_first_inversion() {
        let (records, out) = sweep(vec![1, 3, 2, 4, 0]).run_to_end().unwrap();
        assert_eq!(records.len(), 4);
        assert!(!out.sorted);
        assert_eq!(out.first_inversion, Some(1));
        // The verified prefix stops growing at the inversion.
        assert_eq!(records[3].highlights[0].indices, vec![0, 1]);
    }

    #[test]
    fn trivial_arrays() {
        for v in [vec![], vec![9]] {
            let (records, out) = sweep(v).run_to_end().unwrap();
            assert!(records.is_empty());
            assert!(out.sorted);
        }
    }
}
