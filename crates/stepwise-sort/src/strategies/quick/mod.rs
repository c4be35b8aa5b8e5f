//! The quicksort family.
//!
//! Every variant is the same driver ([`Quick`]) over a different
//! [`Scheme`]. A scheme partitions one range and returns the sub-ranges that
//! still need sorting; the driver keeps those on an explicit stack and
//! partitions one range per chunk. Pivot choice is independent of the
//! scheme, see [`PivotRule`].

mod dual_pivot;
mod hoare;
mod lomuto;
mod lr;
mod pivot;
mod ternary;

use std::ops::Range;

pub use pivot::PivotRule;
pub(crate) use pivot::PivotSelector;

pub(crate) use lomuto::lomuto;

use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Partition scheme of a quicksort variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Lomuto,
    Hoare,
    /// Both scans run left to right.
    Ll,
    /// Scans run from both ends toward each other.
    Lr,
    /// Three-way split, both scans left to right.
    TernaryLl,
    /// Three-way split with equal keys parked at both ends.
    TernaryLr,
    /// Yaroslavskiy's two-pivot split.
    DualPivot,
}

impl Scheme {
    pub const ALL: [Scheme; 7] = [
        Scheme::Lomuto,
        Scheme::Hoare,
        Scheme::Ll,
        Scheme::Lr,
        Scheme::TernaryLl,
        Scheme::TernaryLr,
        Scheme::DualPivot,
    ];

    /// Partition `range` (at least two elements) and return the sub-ranges
    /// left to sort.
    pub(crate) fn partition(
        self,
        t: &mut ArrayTracker,
        pivots: &mut PivotSelector,
        range: Range<usize>,
    ) -> Vec<Range<usize>> {
        match self {
            Scheme::Lomuto => lomuto(t, pivots, range),
            Scheme::Hoare => hoare::hoare(t, pivots, range),
            Scheme::Ll => lr::ll(t, pivots, range),
            Scheme::Lr => lr::lr(t, pivots, range),
            Scheme::TernaryLl => ternary::ternary_ll(t, pivots, range),
            Scheme::TernaryLr => ternary::ternary_lr(t, pivots, range),
            Scheme::DualPivot => dual_pivot::yaroslavskiy(t, pivots, range),
        }
    }
}

/// A quicksort variant.
#[derive(Debug, Clone, Copy)]
pub struct QuickSort {
    pub scheme: Scheme,
}

impl QuickSort {
    pub const fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }
}

impl SortingStrategy for QuickSort {
    fn key(&self) -> &'static str {
        match self.scheme {
            Scheme::Lomuto => "lomuto-quick-sort",
            Scheme::Hoare => "hoare-quick-sort",
            Scheme::Ll => "quick-sort-ll",
            Scheme::Lr => "quick-sort-lr",
            Scheme::TernaryLl => "quick-sort-ternary-ll",
            Scheme::TernaryLr => "quick-sort-ternary-lr",
            Scheme::DualPivot => "dual-pivot-quick-sort",
        }
    }

    fn name(&self) -> &'static str {
        match self.scheme {
            Scheme::Lomuto => "Quick Sort (Lomuto)",
            Scheme::Hoare => "Quick Sort (Hoare)",
            Scheme::Ll => "Quick Sort (LL)",
            Scheme::Lr => "Quick Sort (LR)",
            Scheme::TernaryLl => "Quick Sort (Ternary LL)",
            Scheme::TernaryLr => "Quick Sort (Ternary LR)",
            Scheme::DualPivot => "Dual-Pivot Quick Sort",
        }
    }

    fn uses_pivot(&self) -> bool {
        true
    }

    fn generator(&self, values: Vec<u32>, options: &SortOptions) -> SortGenerator {
        let n = values.len();
        SortRun::generator(
            values,
            Quick {
                scheme: self.scheme,
                pivots: PivotSelector::new(options.pivot, options.seed),
                stack: vec![0..n],
            },
        )
    }
}

struct Quick {
    scheme: Scheme,
    pivots: PivotSelector,
    stack: Vec<Range<usize>>,
}

impl SortMachine for Quick {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let Some(range) = self.stack.pop() else {
            return Progress::Done;
        };
        if range.len() < 2 {
            return Progress::Continue;
        }
        let parts = self.scheme.partition(t, &mut self.pivots, range);
        self.stack
            .extend(parts.into_iter().rev().filter(|r| r.len() >= 2));
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort(scheme: Scheme, pivot: PivotRule, values: Vec<u32>) -> Vec<u32> {
        let opts = SortOptions { pivot, seed: 5 };
        let (_, out) = QuickSort::new(scheme).generator(values, &opts).run_to_end().unwrap();
        out.values
    }

    #[test]
    fn every_scheme_and_rule_sorts() {
        let inputs: Vec<Vec<u32>> = vec![
            vec![],
            vec![1],
            vec![2, 1],
            vec![3, 3, 3, 3],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![4, 1, 4, 2, 4, 3, 4, 1, 1],
            (0..40).map(|i| (i * 17 + 3) % 23).collect(),
        ];
        for scheme in Scheme::ALL {
            for pivot in PivotRule::ALL {
                for input in &inputs {
                    let mut expected = input.clone();
                    expected.sort_unstable();
                    assert_eq!(sort(scheme, pivot, input.clone()), expected, "{scheme:?} {pivot}");
                }
            }
        }
    }

    #[test]
    fn lomuto_with_last_pivot_counts() {
        let opts = SortOptions {
            pivot: PivotRule::Last,
            seed: 0,
        };
        let (records, out) = QuickSort::new(Scheme::Lomuto)
            .generator(vec![5, 3, 1, 4, 2], &opts)
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(out.totals.comparisons, 7);
        assert_eq!(out.totals.swaps, 5);
        assert_eq!(out.totals.accesses, 30);
        let swaps: u64 = records.iter().map(|r| r.swap_count).sum();
        assert_eq!(swaps, out.swap_calls);
    }

    #[test]
    fn ternary_schemes_finish_equal_runs_in_one_partition() {
        for scheme in [Scheme::TernaryLl, Scheme::TernaryLr] {
            let (_, out) = QuickSort::new(scheme)
                .generator(vec![7; 10], &SortOptions::default())
                .run_to_end()
                .unwrap();
            assert_eq!(out.values, vec![7; 10]);
            // One pass over the range, no recursion into equal keys.
            assert!(out.totals.comparisons <= 10, "{scheme:?} {}", out.totals.comparisons);
        }
    }
}
