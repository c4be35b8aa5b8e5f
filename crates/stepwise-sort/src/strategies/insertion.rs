//! Insertion sort and its variants.
//!
//! - [`InsertionSort`] lifts the key out and shifts larger elements right.
//! - [`SwapInsertionSort`] sinks the key with adjacent swaps instead.
//! - [`BinaryInsertionSort`] binary-searches the insertion point first.

use std::cmp::Ordering;
use std::ops::Range;

use crate::record::{Operation, active, boundary, marker};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Sink the element at `i` into the sorted run `lo..i` by adjacent swaps.
pub(crate) fn sink(t: &mut ArrayTracker, lo: usize, i: usize) {
    let mut j = i;
    while j > lo {
        let ord = t.compare(j - 1, j);
        t.emit(Operation::Compare, vec![active([j - 1, j]), boundary([lo])]);
        if ord != Ordering::Greater {
            break;
        }
        t.swap(j - 1, j);
        t.emit(Operation::Swap, vec![active([j - 1, j])]);
        j -= 1;
    }
}

/// Swap-based insertion sort over `range`.
pub(crate) fn insertion_sort_range(t: &mut ArrayTracker, range: Range<usize>) {
    for i in range.start + 1..range.end {
        sink(t, range.start, i);
    }
}

// ---------------------------------------------------------------------------
// Shifting insertion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortingStrategy for InsertionSort {
    fn key(&self) -> &'static str {
        "insertion-sort"
    }

    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Shifting { i: 1 })
    }
}

struct Shifting {
    i: usize,
}

impl SortMachine for Shifting {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let i = self.i;
        if i >= t.len() {
            return Progress::Done;
        }
        let key = t.get(i);
        let mut j = i;
        while j > 0 {
            let ord = t.compare_value(j - 1, key);
            t.emit(Operation::Compare, vec![active([j - 1, j]), marker([i])]);
            if ord != Ordering::Greater {
                break;
            }
            t.shift(j - 1, j);
            t.emit(Operation::Shift, vec![active([j - 1, j])]);
            j -= 1;
        }
        if j != i {
            t.set(j, key);
            t.emit(Operation::Set, vec![active([j])]);
        }
        self.i += 1;
        Progress::Continue
    }
}

// ---------------------------------------------------------------------------
// Swapping insertion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct SwapInsertionSort;

impl SortingStrategy for SwapInsertionSort {
    fn key(&self) -> &'static str {
        "always-swap-insertion-sort"
    }

    fn name(&self) -> &'static str {
        "Insertion Sort (Swaps)"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Swapping { i: 1 })
    }
}

struct Swapping {
    i: usize,
}

impl SortMachine for Swapping {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        if self.i >= t.len() {
            return Progress::Done;
        }
        sink(t, 0, self.i);
        self.i += 1;
        Progress::Continue
    }
}

// ---------------------------------------------------------------------------
// Binary insertion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryInsertionSort;

impl SortingStrategy for BinaryInsertionSort {
    fn key(&self) -> &'static str {
        "binary-insertion-sort"
    }

    fn name(&self) -> &'static str {
        "Binary Insertion Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Binary { i: 1 })
    }
}

struct Binary {
    i: usize,
}

impl SortMachine for Binary {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let i = self.i;
        if i >= t.len() {
            return Progress::Done;
        }
        let key = t.get(i);
        // Upper bound keeps equal keys in input order.
        let (mut lo, mut hi) = (0, i);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let ord = t.compare_value(mid, key);
            t.emit(
                Operation::Compare,
                vec![active([mid]), marker([i]), boundary([lo, hi - 1])],
            );
            if ord == Ordering::Greater {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        for j in (lo + 1..=i).rev() {
            t.swap(j - 1, j);
            t.emit(Operation::Swap, vec![active([j - 1, j])]);
        }
        self.i += 1;
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &dyn SortingStrategy, values: Vec<u32>) -> (Vec<crate::StepRecord>, crate::SortOutcome) {
        s.generator(values, &SortOptions::default()).run_to_end().unwrap()
    }

    #[test]
    fn shifting_variant_writes_key_once() {
        let (records, out) = run(&InsertionSort, vec![2, 3, 1]);
        assert_eq!(out.values, vec![1, 2, 3]);
        assert_eq!(out.totals.swaps, 0);
        assert_eq!(out.totals.shifts, 2);
        let sets: Vec<_> = records.iter().filter(|r| r.operation == Operation::Set).collect();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].writes[0].index, 0);
        assert_eq!(sets[0].writes[0].value, 1);
    }

    #[test]
    fn swapping_variant_never_shifts() {
        let (_, out) = run(&SwapInsertionSort, vec![4, 3, 2, 1]);
        assert_eq!(out.values, vec![1, 2, 3, 4]);
        assert_eq!(out.totals.shifts, 0);
        assert_eq!(out.totals.swaps, 6);
        assert_eq!(out.totals.comparisons, 6);
    }

    #[test]
    fn binary_variant_compares_logarithmically() {
        let values: Vec<u32> = (0..16).rev().collect();
        let (_, out) = run(&BinaryInsertionSort, values);
        assert_eq!(out.values, (0..16).collect::<Vec<_>>());
        // Plain insertion would need 120 comparisons on reversed input.
        assert!(out.totals.comparisons < 60, "{}", out.totals.comparisons);
    }

    #[test]
    fn binary_variant_is_stable_on_ties() {
        let (records, out) = run(&BinaryInsertionSort, vec![1, 1]);
        assert_eq!(out.values, vec![1, 1]);
        assert!(records.iter().all(|r| r.operation == Operation::Compare));
    }

    #[test]
    fn range_helper_leaves_outside_untouched() {
        let mut t = ArrayTracker::new(vec![9, 3, 2, 1, 0]);
        insertion_sort_range(&mut t, 1..4);
        assert_eq!(t.values(), &[9, 1, 2, 3, 0]);
    }
}
