//! Merge sort, top-down and bottom-up.
//!
//! Both share one merge routine: each comparison is a record, tail reads are
//! batched into the copy-back, and the copy-back writes one element per
//! record. Ties take from the left run, so both variants are stable.

use std::cmp::Ordering;

use crate::record::{Operation, active, boundary};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Merge the sorted runs `lo..mid` and `mid..hi` through `aux`.
fn merge(t: &mut ArrayTracker, aux: &mut [u32], lo: usize, mid: usize, hi: usize) {
    let (mut i, mut j, mut k) = (lo, mid, lo);
    while i < mid && j < hi {
        let a = t.get(i);
        let b = t.get(j);
        let ord = t.compare_values(a, b);
        t.emit(Operation::Compare, vec![active([i, j]), boundary([lo, hi - 1])]);
        if ord == Ordering::Greater {
            aux[k] = b;
            j += 1;
        } else {
            aux[k] = a;
            i += 1;
        }
        k += 1;
    }
    for p in (i..mid).chain(j..hi) {
        aux[k] = t.get(p);
        k += 1;
    }
    for (p, &v) in aux.iter().enumerate().take(hi).skip(lo) {
        t.set(p, v);
        t.emit(Operation::Set, vec![active([p]), boundary([lo, hi - 1])]);
    }
}

// ---------------------------------------------------------------------------
// Top-down
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortingStrategy for MergeSort {
    fn key(&self) -> &'static str {
        "top-down-merge-sort"
    }

    fn name(&self) -> &'static str {
        "Top-Down Merge Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        let n = values.len();
        SortRun::generator(
            values,
            TopDown {
                tasks: vec![Task::Split(0, n)],
                aux: vec![0; n],
            },
        )
    }
}

enum Task {
    Split(usize, usize),
    Merge(usize, usize, usize),
}

struct TopDown {
    tasks: Vec<Task>,
    aux: Vec<u32>,
}

impl SortMachine for TopDown {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let Some(task) = self.tasks.pop() else {
            return Progress::Done;
        };
        match task {
            Task::Split(lo, hi) if hi - lo >= 2 => {
                // odd runs put the extra element on the left
                let mid = lo + (hi - lo).div_ceil(2);
                self.tasks.push(Task::Merge(lo, mid, hi));
                self.tasks.push(Task::Split(mid, hi));
                self.tasks.push(Task::Split(lo, mid));
            }
            Task::Split(..) => {}
            Task::Merge(lo, mid, hi) => merge(t, &mut self.aux, lo, mid, hi),
        }
        Progress::Continue
    }
}

// ---------------------------------------------------------------------------
// Bottom-up
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct BottomUpMergeSort;

impl SortingStrategy for BottomUpMergeSort {
    fn key(&self) -> &'static str {
        "bottom-up-merge-sort"
    }

    fn name(&self) -> &'static str {
        "Bottom-Up Merge Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        let n = values.len();
        SortRun::generator(
            values,
            BottomUp {
                width: 1,
                lo: 0,
                aux: vec![0; n],
            },
        )
    }
}

struct BottomUp {
    width: usize,
    lo: usize,
    aux: Vec<u32>,
}

impl SortMachine for BottomUp {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let n = t.len();
        if self.width >= n {
            return Progress::Done;
        }
        let mid = self.lo + self.width;
        if mid >= n {
            self.width *= 2;
            self.lo = 0;
            return Progress::Continue;
        }
        let hi = (mid + self.width).min(n);
        merge(t, &mut self.aux, self.lo, mid, hi);
        self.lo = hi;
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_counts_on_small_input() {
        let (records, out) = MergeSort
            .generator(vec![3, 1, 2], &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![1, 2, 3]);
        // [3 1] [2]: one compare for (3,1), then two for [1 3] vs [2].
        assert_eq!(out.totals.comparisons, 3);
        assert_eq!(out.totals.swaps, 0);
        // Every write lands in its own Set record.
        let sets = records.iter().filter(|r| r.operation == Operation::Set).count();
        assert_eq!(sets, 5);
    }

    #[test]
    fn top_down_splits_larger_half_left() {
        let (records, _) = MergeSort
            .generator(vec![5, 4, 3, 2, 1], &SortOptions::default())
            .run_to_end()
            .unwrap();
        let mut merged: Vec<Vec<usize>> = records
            .iter()
            .filter(|r| r.operation == Operation::Compare)
            .map(|r| r.highlights[1].indices.clone())
            .collect();
        merged.dedup();
        assert_eq!(merged, vec![vec![0, 1], vec![0, 2], vec![3, 4], vec![0, 4]]);
    }

    #[test]
    fn variants_agree_with_duplicates() {
        let values = vec![5, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let mut expected = values.clone();
        expected.sort();
        for s in [&MergeSort as &dyn SortingStrategy, &BottomUpMergeSort] {
            let (_, out) = s.generator(values.clone(), &SortOptions::default()).run_to_end().unwrap();
            assert_eq!(out.values, expected, "{}", s.key());
        }
    }

    #[test]
    fn bottom_up_handles_odd_tails() {
        let (_, out) = BottomUpMergeSort
            .generator(vec![7, 6, 5, 4, 3, 2, 1], &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
