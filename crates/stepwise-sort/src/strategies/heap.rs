//! Heap sort over an array-backed binary max-heap.

use std::cmp::Ordering;
use std::ops::Range;

use crate::record::{Operation, active, marker};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Restore the heap property below `root` in the heap of `len` elements
/// stored from `lo`.
fn sift_down(t: &mut ArrayTracker, lo: usize, mut root: usize, len: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len {
            let ord = t.compare(lo + child, lo + child + 1);
            t.emit(
                Operation::Compare,
                vec![active([lo + child, lo + child + 1]), marker([lo + root])],
            );
            if ord == Ordering::Less {
                child += 1;
            }
        }
        let ord = t.compare(lo + root, lo + child);
        t.emit(Operation::Compare, vec![active([lo + root, lo + child])]);
        if ord != Ordering::Less {
            return;
        }
        t.swap(lo + root, lo + child);
        t.emit(Operation::Swap, vec![active([lo + root, lo + child])]);
        root = child;
    }
}

/// Move the heap maximum to `lo + end` and shrink the heap.
fn extract(t: &mut ArrayTracker, lo: usize, end: usize) {
    t.swap(lo, lo + end);
    t.emit(Operation::Swap, vec![active([lo, lo + end]), marker([lo + end])]);
    sift_down(t, lo, 0, end);
}

/// Heap sort of one range, run to completion in a single chunk.
pub(crate) fn heap_sort_range(t: &mut ArrayTracker, range: Range<usize>) {
    let (lo, n) = (range.start, range.len());
    for root in (0..n / 2).rev() {
        sift_down(t, lo, root, n);
    }
    for end in (1..n).rev() {
        extract(t, lo, end);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortingStrategy for HeapSort {
    fn key(&self) -> &'static str {
        "heap-sort"
    }

    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        let n = values.len();
        SortRun::generator(values, Heap { n, phase: Phase::Build(n / 2) })
    }
}

enum Phase {
    /// Roots `0..k` still need a sift.
    Build(usize),
    /// The heap occupies `0..=end`.
    Extract(usize),
    Finish,
}

struct Heap {
    n: usize,
    phase: Phase,
}

impl SortMachine for Heap {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        match self.phase {
            Phase::Build(0) => self.phase = Phase::Extract(self.n.saturating_sub(1)),
            Phase::Build(k) => {
                sift_down(t, 0, k - 1, self.n);
                self.phase = Phase::Build(k - 1);
            }
            Phase::Extract(0) => self.phase = Phase::Finish,
            Phase::Extract(end) => {
                extract(t, 0, end);
                self.phase = Phase::Extract(end - 1);
            }
            Phase::Finish => {
                if self.n > 0 {
                    t.emit(Operation::Inspect, vec![marker([0])]);
                }
                return Progress::Done;
            }
        }
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_yields_one_marker_record() {
        let (records, out) = HeapSort
            .generator(vec![1], &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![1]);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.operation, Operation::Inspect);
        assert_eq!(r.swap_count, 0);
        assert_eq!(r.comparison_count, 0);
        assert!(!r.highlights.is_empty());
        assert_eq!(r.toned_indices().count(), 0);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let (records, out) = HeapSort
            .generator(Vec::new(), &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert!(records.is_empty());
        assert!(out.values.is_empty());
    }

    #[test]
    fn machine_and_range_helper_agree() {
        let values = vec![6, 2, 9, 4, 4, 1, 8, 3];
        let (_, out) = HeapSort
            .generator(values.clone(), &SortOptions::default())
            .run_to_end()
            .unwrap();
        let mut t = ArrayTracker::new(values);
        heap_sort_range(&mut t, 0..8);
        assert_eq!(t.values(), out.values.as_slice());
        assert_eq!(out.values, vec![1, 2, 3, 4, 4, 6, 8, 9]);
        assert_eq!(t.totals().comparisons, out.totals.comparisons);
    }

    #[test]
    fn range_helper_respects_offset() {
        let mut t = ArrayTracker::new(vec![0, 5, 3, 4, 1, 0]);
        heap_sort_range(&mut t, 1..5);
        assert_eq!(t.values(), &[0, 1, 3, 4, 5, 0]);
    }
}
