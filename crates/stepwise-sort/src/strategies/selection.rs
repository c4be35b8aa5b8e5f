use std::cmp::Ordering;

use crate::record::{Operation, active, marker};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Selection sort: find the minimum of the unsorted tail, swap it into place.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortingStrategy for SelectionSort {
    fn key(&self) -> &'static str {
        "selection-sort"
    }

    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Selection { i: 0 })
    }
}

struct Selection {
    i: usize,
}

impl SortMachine for Selection {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let n = t.len();
        let i = self.i;
        if i + 1 >= n {
            return Progress::Done;
        }
        let mut min = i;
        for j in i + 1..n {
            let ord = t.compare(j, min);
            t.emit(Operation::Compare, vec![active([min, j]), marker([i])]);
            if ord == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            t.swap(i, min);
            t.emit(Operation::Swap, vec![active([i, min])]);
        }
        self.i += 1;
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_at_most_n_minus_one_times() {
        let (_, out) = SelectionSort
            .generator(vec![5, 4, 3, 2, 1], &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(out.totals.comparisons, 10);
        assert_eq!(out.totals.swaps, 2);
    }
}
