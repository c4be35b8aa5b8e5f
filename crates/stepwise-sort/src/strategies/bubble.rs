use std::cmp::Ordering;

use crate::record::{Operation, active};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Bubble sort: repeated adjacent compare-and-swap passes, each one
/// settling the largest remaining element at the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortingStrategy for BubbleSort {
    fn key(&self) -> &'static str {
        "bubble-sort"
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Bubble { pass: 0 })
    }
}

struct Bubble {
    pass: usize,
}

impl SortMachine for Bubble {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let n = t.len();
        if self.pass + 1 >= n {
            return Progress::Done;
        }
        for j in 0..n - 1 - self.pass {
            let ord = t.compare(j, j + 1);
            t.emit(Operation::Compare, vec![active([j, j + 1])]);
            if ord == Ordering::Greater {
                t.swap(j, j + 1);
                t.emit(Operation::Swap, vec![active([j, j + 1])]);
            }
        }
        self.pass += 1;
        Progress::Continue
    }
}
