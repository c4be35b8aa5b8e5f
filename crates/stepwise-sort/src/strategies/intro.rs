use std::ops::Range;

use super::heap::heap_sort_range;
use super::insertion::insertion_sort_range;
use super::quick::{PivotSelector, lomuto};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Ranges shorter than this go straight to insertion sort.
const CUTOVER: usize = 16;

/// Intro-sort: Lomuto quicksort that hands small ranges to insertion sort
/// and falls back to heap sort once the depth budget of 2·⌊log₂ n⌋
/// partitions is spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntroSort;

impl SortingStrategy for IntroSort {
    fn key(&self) -> &'static str {
        "intro-sort"
    }

    fn name(&self) -> &'static str {
        "Intro Sort"
    }

    fn uses_pivot(&self) -> bool {
        true
    }

    fn generator(&self, values: Vec<u32>, options: &SortOptions) -> SortGenerator {
        let n = values.len();
        let stack = if n > 1 { vec![(0..n, 2 * n.ilog2())] } else { Vec::new() };
        SortRun::generator(
            values,
            Intro {
                pivots: PivotSelector::new(options.pivot, options.seed),
                stack,
            },
        )
    }
}

struct Intro {
    pivots: PivotSelector,
    stack: Vec<(Range<usize>, u32)>,
}

impl SortMachine for Intro {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let Some((range, depth)) = self.stack.pop() else {
            return Progress::Done;
        };
        if range.len() < CUTOVER {
            insertion_sort_range(t, range);
        } else if depth == 0 {
            log::trace!("intro-sort depth exhausted on {range:?}, heap sorting");
            heap_sort_range(t, range);
        } else {
            let parts = lomuto(t, &mut self.pivots, range);
            self.stack.extend(
                parts
                    .into_iter()
                    .rev()
                    .filter(|r| r.len() > 1)
                    .map(|r| (r, depth - 1)),
            );
        }
        Progress::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::quick::{PivotRule, QuickSort, Scheme};

    #[test]
    fn sorted_input_with_first_pivot_avoids_quadratic_blowup() {
        let values: Vec<u32> = (0..256).collect();
        let opts = SortOptions {
            pivot: PivotRule::First,
            seed: 0,
        };
        let (_, intro) = IntroSort.generator(values.clone(), &opts).run_to_end().unwrap();
        let (_, quick) = QuickSort::new(Scheme::Lomuto)
            .generator(values.clone(), &opts)
            .run_to_end()
            .unwrap();
        assert_eq!(intro.values, values);
        assert!(intro.totals.comparisons * 2 < quick.totals.comparisons);
    }

    #[test]
    fn small_input_is_pure_insertion() {
        let (_, out) = IntroSort
            .generator(vec![3, 2, 1], &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![1, 2, 3]);
        assert_eq!(out.totals.swaps, 3);
        assert_eq!(out.totals.shifts, 0);
    }
}
