use std::ops::Range;

use super::insertion::insertion_sort_range;
use crate::record::{Operation, active, boundary};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Target number of elements per bucket.
const DENSITY: usize = 4;

/// Bucket sort: scatter by normalized key into `n / 4` buckets, gather them
/// back in order, then insertion-sort each bucket in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct BucketSort;

impl SortingStrategy for BucketSort {
    fn key(&self) -> &'static str {
        "bucket-sort"
    }

    fn name(&self) -> &'static str {
        "Bucket Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Bucket { pending: None })
    }
}

struct Bucket {
    /// Gathered buckets still to be sorted, last one first.
    pending: Option<Vec<Range<usize>>>,
}

impl Bucket {
    fn scatter_gather(t: &mut ArrayTracker) -> Vec<Range<usize>> {
        let n = t.len();
        let mut copy = Vec::with_capacity(n);
        for i in 0..n {
            copy.push(t.get(i));
            t.emit(Operation::Inspect, vec![active([i])]);
        }
        let (Some(&min), Some(&max)) = (copy.iter().min(), copy.iter().max()) else {
            return Vec::new();
        };
        if n <= 1 || min == max {
            return Vec::new();
        }

        let count = (n / DENSITY).max(1);
        let width = u64::from(max - min) + 1;
        let mut buckets = vec![Vec::new(); count];
        for v in copy {
            let b = (u64::from(v - min) * count as u64 / width) as usize;
            buckets[b].push(v);
        }

        let mut ranges = Vec::with_capacity(count);
        let mut i = 0;
        for bucket in buckets {
            let start = i;
            for v in bucket {
                t.set(i, v);
                t.emit(Operation::Set, vec![active([i]), boundary([start])]);
                i += 1;
            }
            if i - start > 1 {
                ranges.push(start..i);
            }
        }
        ranges.reverse();
        ranges
    }
}

impl SortMachine for Bucket {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let pending = self.pending.get_or_insert_with(|| Self::scatter_gather(t));
        match pending.pop() {
            Some(range) => {
                insertion_sort_range(t, range);
                Progress::Continue
            }
            None => Progress::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_with_duplicates_and_spread() {
        let values = vec![90, 3, 47, 3, 15, 88, 61, 0, 29, 47, 72, 5];
        let mut expected = values.clone();
        expected.sort_unstable();
        let (_, out) = BucketSort
            .generator(values, &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, expected);
    }

    #[test]
    fn constant_array_is_only_read() {
        let (records, out) = BucketSort
            .generator(vec![4; 6], &SortOptions::default())
            .run_to_end()
            .unwrap();
        assert_eq!(out.values, vec![4; 6]);
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.operation == Operation::Inspect));
    }
}
