//! Counting and pigeonhole sort.
//!
//! Both read the array once (one `Inspect` record per read), tally the keys,
//! then write every slot back with one `Set` record per write. The tally is a
//! dense table over `min..=max` while that span stays within a few slots per
//! element, and an ordered map of the keys actually present beyond that.

use std::collections::BTreeMap;

use crate::record::{Operation, active, boundary};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

/// Dense tables may hold at most this many slots per element.
const DENSE_SLOTS_PER_ELEMENT: u64 = 4;

/// Read every element, recording each read.
fn scan(t: &mut ArrayTracker) -> Vec<u32> {
    (0..t.len())
        .map(|i| {
            let v = t.get(i);
            t.emit(Operation::Inspect, vec![active([i])]);
            v
        })
        .collect()
}

fn span(values: &[u32]) -> Option<(u32, u32)> {
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;
    Some((min, max))
}

/// Per-key counters.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Tally {
    Dense { min: u32, slots: Vec<usize> },
    Sparse(BTreeMap<u32, usize>),
}

impl Tally {
    /// Count the occurrences of each key; `None` for an empty input.
    fn count(values: &[u32]) -> Option<Tally> {
        let (min, max) = span(values)?;
        let width = u64::from(max - min) + 1;
        let mut tally = if width <= DENSE_SLOTS_PER_ELEMENT * values.len() as u64 {
            Tally::Dense {
                min,
                slots: vec![0; width as usize],
            }
        } else {
            Tally::Sparse(BTreeMap::new())
        };
        for &v in values {
            *tally.slot(v) += 1;
        }
        Some(tally)
    }

    fn slot(&mut self, key: u32) -> &mut usize {
        match self {
            Tally::Dense { min, slots } => &mut slots[(key - *min) as usize],
            Tally::Sparse(map) => map.entry(key).or_insert(0),
        }
    }

    /// Turn counts into the first output slot of each key.
    fn prefix_sums(&mut self) {
        let mut start = 0;
        let mut bump = |slot: &mut usize| {
            let count = *slot;
            *slot = start;
            start += count;
        };
        match self {
            Tally::Dense { slots, .. } => slots.iter_mut().for_each(&mut bump),
            Tally::Sparse(map) => map.values_mut().for_each(&mut bump),
        }
    }

    /// Present keys with their counts, ascending.
    fn into_runs(self) -> Vec<(u32, usize)> {
        match self {
            Tally::Dense { min, slots } => slots
                .into_iter()
                .enumerate()
                .filter(|&(_, count)| count > 0)
                .map(|(offset, count)| (min + offset as u32, count))
                .collect(),
            Tally::Sparse(map) => map.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Counting sort
// ---------------------------------------------------------------------------

/// Stable counting sort: prefix sums give each key its first slot, and the
/// scanned copy is replayed in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSort;

impl SortingStrategy for CountingSort {
    fn key(&self) -> &'static str {
        "counting-sort"
    }

    fn name(&self) -> &'static str {
        "Counting Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Counting { copy: None })
    }
}

struct Counting {
    copy: Option<Vec<u32>>,
}

impl SortMachine for Counting {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let Some(copy) = self.copy.take() else {
            self.copy = Some(scan(t));
            return Progress::Continue;
        };
        let Some(mut next) = Tally::count(&copy) else {
            return Progress::Done;
        };
        next.prefix_sums();
        for v in copy {
            let slot = next.slot(v);
            let i = *slot;
            *slot += 1;
            t.set(i, v);
            t.emit(Operation::Set, vec![active([i])]);
        }
        Progress::Done
    }
}

// ---------------------------------------------------------------------------
// Pigeonhole sort
// ---------------------------------------------------------------------------

/// Pigeonhole sort: one hole per key, emptied in key order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PigeonholeSort;

impl SortingStrategy for PigeonholeSort {
    fn key(&self) -> &'static str {
        "pigeonhole-sort"
    }

    fn name(&self) -> &'static str {
        "Pigeonhole Sort"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Pigeonhole { holes: None })
    }
}

struct Pigeonhole {
    holes: Option<Vec<(u32, usize)>>,
}

impl SortMachine for Pigeonhole {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let Some(holes) = self.holes.take() else {
            let Some(tally) = Tally::count(&scan(t)) else {
                return Progress::Done;
            };
            self.holes = Some(tally.into_runs());
            return Progress::Continue;
        };
        let mut i = 0;
        for (key, count) in holes {
            let start = i;
            for _ in 0..count {
                t.set(i, key);
                t.emit(Operation::Set, vec![active([i]), boundary([start])]);
                i += 1;
            }
        }
        Progress::Done
    }
}
