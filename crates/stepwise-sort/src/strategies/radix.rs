//! Radix sorts in base 4.
//!
//! LSD makes one stable counting pass per digit, least significant first.
//! MSD distributes in place by the leading digit, then recurses into each
//! bucket on the next digit through an explicit task stack.

use crate::record::{Operation, active, boundary};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

const RADIX: u32 = 4;

/// Base-4 digits needed to write `max`, at least one.
fn digits(max: u32) -> u32 {
    let mut n = 1;
    let mut v = max / RADIX;
    while v > 0 {
        n += 1;
        v /= RADIX;
    }
    n
}

#[inline]
fn digit(v: u32, place: u32) -> usize {
    ((v / RADIX.pow(place)) % RADIX) as usize
}

// ---------------------------------------------------------------------------
// LSD
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct LsdRadixSort;

impl SortingStrategy for LsdRadixSort {
    fn key(&self) -> &'static str {
        "lsd-radix-sort"
    }

    fn name(&self) -> &'static str {
        "LSD Radix Sort (Base 4)"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Lsd { place: 0, passes: None })
    }
}

struct Lsd {
    place: u32,
    /// Known once the first pass has seen every element.
    passes: Option<u32>,
}

impl SortMachine for Lsd {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let n = t.len();
        if n == 0 || self.passes.is_some_and(|p| self.place >= p) {
            return Progress::Done;
        }
        let mut copy = Vec::with_capacity(n);
        let mut counts = [0usize; RADIX as usize];
        for i in 0..n {
            let v = t.get(i);
            counts[digit(v, self.place)] += 1;
            copy.push(v);
            t.emit(Operation::Inspect, vec![active([i])]);
        }
        if self.passes.is_none() {
            let max = copy.iter().copied().max().unwrap_or(0);
            self.passes = Some(digits(max));
        }

        let mut starts = [0usize; RADIX as usize];
        for d in 1..RADIX as usize {
            starts[d] = starts[d - 1] + counts[d - 1];
        }
        let edges: Vec<usize> = starts.iter().copied().filter(|&s| s < n).collect();
        for v in copy {
            let slot = &mut starts[digit(v, self.place)];
            let i = *slot;
            *slot += 1;
            t.set(i, v);
            t.emit(Operation::Set, vec![active([i]), boundary(edges.clone())]);
        }
        self.place += 1;
        Progress::Continue
    }
}

// ---------------------------------------------------------------------------
// MSD
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct MsdRadixSort;

impl SortingStrategy for MsdRadixSort {
    fn key(&self) -> &'static str {
        "msd-radix-sort"
    }

    fn name(&self) -> &'static str {
        "MSD Radix Sort (Base 4)"
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        SortRun::generator(values, Msd { passes: None, tasks: Vec::new() })
    }
}

/// `lo..hi` still needs distributing on digit `depth`, counted from the most
/// significant.
struct Task {
    lo: usize,
    hi: usize,
    depth: u32,
}

struct Msd {
    passes: Option<u32>,
    tasks: Vec<Task>,
}

impl Msd {
    fn distribute(&mut self, t: &mut ArrayTracker, task: Task, passes: u32) {
        let Task { lo, hi, depth } = task;
        let place = passes - 1 - depth;
        let edge = boundary([lo, hi - 1]);

        let mut counts = [0usize; RADIX as usize];
        for i in lo..hi {
            let v = t.get(i);
            counts[digit(v, place)] += 1;
            t.emit(Operation::Inspect, vec![active([i]), edge.clone()]);
        }

        // Exclusive bucket ends, relative to lo; decremented as slots fill.
        let mut ends = [0usize; RADIX as usize];
        let mut acc = 0;
        for d in 0..RADIX as usize {
            acc += counts[d];
            ends[d] = acc;
        }
        let bounds = ends;

        let len = hi - lo;
        let mut i = 0;
        while i < len {
            let d = loop {
                let d = digit(t.get(lo + i), place);
                ends[d] -= 1;
                let j = ends[d];
                if j <= i {
                    break d;
                }
                t.swap(lo + i, lo + j);
                t.emit(Operation::Swap, vec![active([lo + i, lo + j]), edge.clone()]);
            };
            i += counts[d];
        }

        if depth + 1 < passes {
            for d in (0..RADIX as usize).rev() {
                if counts[d] > 1 {
                    let start = lo + bounds[d] - counts[d];
                    self.tasks.push(Task {
                        lo: start,
                        hi: start + counts[d],
                        depth: depth + 1,
                    });
                }
            }
        }
    }
}

impl SortMachine for Msd {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let passes = match self.passes {
            Some(p) => p,
            None => {
                let n = t.len();
                let mut max = 0;
                for i in 0..n {
                    max = max.max(t.get(i));
                    t.emit(Operation::Inspect, vec![active([i])]);
                }
                let p = digits(max);
                self.passes = Some(p);
                if n > 1 {
                    self.tasks.push(Task { lo: 0, hi: n, depth: 0 });
                }
                return Progress::Continue;
            }
        };
        match self.tasks.pop() {
            Some(task) => {
                self.distribute(t, task, passes);
                Progress::Continue
            }
            None => Progress::Done,
        }
    }
}
