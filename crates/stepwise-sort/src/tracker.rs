//! The instrumented array every strategy reads and writes through.
//!
//! [`ArrayTracker`] owns the working copy of the array. Each primitive
//! (`get`, `set`, `swap`, `shift`, `compare`) bumps the pending counters and
//! logs writes; [`emit`](ArrayTracker::emit) drains them into a
//! [`StepRecord`]. Reads performed between two emits are therefore batched
//! into the next record, and nothing is ever lost: the records of a run sum
//! to the exact number of primitive operations performed.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::record::{Counts, Highlight, Operation, StepRecord, Write};

#[derive(Debug, Clone)]
pub struct ArrayTracker {
    values: Vec<u32>,
    pending: Counts,
    writes: Vec<Write>,
    records: VecDeque<StepRecord>,
    totals: Counts,
    swap_calls: u64,
}

impl ArrayTracker {
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            pending: Counts::default(),
            writes: Vec::new(),
            records: VecDeque::new(),
            totals: Counts::default(),
            swap_calls: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current contents, without counting an access.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Read one element.
    #[inline]
    pub fn get(&mut self, i: usize) -> u32 {
        self.pending.accesses += 1;
        self.values[i]
    }

    /// Overwrite one element.
    #[inline]
    pub fn set(&mut self, i: usize, value: u32) {
        self.pending.accesses += 1;
        self.values[i] = value;
        self.writes.push(Write { index: i, value });
    }

    /// Exchange two elements: two reads and two writes.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.pending.accesses += 4;
        self.pending.swaps += 1;
        self.swap_calls += 1;
        self.values.swap(i, j);
        self.writes.push(Write {
            index: i,
            value: self.values[i],
        });
        self.writes.push(Write {
            index: j,
            value: self.values[j],
        });
    }

    /// Copy element `from` into slot `to`.
    pub fn shift(&mut self, from: usize, to: usize) {
        self.pending.accesses += 2;
        self.pending.shifts += 1;
        let v = self.values[from];
        self.values[to] = v;
        self.writes.push(Write { index: to, value: v });
    }

    /// Compare two elements.
    #[inline]
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.pending.accesses += 2;
        self.pending.comparisons += 1;
        self.values[i].cmp(&self.values[j])
    }

    /// Compare an element against a value read earlier.
    #[inline]
    pub fn compare_value(&mut self, i: usize, value: u32) -> Ordering {
        self.pending.accesses += 1;
        self.pending.comparisons += 1;
        self.values[i].cmp(&value)
    }

    /// Compare two values that were both read earlier.
    #[inline]
    pub fn compare_values(&mut self, a: u32, b: u32) -> Ordering {
        self.pending.comparisons += 1;
        a.cmp(&b)
    }

    /// Close the current batch of operations into a record.
    pub fn emit(&mut self, operation: Operation, highlights: Vec<Highlight>) {
        let counts = std::mem::take(&mut self.pending);
        self.totals += counts;
        self.records.push_back(StepRecord {
            access_count: counts.accesses,
            comparison_count: counts.comparisons,
            swap_count: counts.swaps,
            shift_count: counts.shifts,
            highlights,
            operation,
            writes: std::mem::take(&mut self.writes),
        });
    }

    /// Emit a trailing record for any operations not yet reported.
    pub fn settle(&mut self) {
        if !self.pending.is_zero() || !self.writes.is_empty() {
            self.emit(Operation::Inspect, Vec::new());
        }
    }

    pub fn next_record(&mut self) -> Option<StepRecord> {
        self.records.pop_front()
    }

    /// Sum of the counts of every emitted record.
    pub fn totals(&self) -> Counts {
        self.totals
    }

    /// Number of calls to [`swap`](Self::swap) so far.
    pub fn swap_calls(&self) -> u64 {
        self.swap_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::active;

    #[test]
    fn counts_drain_into_records() {
        let mut t = ArrayTracker::new(vec![3, 1, 2]);
        let a = t.get(0);
        assert_eq!(t.compare_value(1, a), Ordering::Less);
        t.emit(Operation::Compare, vec![active([0, 1])]);
        t.swap(0, 1);
        t.emit(Operation::Swap, vec![active([0, 1])]);

        let r1 = t.next_record().unwrap();
        assert_eq!((r1.access_count, r1.comparison_count, r1.swap_count), (2, 1, 0));
        assert!(r1.writes.is_empty());
        let r2 = t.next_record().unwrap();
        assert_eq!((r2.access_count, r2.swap_count), (4, 1));
        assert_eq!(r2.writes, vec![Write { index: 0, value: 1 }, Write { index: 1, value: 3 }]);
        assert_eq!(t.values(), &[1, 3, 2]);
        assert_eq!(t.totals().accesses, 6);
        assert_eq!(t.swap_calls(), 1);
        assert!(t.next_record().is_none());
    }

    #[test]
    fn shift_and_set_log_writes() {
        let mut t = ArrayTracker::new(vec![5, 6, 7]);
        t.shift(0, 1);
        t.set(0, 9);
        t.emit(Operation::Set, Vec::new());
        let r = t.next_record().unwrap();
        assert_eq!(r.shift_count, 1);
        assert_eq!(r.access_count, 3);
        assert_eq!(r.writes, vec![Write { index: 1, value: 5 }, Write { index: 0, value: 9 }]);
        assert_eq!(t.values(), &[9, 5, 7]);
    }

    #[test]
    fn settle_flushes_only_leftovers() {
        let mut t = ArrayTracker::new(vec![1, 2]);
        t.settle();
        assert!(t.next_record().is_none());
        t.get(1);
        t.settle();
        let r = t.next_record().unwrap();
        assert_eq!(r.operation, Operation::Inspect);
        assert_eq!(r.access_count, 1);
        assert!(r.highlights.is_empty());
    }
}
