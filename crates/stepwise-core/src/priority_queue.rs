//! Min-priority queue for best-first graph search.
//!
//! Items are stored in a binary heap keyed by `(priority, insertion_order)`.
//! Lower priorities are popped first; ties are broken by insertion order
//! (FIFO), so equal-cost frontier entries are expanded in discovery order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
    /// Monotonically increasing; lower means inserted earlier.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Wrapped in Reverse for the heap: this is the natural order.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority queue dequeuing the minimum priority first.
///
/// Priorities are `f64` so infinite costs and fractional heuristic
/// estimates can be used directly. Among items with the same priority, those
/// enqueued earlier are dequeued first.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Remove the item with the lowest priority (ties broken FIFO).
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Remove the item with the lowest priority, also returning the priority.
    pub fn dequeue_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Priority of the item that would be dequeued next.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_priority() {
        let mut q = PriorityQueue::new();
        q.enqueue("c", 3.0);
        q.enqueue("a", 1.0);
        q.enqueue("b", 2.0);
        assert_eq!(q.peek_priority(), Some(1.0));
        assert_eq!(q.dequeue(), Some("a"));
        assert_eq!(q.dequeue(), Some("b"));
        assert_eq!(q.dequeue(), Some("c"));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn fifo_within_priority() {
        let mut q = PriorityQueue::new();
        for (i, p) in [2.0, 1.0, 2.0, 1.0, 2.0].into_iter().enumerate() {
            q.enqueue(i, p);
        }
        let order: Vec<_> = std::iter::from_fn(|| q.dequeue()).collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn infinite_and_fractional_priorities() {
        let mut q = PriorityQueue::new();
        q.enqueue('w', f64::INFINITY);
        q.enqueue('e', std::f64::consts::SQRT_2);
        q.enqueue('m', 1.0);
        assert_eq!(q.dequeue_with_priority(), Some(('m', 1.0)));
        assert_eq!(q.dequeue(), Some('e'));
        assert_eq!(q.dequeue_with_priority(), Some(('w', f64::INFINITY)));
        assert!(q.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut q = PriorityQueue::new();
        q.enqueue(1, 0.5);
        q.enqueue(2, 0.5);
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.peek_priority(), None);
    }
}
