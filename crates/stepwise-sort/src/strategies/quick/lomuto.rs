use std::cmp::Ordering;
use std::ops::Range;

use super::PivotSelector;
use crate::record::{Operation, active, boundary, marker};
use crate::tracker::ArrayTracker;

/// Lomuto partition: the pivot is parked at the end, one left-to-right scan
/// grows the `<= pivot` prefix, and the pivot lands right after it.
///
/// Self-swaps are performed and counted but do not get a record of their own.
pub(crate) fn lomuto(
    t: &mut ArrayTracker,
    pivots: &mut PivotSelector,
    range: Range<usize>,
) -> Vec<Range<usize>> {
    let (lo, hi) = (range.start, range.end);
    let last = hi - 1;
    let p = pivots.select(t, lo..hi);
    if p != last {
        t.swap(p, last);
        t.emit(Operation::Swap, vec![active([p, last]), marker([last])]);
    }
    let pivot = t.get(last);
    let mut i = lo;
    for j in lo..last {
        let v = t.get(j);
        let ord = t.compare_values(v, pivot);
        t.emit(Operation::Compare, vec![active([j]), marker([last]), boundary([i])]);
        if ord != Ordering::Greater {
            t.swap(i, j);
            if i != j {
                t.emit(Operation::Swap, vec![active([i, j]), marker([last])]);
            }
            i += 1;
        }
    }
    t.swap(i, last);
    t.emit(Operation::Swap, vec![active([i, last]), marker([i])]);
    vec![lo..i, i + 1..hi]
}
