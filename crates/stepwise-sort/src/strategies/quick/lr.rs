//! Two-way partitions in the LL and LR scan styles.

use std::cmp::Ordering;
use std::ops::Range;

use super::PivotSelector;
use crate::record::{Operation, active, boundary, marker};
use crate::tracker::ArrayTracker;

/// Both cursors walk left to right: `i` bounds the `< pivot` prefix while
/// `j` scans. The pivot sits at the end until the final swap.
pub(crate) fn ll(
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
        let ord = t.compare_value(j, pivot);
        t.emit(Operation::Compare, vec![active([j]), marker([last]), boundary([i])]);
        if ord == Ordering::Less {
            t.swap(i, j);
            t.emit(Operation::Swap, vec![active([i, j]), marker([last])]);
            i += 1;
        }
    }
    t.swap(i, last);
    t.emit(Operation::Swap, vec![active([i, last]), marker([i])]);
    vec![lo..i, i + 1..hi]
}

/// Cursors start at both ends and meet in the middle; out-of-place pairs
/// are exchanged. Keys equal to the pivot stop both scans, which keeps the
/// split balanced on repeated keys.
pub(crate) fn lr(
    t: &mut ArrayTracker,
    pivots: &mut PivotSelector,
    range: Range<usize>,
) -> Vec<Range<usize>> {
    let (lo, hi) = (range.start, range.end);
    let p = pivots.select(t, lo..hi);
    let pivot = t.get(p);
    let mut pivot_at = p;
    let (mut i, mut j) = (lo as isize, hi as isize - 1);
    while i <= j {
        loop {
            let ord = t.compare_value(i as usize, pivot);
            t.emit(Operation::Compare, vec![active([i as usize]), marker([pivot_at])]);
            if ord != Ordering::Less {
                break;
            }
            i += 1;
        }
        loop {
            let ord = t.compare_value(j as usize, pivot);
            t.emit(Operation::Compare, vec![active([j as usize]), marker([pivot_at])]);
            if ord != Ordering::Greater {
                break;
            }
            j -= 1;
        }
        if i <= j {
            let (a, b) = (i as usize, j as usize);
            t.swap(a, b);
            if pivot_at == a {
                pivot_at = b;
            } else if pivot_at == b {
                pivot_at = a;
            }
            t.emit(Operation::Swap, vec![active([a, b]), marker([pivot_at])]);
            i += 1;
            j -= 1;
        }
    }
    vec![lo..(j + 1) as usize, i as usize..hi]
}
