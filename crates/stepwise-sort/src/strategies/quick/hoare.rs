use std::cmp::Ordering;
use std::ops::Range;

use super::PivotSelector;
use crate::record::{Operation, active, marker};
use crate::tracker::ArrayTracker;

/// Hoare partition with the pivot value parked at the front.
///
/// Returns `lo..=j` and `j+1..hi`; the pivot is not necessarily in its final
/// slot, so both sides keep it in play.
pub(crate) fn hoare(
    t: &mut ArrayTracker,
    pivots: &mut PivotSelector,
    range: Range<usize>,
) -> Vec<Range<usize>> {
    let (lo, hi) = (range.start, range.end);
    let p = pivots.select(t, lo..hi);
    if p != lo {
        t.swap(p, lo);
        t.emit(Operation::Swap, vec![active([p, lo]), marker([lo])]);
    }
    let pivot = t.get(lo);
    let mut pivot_at = lo;
    let (mut i, mut j) = (lo, hi);
    loop {
        loop {
            let ord = t.compare_value(i, pivot);
            t.emit(Operation::Compare, vec![active([i]), marker([pivot_at])]);
            if ord != Ordering::Less {
                break;
            }
            i += 1;
        }
        loop {
            j -= 1;
            let ord = t.compare_value(j, pivot);
            t.emit(Operation::Compare, vec![active([j]), marker([pivot_at])]);
            if ord != Ordering::Greater {
                break;
            }
        }
        if i >= j {
            return vec![lo..j + 1, j + 1..hi];
        }
        t.swap(i, j);
        if pivot_at == i {
            pivot_at = j;
        } else if pivot_at == j {
            pivot_at = i;
        }
        t.emit(Operation::Swap, vec![active([i, j]), marker([pivot_at])]);
        i += 1;
    }
}
