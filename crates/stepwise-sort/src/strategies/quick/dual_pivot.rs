use std::cmp::Ordering;
use std::ops::Range;

use super::PivotSelector;
use crate::record::{Operation, active, boundary, marker};
use crate::tracker::ArrayTracker;

/// Yaroslavskiy's dual-pivot partition.
///
/// The selected element becomes the left pivot, the last element the right
/// one (swapped if out of order). Returns the `< p`, `p..=q` and `> q`
/// ranges, both pivots excluded.
pub(crate) fn yaroslavskiy(
    t: &mut ArrayTracker,
    pivots: &mut PivotSelector,
    range: Range<usize>,
) -> Vec<Range<usize>> {
    let (left, right) = (range.start, range.end - 1);
    let sel = pivots.select(t, range.clone());
    if sel != left {
        t.swap(sel, left);
        t.emit(Operation::Swap, vec![active([sel, left])]);
    }
    let ord = t.compare(left, right);
    t.emit(Operation::Compare, vec![active([left, right])]);
    if ord == Ordering::Greater {
        t.swap(left, right);
        t.emit(Operation::Swap, vec![active([left, right])]);
    }
    let p = t.get(left);
    let q = t.get(right);
    let pivots_at = marker([left, right]);

    let (mut l, mut g, mut k) = (left + 1, right - 1, left + 1);
    while k <= g {
        let below_p = t.compare_value(k, p);
        t.emit(Operation::Compare, vec![active([k]), pivots_at.clone(), boundary([l, g])]);
        if below_p == Ordering::Less {
            t.swap(k, l);
            t.emit(Operation::Swap, vec![active([k, l]), pivots_at.clone()]);
            l += 1;
        } else {
            let below_q = t.compare_value(k, q);
            t.emit(Operation::Compare, vec![active([k]), pivots_at.clone(), boundary([l, g])]);
            if below_q != Ordering::Less {
                loop {
                    let ord = t.compare_value(g, q);
                    t.emit(Operation::Compare, vec![active([g]), pivots_at.clone()]);
                    if ord != Ordering::Greater || k >= g {
                        break;
                    }
                    g -= 1;
                }
                t.swap(k, g);
                t.emit(Operation::Swap, vec![active([k, g]), pivots_at.clone()]);
                g -= 1;
                let ord = t.compare_value(k, p);
                t.emit(Operation::Compare, vec![active([k]), pivots_at.clone()]);
                if ord == Ordering::Less {
                    t.swap(k, l);
                    t.emit(Operation::Swap, vec![active([k, l]), pivots_at.clone()]);
                    l += 1;
                }
            }
        }
        k += 1;
    }
    l -= 1;
    g += 1;
    t.swap(left, l);
    t.emit(Operation::Swap, vec![active([left, l]), marker([l])]);
    t.swap(right, g);
    t.emit(Operation::Swap, vec![active([right, g]), marker([l, g])]);
    vec![left..l, l + 1..g, g + 1..right + 1]
}
