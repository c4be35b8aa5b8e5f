//! Three-way (Dutch flag) partitions: keys equal to the pivot are gathered
//! in the middle and never revisited.

use std::cmp::Ordering;
use std::ops::Range;

use super::PivotSelector;
use crate::record::{Operation, active, boundary, marker};
use crate::tracker::ArrayTracker;

/// Left-to-right scan keeping `[lo, i)` less, `[i, j)` greater and
/// `[k, hi)` equal; the equal block is then rotated into the middle.
pub(crate) fn ternary_ll(
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
    let (mut i, mut j, mut k) = (lo, lo, last);
    while j < k {
        let ord = t.compare_value(j, pivot);
        t.emit(Operation::Compare, vec![active([j]), boundary([i, k])]);
        match ord {
            Ordering::Equal => {
                k -= 1;
                t.swap(j, k);
                t.emit(Operation::Swap, vec![active([j, k])]);
            }
            Ordering::Less => {
                t.swap(i, j);
                t.emit(Operation::Swap, vec![active([i, j])]);
                i += 1;
                j += 1;
            }
            Ordering::Greater => j += 1,
        }
    }
    let equal = hi - k;
    for s in 0..equal.min(k - i) {
        t.swap(i + s, hi - 1 - s);
        t.emit(Operation::Swap, vec![active([i + s, hi - 1 - s]), boundary([i])]);
    }
    vec![lo..i, i + equal..hi]
}

/// Bentley-McIlroy partition: scans from both ends park equal keys at the
/// outer edges, which are swapped into the middle once the scans cross.
pub(crate) fn ternary_lr(
    t: &mut ArrayTracker,
    pivots: &mut PivotSelector,
    range: Range<usize>,
) -> Vec<Range<usize>> {
    let (lo, hi) = (range.start as isize, range.end as isize - 1);
    let idx = |x: isize| x as usize;
    let sel = pivots.select(t, range.clone());
    if sel != idx(hi) {
        t.swap(sel, idx(hi));
        t.emit(Operation::Swap, vec![active([sel, idx(hi)]), marker([idx(hi)])]);
    }
    let pivot = t.get(idx(hi));
    let (mut i, mut j) = (lo, hi - 1);
    let (mut p, mut q) = (lo, hi - 1);
    loop {
        while i <= j {
            let ord = t.compare_value(idx(i), pivot);
            t.emit(Operation::Compare, vec![active([idx(i)]), marker([idx(hi)])]);
            match ord {
                Ordering::Less => i += 1,
                Ordering::Equal => {
                    t.swap(idx(p), idx(i));
                    t.emit(Operation::Swap, vec![active([idx(p), idx(i)])]);
                    p += 1;
                    i += 1;
                }
                Ordering::Greater => break,
            }
        }
        while i <= j {
            let ord = t.compare_value(idx(j), pivot);
            t.emit(Operation::Compare, vec![active([idx(j)]), marker([idx(hi)])]);
            match ord {
                Ordering::Greater => j -= 1,
                Ordering::Equal => {
                    t.swap(idx(j), idx(q));
                    t.emit(Operation::Swap, vec![active([idx(j), idx(q)])]);
                    q -= 1;
                    j -= 1;
                }
                Ordering::Less => break,
            }
        }
        if i > j {
            break;
        }
        t.swap(idx(i), idx(j));
        t.emit(Operation::Swap, vec![active([idx(i), idx(j)])]);
        i += 1;
        j -= 1;
    }

    let left = (p - lo).min(i - p);
    for s in 0..left {
        let (a, b) = (idx(lo + s), idx(i - 1 - s));
        t.swap(a, b);
        t.emit(Operation::Swap, vec![active([a, b])]);
    }
    let right = (q - j).min(hi - q);
    for s in 0..right {
        let (a, b) = (idx(i + s), idx(hi - s));
        t.swap(a, b);
        t.emit(Operation::Swap, vec![active([a, b])]);
    }
    let less = i - p;
    let greater = q - j;
    vec![idx(lo)..idx(lo + less), idx(hi + 1 - greater)..idx(hi + 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::quick::PivotRule;

    fn check(
        f: fn(&mut ArrayTracker, &mut PivotSelector, Range<usize>) -> Vec<Range<usize>>,
        values: Vec<u32>,
        pivot_value: u32,
    ) {
        let n = values.len();
        let mut t = ArrayTracker::new(values);
        let parts = f(&mut t, &mut PivotSelector::new(PivotRule::First, 0), 0..n);
        let v = t.values();
        assert!(v[parts[0].clone()].iter().all(|&x| x < pivot_value), "{v:?} {parts:?}");
        assert!(v[parts[1].clone()].iter().all(|&x| x > pivot_value), "{v:?} {parts:?}");
        assert!(v[parts[0].end..parts[1].start].iter().all(|&x| x == pivot_value));
    }

    #[test]
    fn ll_gathers_equal_keys() {
        check(ternary_ll, vec![3, 1, 3, 5, 3, 2, 4], 3);
        check(ternary_ll, vec![2, 2, 2], 2);
        check(ternary_ll, vec![1, 5, 4], 1);
    }

    #[test]
    fn lr_gathers_equal_keys() {
        check(ternary_lr, vec![3, 1, 3, 5, 3, 2, 4], 3);
        check(ternary_lr, vec![2, 2, 2], 2);
        check(ternary_lr, vec![5, 1, 4], 5);
        check(ternary_lr, vec![3, 3, 1, 9, 3, 3], 3);
    }
}
