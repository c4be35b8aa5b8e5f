//! Pivot selection shared by the quicksort family and intro-sort.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stepwise_core::{Error, KeyFamily};

use crate::record::{Operation, active, boundary};
use crate::tracker::ArrayTracker;

/// Which element of a range becomes the pivot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PivotRule {
    #[default]
    First,
    Last,
    Middle,
    /// Uniform over the range, drawn from the seeded run RNG.
    Random,
    /// Median of first, middle and last.
    MedianOfThree,
}

impl PivotRule {
    pub const ALL: [PivotRule; 5] = [
        PivotRule::First,
        PivotRule::Last,
        PivotRule::Middle,
        PivotRule::Random,
        PivotRule::MedianOfThree,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PivotRule::First => "first",
            PivotRule::Last => "last",
            PivotRule::Middle => "middle",
            PivotRule::Random => "random",
            PivotRule::MedianOfThree => "median-of-three",
        }
    }
}

impl fmt::Display for PivotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PivotRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PivotRule::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| Error::unknown_key(KeyFamily::Pivot, s))
    }
}

/// A [`PivotRule`] bound to the run's random source.
pub(crate) struct PivotSelector {
    rule: PivotRule,
    rng: StdRng,
}

impl PivotSelector {
    pub(crate) fn new(rule: PivotRule, seed: u64) -> Self {
        Self {
            rule,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Index of the pivot in the non-empty `range`.
    pub(crate) fn select(&mut self, t: &mut ArrayTracker, range: Range<usize>) -> usize {
        let (lo, hi) = (range.start, range.end);
        let mid = lo + (hi - lo) / 2;
        match self.rule {
            PivotRule::First => lo,
            PivotRule::Last => hi - 1,
            PivotRule::Middle => mid,
            PivotRule::Random => self.rng.random_range(range),
            PivotRule::MedianOfThree => median_of_three(t, lo, mid, hi - 1),
        }
    }
}

fn median_of_three(t: &mut ArrayTracker, lo: usize, mid: usize, last: usize) -> usize {
    let compare = |t: &mut ArrayTracker, i: usize, j: usize| {
        let ord = t.compare(i, j);
        t.emit(Operation::Compare, vec![active([i, j]), boundary([lo, last])]);
        ord
    };
    let lo_mid = compare(t, lo, mid);
    if lo_mid == Ordering::Equal {
        return lo;
    }
    let lo_last = compare(t, lo, last);
    if lo_last == Ordering::Equal {
        return last;
    }
    let mid_last = compare(t, mid, last);
    if mid_last == Ordering::Equal {
        return last;
    }
    let lo_below_mid = lo_mid == Ordering::Less;
    if lo_below_mid == (mid_last == Ordering::Less) {
        mid
    } else if (lo_last == Ordering::Less) == lo_below_mid {
        last
    } else {
        lo
    }
}
