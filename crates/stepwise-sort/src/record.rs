//! Step records: the trace vocabulary shared by every sorting strategy.

use std::ops::{Add, AddAssign};

/// Kind of primitive operation a record reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Operation {
    Compare,
    Inspect,
    Swap,
    Shift,
    Set,
}

/// Opaque color token for a highlight group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Color {
    /// Elements being touched right now.
    Red,
    /// Markers such as the current pivot.
    Green,
    /// Range and bucket boundaries.
    Cyan,
}

/// A group of indices drawn in one color.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub color: Color,
    pub indices: Vec<usize>,
    /// Suppress the audio tone for this group.
    pub skip_tone: bool,
}

impl Highlight {
    pub fn new(color: Color, indices: impl Into<Vec<usize>>, skip_tone: bool) -> Self {
        Self {
            color,
            indices: indices.into(),
            skip_tone,
        }
    }
}

/// Red, sounding group for the elements being operated on.
pub fn active(indices: impl Into<Vec<usize>>) -> Highlight {
    Highlight::new(Color::Red, indices, false)
}

/// Green, silent marker group.
pub fn marker(indices: impl Into<Vec<usize>>) -> Highlight {
    Highlight::new(Color::Green, indices, true)
}

/// Cyan, silent boundary group.
pub fn boundary(indices: impl Into<Vec<usize>>) -> Highlight {
    Highlight::new(Color::Cyan, indices, true)
}

/// Primitive operation counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counts {
    pub accesses: u64,
    pub comparisons: u64,
    pub swaps: u64,
    pub shifts: u64,
}

impl Counts {
    pub fn is_zero(&self) -> bool {
        *self == Counts::default()
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, rhs: Counts) -> Counts {
        Counts {
            accesses: self.accesses + rhs.accesses,
            comparisons: self.comparisons + rhs.comparisons,
            swaps: self.swaps + rhs.swaps,
            shifts: self.shifts + rhs.shifts,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Counts) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Counts {
    fn sum<I: Iterator<Item = Counts>>(iter: I) -> Counts {
        iter.fold(Counts::default(), Add::add)
    }
}

/// An array write that takes effect with the record carrying it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Write {
    pub index: usize,
    pub value: u32,
}

/// One yielded step of a sorting run.
///
/// The counts cover every primitive operation performed since the previous
/// record, so summing them over a run gives exact totals. Applying `writes`
/// in order to the array state of the previous record gives the array state
/// of this one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    pub access_count: u64,
    pub comparison_count: u64,
    pub swap_count: u64,
    pub shift_count: u64,
    pub highlights: Vec<Highlight>,
    pub operation: Operation,
    pub writes: Vec<Write>,
}

impl StepRecord {
    pub fn counts(&self) -> Counts {
        Counts {
            accesses: self.access_count,
            comparisons: self.comparison_count,
            swaps: self.swap_count,
            shifts: self.shift_count,
        }
    }

    /// Indices of every highlight group that should sound a tone.
    pub fn toned_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.highlights
            .iter()
            .filter(|h| !h.skip_tone)
            .flat_map(|h| h.indices.iter().copied())
    }
}
