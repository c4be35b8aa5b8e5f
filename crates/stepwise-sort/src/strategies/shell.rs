//! Shell sort over a choice of gap sequences.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use stepwise_core::{Error, KeyFamily};

use crate::record::{Operation, active, marker};
use crate::strategy::{Progress, SortGenerator, SortMachine, SortOptions, SortRun, SortingStrategy};
use crate::tracker::ArrayTracker;

const KNUTH: [usize; 16] = [
    1, 4, 13, 40, 121, 364, 1093, 3280, 9841, 29524, 88573, 265720, 797161, 2391484, 7174453,
    21523360,
];

const SEDGEWICK: [usize; 11] = [
    1, 8, 23, 77, 281, 1073, 4193, 16577, 65921, 262913, 1050113,
];

const INCERPI_SEDGEWICK: [usize; 16] = [
    1, 3, 7, 21, 48, 112, 336, 861, 1968, 4592, 13776, 33936, 86961, 198768, 463792, 1391376,
];

/// Gap sequence driving a shell sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GapSequence {
    /// n/2, n/4, ..., 1.
    #[default]
    Plain,
    /// (3^k − 1) / 2.
    Knuth,
    /// 4^k + 3·2^(k−1) + 1, led by 1.
    Sedgewick,
    IncerpiSedgewick,
}

impl GapSequence {
    pub const ALL: [GapSequence; 4] = [
        GapSequence::Plain,
        GapSequence::Knuth,
        GapSequence::Sedgewick,
        GapSequence::IncerpiSedgewick,
    ];

    pub fn key(self) -> &'static str {
        match self {
            GapSequence::Plain => "plain",
            GapSequence::Knuth => "knuth",
            GapSequence::Sedgewick => "sedgewick",
            GapSequence::IncerpiSedgewick => "incerpi-sedgewick",
        }
    }

    /// Gaps below `n`, largest first.
    pub fn gaps(self, n: usize) -> Vec<usize> {
        let table: &[usize] = match self {
            GapSequence::Plain => {
                let mut gaps = Vec::new();
                let mut h = n / 2;
                while h > 0 {
                    gaps.push(h);
                    h /= 2;
                }
                return gaps;
            }
            GapSequence::Knuth => &KNUTH,
            GapSequence::Sedgewick => &SEDGEWICK,
            GapSequence::IncerpiSedgewick => &INCERPI_SEDGEWICK,
        };
        table.iter().rev().copied().filter(|&h| h < n).collect()
    }
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GapSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GapSequence::ALL
            .into_iter()
            .find(|g| g.key() == s)
            .ok_or_else(|| Error::unknown_key(KeyFamily::GapSequence, s))
    }
}

/// Shell sort: gapped insertion passes ending with a plain insertion pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort {
    pub gaps: GapSequence,
}

impl ShellSort {
    pub const fn new(gaps: GapSequence) -> Self {
        Self { gaps }
    }
}

impl SortingStrategy for ShellSort {
    fn key(&self) -> &'static str {
        match self.gaps {
            GapSequence::Plain => "shell-sort",
            GapSequence::Knuth => "knuth-shell-sort",
            GapSequence::Sedgewick => "sedgewick-shell-sort",
            GapSequence::IncerpiSedgewick => "incerpi-sedgewick-shell-sort",
        }
    }

    fn name(&self) -> &'static str {
        match self.gaps {
            GapSequence::Plain => "Shell Sort",
            GapSequence::Knuth => "Shell Sort (Knuth)",
            GapSequence::Sedgewick => "Shell Sort (Sedgewick)",
            GapSequence::IncerpiSedgewick => "Shell Sort (Incerpi-Sedgewick)",
        }
    }

    fn generator(&self, values: Vec<u32>, _options: &SortOptions) -> SortGenerator {
        let gaps = self.gaps.gaps(values.len());
        let i = gaps.first().copied().unwrap_or(0);
        SortRun::generator(values, Shell { gaps, g: 0, i })
    }
}

struct Shell {
    gaps: Vec<usize>,
    g: usize,
    i: usize,
}

impl SortMachine for Shell {
    fn advance(&mut self, t: &mut ArrayTracker) -> Progress {
        let Some(&h) = self.gaps.get(self.g) else {
            return Progress::Done;
        };
        if self.i >= t.len() {
            self.g += 1;
            self.i = self.gaps.get(self.g).copied().unwrap_or(0);
            return Progress::Continue;
        }
        let i = self.i;
        let key = t.get(i);
        let mut j = i;
        while j >= h {
            let ord = t.compare_value(j - h, key);
            t.emit(Operation::Compare, vec![active([j - h, j]), marker([i])]);
            if ord != Ordering::Greater {
                break;
            }
            t.shift(j - h, j);
            t.emit(Operation::Shift, vec![active([j - h, j])]);
            j -= h;
        }
        if j != i {
            t.set(j, key);
            t.emit(Operation::Set, vec![active([j])]);
        }
        self.i += 1;
        Progress::Continue
    }
}
