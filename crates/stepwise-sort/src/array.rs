use rand::Rng;

use crate::patterns::DataPattern;
use crate::record::StepRecord;

/// The array a driver displays while a sort runs.
///
/// Strategies sort their own copy; the display copy follows along by
/// applying the writes carried in each [`StepRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortArray {
    values: Vec<u32>,
}

impl SortArray {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    pub fn from_pattern<R: Rng + ?Sized>(pattern: DataPattern, n: usize, rng: &mut R) -> Self {
        Self::new(pattern.generate(n, rng))
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value, used to scale bar heights.
    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Replay the writes of one record.
    pub fn apply(&mut self, record: &StepRecord) {
        for w in &record.writes {
            if let Some(slot) = self.values.get_mut(w.index) {
                *slot = w.value;
            }
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn into_values(self) -> Vec<u32> {
        self.values
    }
}

impl From<Vec<u32>> for SortArray {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}
