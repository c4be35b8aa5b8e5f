//! Input data patterns for sorting runs.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use stepwise_core::{Error, KeyFamily};

/// Shape of a generated input array of `n` values in `1..=n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DataPattern {
    /// A shuffled permutation of `1..=n`.
    #[default]
    Random,
    Ascending,
    Descending,
    /// Values clustered around the middle by a cubic curve, shuffled.
    Cubic,
    /// As [`Cubic`](Self::Cubic) with a fifth power, tighter clustering.
    Quintic,
    /// One minimum, one maximum and `n - 2` copies of the midpoint, shuffled.
    #[cfg_attr(feature = "serde", serde(rename = "n-minus-2-equal"))]
    NMinusTwoEqual,
}

impl DataPattern {
    pub const ALL: [DataPattern; 6] = [
        DataPattern::Random,
        DataPattern::Ascending,
        DataPattern::Descending,
        DataPattern::Cubic,
        DataPattern::Quintic,
        DataPattern::NMinusTwoEqual,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DataPattern::Random => "random",
            DataPattern::Ascending => "ascending",
            DataPattern::Descending => "descending",
            DataPattern::Cubic => "cubic",
            DataPattern::Quintic => "quintic",
            DataPattern::NMinusTwoEqual => "n-minus-2-equal",
        }
    }

    /// Build an array of `n` values following this pattern.
    pub fn generate<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Vec<u32> {
        let top = n as u32;
        let mut values: Vec<u32> = match self {
            DataPattern::Random | DataPattern::Ascending => (1..=top).collect(),
            DataPattern::Descending => (1..=top).rev().collect(),
            DataPattern::Cubic => power_curve(n, 3),
            DataPattern::Quintic => power_curve(n, 5),
            DataPattern::NMinusTwoEqual => {
                let mut v = vec![top / 2 + 1; n];
                if n >= 2 {
                    v[0] = 1;
                    v[n - 1] = top;
                }
                v
            }
        };
        if matches!(
            self,
            DataPattern::Random | DataPattern::Cubic | DataPattern::Quintic | DataPattern::NMinusTwoEqual
        ) {
            values.shuffle(rng);
        }
        values
    }
}

/// `floor(((x^k + 1) / 2) * n) + 1` for `x = 2i/n - 1`.
fn power_curve(n: usize, k: i32) -> Vec<u32> {
    let len = n as f64;
    (0..n)
        .map(|i| {
            let x = 2.0 * i as f64 / len - 1.0;
            (((x.powi(k) + 1.0) / 2.0 * len).floor() as u32) + 1
        })
        .collect()
}

impl fmt::Display for DataPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DataPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataPattern::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| Error::unknown_key(KeyFamily::DataPattern, s))
    }
}
