use stepwise_core::{Error, KeyFamily, Result};

use crate::strategies::bubble::BubbleSort;
use crate::strategies::bucket::BucketSort;
use crate::strategies::distribution::{CountingSort, PigeonholeSort};
use crate::strategies::gnome::GnomeSort;
use crate::strategies::heap::HeapSort;
use crate::strategies::insertion::{BinaryInsertionSort, InsertionSort, SwapInsertionSort};
use crate::strategies::intro::IntroSort;
use crate::strategies::merge::{BottomUpMergeSort, MergeSort};
use crate::strategies::quick::{QuickSort, Scheme};
use crate::strategies::radix::{LsdRadixSort, MsdRadixSort};
use crate::strategies::selection::SelectionSort;
use crate::strategies::shell::{GapSequence, ShellSort};
use crate::strategy::SortingStrategy;

/// Key-indexed set of sorting strategies.
pub struct SortingRegistry {
    strategies: Vec<Box<dyn SortingStrategy>>,
}

impl Default for SortingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SortingRegistry {
    /// Registry holding every built-in strategy.
    pub fn new() -> Self {
        let mut strategies: Vec<Box<dyn SortingStrategy>> = vec![
            Box::new(BubbleSort),
            Box::new(SelectionSort),
            Box::new(InsertionSort),
            Box::new(BinaryInsertionSort),
            Box::new(SwapInsertionSort),
            Box::new(GnomeSort),
        ];
        strategies.extend(
            GapSequence::ALL
                .into_iter()
                .map(|g| Box::new(ShellSort::new(g)) as Box<dyn SortingStrategy>),
        );
        strategies.push(Box::new(MergeSort));
        strategies.push(Box::new(BottomUpMergeSort));
        strategies.extend(
            Scheme::ALL
                .into_iter()
                .map(|s| Box::new(QuickSort::new(s)) as Box<dyn SortingStrategy>),
        );
        strategies.push(Box::new(HeapSort));
        strategies.push(Box::new(IntroSort));
        strategies.push(Box::new(CountingSort));
        strategies.push(Box::new(PigeonholeSort));
        strategies.push(Box::new(BucketSort));
        strategies.push(Box::new(LsdRadixSort));
        strategies.push(Box::new(MsdRadixSort));
        Self { strategies }
    }

    /// Look up a strategy, failing with [`Error::UnknownKey`].
    pub fn get(&self, key: &str) -> Result<&dyn SortingStrategy> {
        match self.strategies.iter().find(|s| s.key() == key) {
            Some(s) => Ok(s.as_ref()),
            None => {
                log::warn!("unknown sorting key {key:?}");
                Err(Error::unknown_key(KeyFamily::Sorting, key))
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|s| s.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn SortingStrategy> {
        self.strategies.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_key_once() {
        let reg = SortingRegistry::new();
        let keys: Vec<_> = reg.keys().collect();
        assert_eq!(keys.len(), 26);
        let mut unique = keys.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), keys.len());
        for k in [
            "bubble-sort",
            "knuth-shell-sort",
            "top-down-merge-sort",
            "lomuto-quick-sort",
            "quick-sort-ternary-lr",
            "dual-pivot-quick-sort",
            "msd-radix-sort",
        ] {
            assert_eq!(reg.get(k).unwrap().key(), k);
        }
    }

    #[test]
    fn pivot_users() {
        let reg = SortingRegistry::new();
        let n = reg.iter().filter(|s| s.uses_pivot()).count();
        assert_eq!(n, 8);
    }

    #[test]
    fn unknown_key_fails_fast() {
        let reg = SortingRegistry::new();
        assert_eq!(
            reg.get("bogo-sort").err().map(|e| e.to_string()),
            Some("unknown sorting algorithm `bogo-sort`".to_string())
        );
    }
}
