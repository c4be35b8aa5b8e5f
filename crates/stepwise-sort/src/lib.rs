//! Instrumented, resumable sorting strategies.
//!
//! Every strategy sorts its own copy of the input through an
//! [`ArrayTracker`] and yields one [`StepRecord`] per primitive step. Records
//! carry the operation counts since the previous record, the highlight groups
//! to draw, and the writes to replay on a displayed [`SortArray`].
//!
//! | Family       | Strategies                                              |
//! |--------------|---------------------------------------------------------|
//! | Elementary   | bubble, selection, insertion (three variants), gnome    |
//! | Shell        | plain, Knuth, Sedgewick, Incerpi-Sedgewick gaps         |
//! | Merge        | top-down, bottom-up                                     |
//! | Quicksort    | Lomuto, Hoare, LL, LR, ternary LL/LR, dual-pivot        |
//! | Heap / intro | heap sort, intro-sort                                   |
//! | Distribution | counting, pigeonhole, bucket, LSD/MSD radix (base 4)    |
//!
//! Strategies are resolved by key through [`SortingRegistry`].

mod array;
mod patterns;
mod record;
mod registry;
pub mod strategies;
mod strategy;
mod sweep;
mod tracker;

pub use array::SortArray;
pub use patterns::DataPattern;
pub use record::{Color, Counts, Highlight, Operation, StepRecord, Write, active, boundary, marker};
pub use registry::SortingRegistry;
pub use strategies::quick::PivotRule;
pub use strategies::shell::GapSequence;
pub use strategy::{SortGenerator, SortOptions, SortOutcome, SortingStrategy};
pub use sweep::{SweepGenerator, SweepOutcome, sweep};
pub use tracker::ArrayTracker;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn sort_options_default_missing_fields() {
        let opts: SortOptions = serde_json::from_str(r#"{"pivot":"median-of-three"}"#).unwrap();
        assert_eq!(opts.pivot, PivotRule::MedianOfThree);
        assert_eq!(opts.seed, 0);
    }

    #[test]
    fn step_record_roundtrip() {
        let (records, _) = SortingRegistry::new()
            .get("bubble-sort")
            .unwrap()
            .generator(vec![2, 1], &SortOptions::default())
            .run_to_end()
            .unwrap();
        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains("\"operation\":\"swap\""));
        let back: Vec<StepRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn data_pattern_keys() {
        let json = serde_json::to_string(&DataPattern::NMinusTwoEqual).unwrap();
        assert_eq!(json, "\"n-minus-2-equal\"");
    }
}
