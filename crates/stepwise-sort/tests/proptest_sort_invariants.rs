//! Property tests for the sorting strategies.
//!
//! 1. **Sorted permutation**: every strategy returns its input sorted.
//! 2. **Exact accounting**: record counts sum to the run totals, and the
//!    per-record swap counts sum to the calls made to the swap primitive.
//! 3. **Replay**: applying every record's writes to the seed array gives the
//!    final array.
//! 4. **Resumability**: a run interrupted after any number of steps and then
//!    resumed yields the same trace as an uninterrupted one.
//! 5. **Full key range**: properties 1 and 3 also hold for keys drawn from all
//!    of `u32`, where value spans dwarf the element count.

use proptest::prelude::*;
use stepwise_core::Resume;
use stepwise_sort::{
    Counts, Operation, PivotRule, SortArray, SortOptions, SortingRegistry, StepRecord,
};

fn options() -> impl Strategy<Value = SortOptions> {
    (prop::sample::select(PivotRule::ALL.to_vec()), any::<u64>())
        .prop_map(|(pivot, seed)| SortOptions { pivot, seed })
}

fn input() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..48, 0..40)
}

fn wide_input() -> impl Strategy<Value = Vec<u32>> {
    let key = prop_oneof![Just(0u32), Just(u32::MAX), any::<u32>()];
    prop::collection::vec(key, 0..12)
}

proptest! {
    #[test]
    fn every_strategy_sorts(values in input(), opts in options()) {
        let reg = SortingRegistry::new();
        let mut expected = values.clone();
        expected.sort_unstable();
        for s in reg.iter() {
            let (_, out) = s.generator(values.clone(), &opts).run_to_end().unwrap();
            prop_assert_eq!(&out.values, &expected, "{}", s.key());
        }
    }

    #[test]
    fn records_account_for_every_operation(values in input(), opts in options()) {
        let reg = SortingRegistry::new();
        for s in reg.iter() {
            let (records, out) = s.generator(values.clone(), &opts).run_to_end().unwrap();
            let summed: Counts = records.iter().map(StepRecord::counts).sum();
            prop_assert_eq!(summed, out.totals, "{}", s.key());
            prop_assert_eq!(summed.swaps, out.swap_calls, "{}", s.key());
        }
    }

    #[test]
    fn replaying_writes_reproduces_the_result(values in input(), opts in options()) {
        let reg = SortingRegistry::new();
        for s in reg.iter() {
            let mut shown = SortArray::new(values.clone());
            let (records, out) = s.generator(values.clone(), &opts).run_to_end().unwrap();
            for r in &records {
                shown.apply(r);
            }
            prop_assert_eq!(shown.values(), out.values.as_slice(), "{}", s.key());
        }
    }

    #[test]
    fn full_range_keys_sort_and_replay(values in wide_input(), opts in options()) {
        let reg = SortingRegistry::new();
        let mut expected = values.clone();
        expected.sort_unstable();
        for s in reg.iter() {
            let mut shown = SortArray::new(values.clone());
            let (records, out) = s.generator(values.clone(), &opts).run_to_end().unwrap();
            prop_assert_eq!(&out.values, &expected, "{}", s.key());
            for r in &records {
                shown.apply(r);
            }
            prop_assert_eq!(shown.values(), expected.as_slice(), "{}", s.key());
        }
    }

    #[test]
    fn pausing_does_not_change_the_trace(values in input(), opts in options(), pause in 0usize..64) {
        let reg = SortingRegistry::new();
        for s in reg.iter() {
            let (whole, _) = s.generator(values.clone(), &opts).run_to_end().unwrap();

            let mut run = s.generator(values.clone(), &opts);
            let mut head = Vec::new();
            for _ in 0..pause {
                match run.resume().unwrap() {
                    Resume::Yield(r) => head.push(r),
                    Resume::Return(_) => break,
                }
            }
            if !run.is_completed() {
                let (tail, _) = run.run_to_end().unwrap();
                head.extend(tail);
            }
            prop_assert_eq!(&head, &whole, "{}", s.key());
        }
    }
}

#[test]
fn extreme_keys_scenario() {
    let reg = SortingRegistry::new();
    for values in [vec![0, u32::MAX], vec![u32::MAX, 0, 7], vec![u32::MAX; 3]] {
        let mut expected = values.clone();
        expected.sort_unstable();
        for s in reg.iter() {
            let (_, out) = s
                .generator(values.clone(), &SortOptions::default())
                .run_to_end()
                .unwrap();
            assert_eq!(out.values, expected, "{}", s.key());
        }
    }
}

#[test]
fn lomuto_last_pivot_scenario() {
    let reg = SortingRegistry::new();
    let opts = SortOptions {
        pivot: PivotRule::Last,
        seed: 0,
    };
    let (records, out) = reg
        .get("lomuto-quick-sort")
        .unwrap()
        .generator(vec![5, 3, 1, 4, 2], &opts)
        .run_to_end()
        .unwrap();
    assert_eq!(out.values, vec![1, 2, 3, 4, 5]);
    let totals: Counts = records.iter().map(StepRecord::counts).sum();
    assert_eq!(totals.comparisons, 7);
    assert_eq!(totals.swaps, 5);
    assert_eq!(totals.accesses, 30);
}

#[test]
fn heap_sort_single_element_scenario() {
    let reg = SortingRegistry::new();
    let (records, out) = reg
        .get("heap-sort")
        .unwrap()
        .generator(vec![1], &SortOptions::default())
        .run_to_end()
        .unwrap();
    assert_eq!(out.values, vec![1]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].operation, Operation::Inspect);
    assert_eq!(records[0].swap_count, 0);
    assert!(!records[0].highlights.is_empty());
}

#[test]
fn random_pivot_runs_repeat_with_the_same_seed() {
    let reg = SortingRegistry::new();
    let opts = SortOptions {
        pivot: PivotRule::Random,
        seed: 99,
    };
    let values: Vec<u32> = (0..64).map(|i| (i * 29 + 7) % 64).collect();
    for key in ["lomuto-quick-sort", "hoare-quick-sort", "intro-sort"] {
        let s = reg.get(key).unwrap();
        let a = s.generator(values.clone(), &opts).run_to_end().unwrap();
        let b = s.generator(values.clone(), &opts).run_to_end().unwrap();
        assert_eq!(a, b, "{key}");
    }
}
