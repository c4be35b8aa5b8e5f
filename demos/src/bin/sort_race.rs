//! Race every registered sort over one seeded array and print the totals.
//!
//! Usage: `sort-race [size] [pattern] [pivot] [seed]`

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use stepwise_paths::PathfindingRegistry;
use stepwise_session::{Event, Session, SessionConfig};
use stepwise_sort::{Counts, DataPattern, PivotRule, SortOptions, SortingRegistry};

/// Simulated frame time handed to the session on every tick.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let size: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(64);
    let pattern: DataPattern = args.next().map(|s| s.parse()).transpose()?.unwrap_or_default();
    let pivot: PivotRule = args.next().map(|s| s.parse()).transpose()?.unwrap_or_default();
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(7);

    let values = pattern.generate(size, &mut StdRng::seed_from_u64(seed));
    let paths = PathfindingRegistry::new();
    let sorts = SortingRegistry::new();
    let mut session = Session::new(&paths, &sorts, SessionConfig::default());
    let options = SortOptions { pivot, seed };

    println!("{size} values, pattern {pattern}, pivot {pivot}, seed {seed}\n");
    println!(
        "{:<32} {:>9} {:>11} {:>8} {:>8} {:>7} {:>7}",
        "strategy", "accesses", "comparisons", "swaps", "shifts", "frames", "sorted"
    );

    let mut results = Vec::with_capacity(sorts.len());
    for strategy in sorts.iter() {
        session.replace_array(values.clone());
        session.start_sort(strategy.key(), &options)?;

        let mut frames = 0u64;
        let mut totals = Counts::default();
        let mut sorted = false;
        while session.status().is_running() {
            frames += 1;
            for event in session.tick(FRAME) {
                match event {
                    Event::Sorted(counts) => totals = counts,
                    Event::Swept { sorted: ok, .. } => sorted = ok,
                    Event::Failed(e) => return Err(e.into()),
                    _ => {}
                }
            }
        }
        println!(
            "{:<32} {:>9} {:>11} {:>8} {:>8} {:>7} {:>7}",
            strategy.name(),
            totals.accesses,
            totals.comparisons,
            totals.swaps,
            totals.shifts,
            frames,
            if sorted { "yes" } else { "NO" }
        );
        results.push((strategy.name(), totals));
    }

    if let Some((name, best)) = results.iter().min_by_key(|(_, c)| c.accesses) {
        println!("\nfewest accesses: {name} ({})", best.accesses);
    }
    Ok(())
}
