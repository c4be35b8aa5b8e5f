//! Property tests for the session driver: however a run is sliced into
//! ticks, steps and pauses, the caller sees the same event sequence.

use proptest::prelude::*;
use stepwise_paths::{PathfindingRegistry, SearchOptions, TerrainGen};
use stepwise_session::{Event, Session, SessionConfig, Status};
use stepwise_sort::{DataPattern, SortOptions, SortingRegistry};

use rand::SeedableRng;
use rand::rngs::StdRng;

fn uninterrupted(session: &mut Session<'_>) -> Vec<Event> {
    session.run_to_end()
}

fn sliced(session: &mut Session<'_>, slices: &[usize]) -> Vec<Event> {
    let mut events = Vec::new();
    for &n in slices.iter().cycle() {
        if !session.status().is_running() {
            break;
        }
        events.extend(session.advance(n));
        session.pause();
        assert!(session.step().is_none());
        session.resume();
    }
    events
}

proptest! {
    #[test]
    fn sort_events_do_not_depend_on_slicing(
        seed in any::<u64>(),
        n in 0usize..30,
        key_index in 0usize..26,
        slices in prop::collection::vec(1usize..12, 1..6),
    ) {
        let paths = PathfindingRegistry::new();
        let sorts = SortingRegistry::new();
        let key = sorts.keys().nth(key_index).unwrap();
        let values = DataPattern::Random.generate(n, &mut StdRng::seed_from_u64(seed));
        let opts = SortOptions { seed, ..Default::default() };

        let mut a = Session::new(&paths, &sorts, SessionConfig::default());
        a.replace_array(values.clone());
        a.start_sort(key, &opts).unwrap();
        let whole = uninterrupted(&mut a);

        let mut b = Session::new(&paths, &sorts, SessionConfig::default());
        b.replace_array(values);
        b.start_sort(key, &opts).unwrap();
        let parts = sliced(&mut b, &slices);

        prop_assert_eq!(&parts, &whole);
        prop_assert_eq!(a.array(), b.array());
        prop_assert!(a.array().is_sorted());
        let swept_sorted = matches!(whole.last(), Some(Event::Swept { sorted: true, .. }));
        prop_assert!(swept_sorted);
    }

    #[test]
    fn search_events_do_not_depend_on_slicing(
        seed in any::<u64>(),
        key_index in 0usize..5,
        slices in prop::collection::vec(1usize..8, 1..6),
    ) {
        let paths = PathfindingRegistry::new();
        let sorts = SortingRegistry::new();
        let key = paths.keys().nth(key_index).unwrap();
        let mut grid = stepwise_paths::Grid::new(6, 9);
        TerrainGen::new(StdRng::seed_from_u64(seed)).randomize(&mut grid);

        let mut a = Session::new(&paths, &sorts, SessionConfig::default());
        a.set_grid(grid.clone());
        a.start_search(key, SearchOptions::default()).unwrap();
        let whole = uninterrupted(&mut a);

        let mut b = Session::new(&paths, &sorts, SessionConfig::default());
        b.set_grid(grid);
        b.start_search(key, SearchOptions::default()).unwrap();
        let parts = sliced(&mut b, &slices);

        prop_assert_eq!(&parts, &whole);
        let finished = matches!(a.status(), Status::Finished(_));
        prop_assert!(finished);
    }
}
