use stepwise_core::Queue;

use crate::search::{Frontier, PathGenerator, PathfindingStrategy, Query, Search, SearchState};
use crate::vertex::Vertex;

/// Breadth-first search: FIFO frontier, each vertex enqueued on first
/// discovery only. Finds the path with the fewest moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl PathfindingStrategy for Bfs {
    fn key(&self) -> &'static str {
        "bfs"
    }

    fn name(&self) -> &'static str {
        "BFS"
    }

    fn generator(&self, query: Query) -> PathGenerator {
        Search::generator(self.name(), query, |state| {
            let mut discovered = vec![false; state.grid.len()];
            if let Some(i) = state.slot(state.start.coord) {
                discovered[i] = true;
            }
            BfsFrontier {
                queue: [state.start].into_iter().collect(),
                discovered,
            }
        })
    }
}

struct BfsFrontier {
    queue: Queue<Vertex>,
    discovered: Vec<bool>,
}

impl Frontier for BfsFrontier {
    fn pop(&mut self) -> Option<Vertex> {
        self.queue.dequeue()
    }

    fn expand(&mut self, state: &mut SearchState, current: Vertex, neighbors: &[Vertex]) {
        for &n in neighbors {
            let Some(i) = state.slot(n.coord) else {
                continue;
            };
            if self.discovered[i] {
                continue;
            }
            self.discovered[i] = true;
            state.parents.set(n.coord, current.coord);
            self.queue.enqueue(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::search::SearchOptions;
    use stepwise_core::{Coord, Error, Resume};

    #[test]
    fn first_yield_closes_start() {
        let g = Grid::parse("S.E").unwrap();
        let mut run = Bfs.generator(Query::new(&g, SearchOptions::default()).unwrap());
        let Resume::Yield(snap) = run.resume().unwrap() else {
            panic!("expected a snapshot");
        };
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.latest().unwrap().coord, Coord::new(0, 0));
    }

    #[test]
    fn snapshots_grow_by_one() {
        let g = Grid::parse("S..\n...\n..E").unwrap();
        let mut run = Bfs.generator(Query::new(&g, SearchOptions::default()).unwrap());
        let (snaps, path) = run.run_to_end().unwrap();
        for (i, s) in snaps.iter().enumerate() {
            assert_eq!(s.len(), i + 1);
        }
        assert_eq!(snaps.last().unwrap().latest().unwrap().coord, Coord::new(2, 2));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn fewest_moves_ignores_weights() {
        let g = Grid::parse("SWE\n...").unwrap();
        let opts = SearchOptions { diagonal: false, ..Default::default() };
        let mut run = Bfs.generator(Query::new(&g, opts).unwrap());
        let (_, path) = run.run_to_end().unwrap();
        let coords: Vec<_> = path.coords().collect();
        assert_eq!(coords, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(path.cost(), 129.0);
    }

    #[test]
    fn walled_off_end_is_no_path() {
        let g = Grid::parse("S#E").unwrap();
        let mut run = Bfs.generator(Query::new(&g, SearchOptions::default()).unwrap());
        assert!(matches!(run.resume(), Ok(Resume::Yield(_))));
        assert_eq!(run.resume(), Err(Error::NoPathFound { strategy: "BFS" }));
    }
}
