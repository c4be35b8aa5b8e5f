use stepwise_core::PriorityQueue;

use crate::search::{Frontier, PathGenerator, PathfindingStrategy, Query, Search, SearchState};
use crate::vertex::Vertex;

/// Greedy best-first search: ordered purely by the heuristic estimate to the
/// end. Ignores terrain cost and is not guaranteed to find the cheapest path.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBestFirst;

impl PathfindingStrategy for GreedyBestFirst {
    fn key(&self) -> &'static str {
        "gbfs"
    }

    fn name(&self) -> &'static str {
        "Greedy Best-First"
    }

    fn uses_heuristic(&self) -> bool {
        true
    }

    fn generator(&self, query: Query) -> PathGenerator {
        Search::generator(self.name(), query, |state| {
            let mut discovered = vec![false; state.grid.len()];
            if let Some(i) = state.slot(state.start.coord) {
                discovered[i] = true;
            }
            let mut open = PriorityQueue::new();
            open.enqueue(state.start, state.estimate(state.start));
            GreedyFrontier { open, discovered }
        })
    }
}

struct GreedyFrontier {
    open: PriorityQueue<Vertex>,
    discovered: Vec<bool>,
}

impl Frontier for GreedyFrontier {
    fn pop(&mut self) -> Option<Vertex> {
        self.open.dequeue()
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
            self.open.enqueue(n, state.estimate(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::search::SearchOptions;
    use stepwise_core::Coord;

    #[test]
    fn heads_straight_for_the_end() {
        let g = Grid::parse("S....E").unwrap();
        let (snaps, path) = GreedyBestFirst
            .generator(Query::new(&g, SearchOptions::default()).unwrap())
            .run_to_end()
            .unwrap();
        assert_eq!(snaps.len(), 6);
        assert_eq!(path.len(), 6);
    }

    #[test]
    fn walks_through_costly_terrain() {
        // Greedy ignores the water cost that Dijkstra would route around.
        let g = Grid::parse("S~E\n...").unwrap();
        let opts = SearchOptions { diagonal: false, ..Default::default() };
        let (_, path) = GreedyBestFirst
            .generator(Query::new(&g, opts).unwrap())
            .run_to_end()
            .unwrap();
        let coords: Vec<_> = path.coords().collect();
        assert_eq!(coords, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
    }
}
