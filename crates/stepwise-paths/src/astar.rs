use stepwise_core::PriorityQueue;

use crate::search::{Frontier, PathGenerator, PathfindingStrategy, Query, Search, SearchState};
use crate::vertex::Vertex;

/// A* search: Dijkstra ordered by `g + h`, where `g` is the accumulated cost
/// (kept in a separate score table) and `h` the heuristic estimate to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl PathfindingStrategy for AStar {
    fn key(&self) -> &'static str {
        "a-star"
    }

    fn name(&self) -> &'static str {
        "A*"
    }

    fn uses_heuristic(&self) -> bool {
        true
    }

    fn generator(&self, query: Query) -> PathGenerator {
        Search::generator(self.name(), query, |state| {
            let mut g_score = vec![f64::INFINITY; state.grid.len()];
            if let Some(i) = state.slot(state.start.coord) {
                g_score[i] = 0.0;
            }
            let mut open = PriorityQueue::new();
            open.enqueue(state.start, state.estimate(state.start));
            AStarFrontier { open, g_score }
        })
    }
}

struct AStarFrontier {
    open: PriorityQueue<Vertex>,
    g_score: Vec<f64>,
}

impl Frontier for AStarFrontier {
    fn pop(&mut self) -> Option<Vertex> {
        self.open.dequeue()
    }

    fn expand(&mut self, state: &mut SearchState, current: Vertex, neighbors: &[Vertex]) {
        let Some(ci) = state.slot(current.coord) else {
            return;
        };
        let g = self.g_score[ci];
        for &n in neighbors {
            if state.is_closed(n) {
                continue;
            }
            let Some(ni) = state.slot(n.coord) else {
                continue;
            };
            let tentative = g + n.weight();
            if tentative < self.g_score[ni] {
                self.g_score[ni] = tentative;
                state.parents.set(n.coord, current.coord);
                self.open.enqueue(n, tentative + state.estimate(n));
            }
        }
    }
}
