use stepwise_core::PriorityQueue;

use crate::search::{Frontier, PathGenerator, PathfindingStrategy, Query, Search, SearchState};
use crate::vertex::Vertex;

/// Dijkstra's algorithm: min-priority frontier keyed by accumulated cost.
///
/// A neighbor is re-enqueued whenever a strictly cheaper route to it is
/// found; the stale entries left behind are skipped when popped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathfindingStrategy for Dijkstra {
    fn key(&self) -> &'static str {
        "dijkstra"
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn generator(&self, query: Query) -> PathGenerator {
        Search::generator(self.name(), query, |state| {
            let mut dist = vec![f64::INFINITY; state.grid.len()];
            if let Some(i) = state.slot(state.start.coord) {
                dist[i] = 0.0;
            }
            let mut open = PriorityQueue::new();
            open.enqueue(state.start, 0.0);
            DijkstraFrontier { open, dist }
        })
    }
}

struct DijkstraFrontier {
    open: PriorityQueue<Vertex>,
    dist: Vec<f64>,
}

impl Frontier for DijkstraFrontier {
    fn pop(&mut self) -> Option<Vertex> {
        self.open.dequeue()
    }

    fn expand(&mut self, state: &mut SearchState, current: Vertex, neighbors: &[Vertex]) {
        let Some(ci) = state.slot(current.coord) else {
            return;
        };
        let base = self.dist[ci];
        for &n in neighbors {
            if state.is_closed(n) {
                continue;
            }
            let Some(ni) = state.slot(n.coord) else {
                continue;
            };
            let tentative = base + n.weight();
            if tentative < self.dist[ni] {
                self.dist[ni] = tentative;
                state.parents.set(n.coord, current.coord);
                self.open.enqueue(n, tentative);
            }
        }
    }
}
