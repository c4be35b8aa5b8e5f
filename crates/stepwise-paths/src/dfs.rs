use crate::search::{Frontier, PathGenerator, PathfindingStrategy, Query, Search, SearchState};
use crate::vertex::Vertex;

/// Depth-first search: LIFO frontier.
///
/// Neighbors are pushed in reverse so the first-listed one is explored first.
/// A vertex may sit on the stack several times; duplicates are dropped when
/// popped after the vertex was closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl PathfindingStrategy for Dfs {
    fn key(&self) -> &'static str {
        "dfs"
    }

    fn name(&self) -> &'static str {
        "DFS"
    }

    fn generator(&self, query: Query) -> PathGenerator {
        Search::generator(self.name(), query, |state| DfsFrontier {
            stack: vec![state.start],
        })
    }
}

struct DfsFrontier {
    stack: Vec<Vertex>,
}

impl Frontier for DfsFrontier {
    fn pop(&mut self) -> Option<Vertex> {
        self.stack.pop()
    }

    fn expand(&mut self, state: &mut SearchState, current: Vertex, neighbors: &[Vertex]) {
        for &n in neighbors.iter().rev() {
            if state.is_closed(n) {
                continue;
            }
            state.parents.set(n.coord, current.coord);
            self.stack.push(n);
        }
    }
}
