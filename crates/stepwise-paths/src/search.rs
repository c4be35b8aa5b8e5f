//! The pathfinding strategy contract and the shared search loop.
//!
//! Every strategy runs the same loop: pop a vertex by the strategy's ordering
//! rule, close it, yield a [`Snapshot`] of the closed set and, if it was the
//! end vertex, return the reconstructed [`Path`]. Strategies differ only in
//! their [`Frontier`]: how vertices are stored, ordered and relaxed.

use stepwise_core::{Coord, Error, Generator, Resume, Result, Stepper};

use crate::grid::Grid;
use crate::heuristics::Heuristic;
use crate::neighbors::Neighbors;
use crate::path::{ParentMap, Path, Snapshot, reconstruct_path};
use crate::vertex::Vertex;

/// Generator type produced by every pathfinding strategy.
pub type PathGenerator = Generator<Snapshot, Path>;

/// User-selectable search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Allow the four diagonal moves.
    pub diagonal: bool,
    /// Distance estimate for A* and greedy best-first.
    pub heuristic: Heuristic,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            diagonal: true,
            heuristic: Heuristic::Manhattan,
        }
    }
}

/// Everything a strategy needs to start a search.
///
/// The grid is copied so a running search is unaffected by later edits.
#[derive(Debug, Clone)]
pub struct Query {
    grid: Grid,
    start: Vertex,
    end: Vertex,
    options: SearchOptions,
}

impl Query {
    /// Fails with [`Error::MissingTerminal`] unless both terminals are placed.
    pub fn new(grid: &Grid, options: SearchOptions) -> Result<Query> {
        let (start, end) = grid.terminals()?;
        Ok(Query {
            grid: grid.clone(),
            start,
            end,
            options,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn end(&self) -> Vertex {
        self.end
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }
}

/// A pluggable pathfinding algorithm.
pub trait PathfindingStrategy {
    /// Stable registry key, e.g. `"a-star"`.
    fn key(&self) -> &'static str;

    /// Display name, also used in [`Error::NoPathFound`].
    fn name(&self) -> &'static str;

    /// Whether the strategy consults [`SearchOptions::heuristic`].
    fn uses_heuristic(&self) -> bool {
        false
    }

    /// Start a new search.
    fn generator(&self, query: Query) -> PathGenerator;
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Closed set, parent map and grid shared by all frontiers.
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) grid: Grid,
    pub(crate) start: Vertex,
    pub(crate) end: Vertex,
    pub(crate) options: SearchOptions,
    pub(crate) parents: ParentMap,
    closed: Vec<bool>,
    order: Vec<Vertex>,
}

impl SearchState {
    fn new(query: Query) -> Self {
        let bounds = query.grid.bounds();
        Self {
            parents: ParentMap::new(bounds),
            closed: vec![false; bounds.len()],
            order: Vec::new(),
            grid: query.grid,
            start: query.start,
            end: query.end,
            options: query.options,
        }
    }

    /// Flat index of `c`. Callers only pass coordinates taken from the grid.
    #[inline]
    pub(crate) fn slot(&self, c: Coord) -> Option<usize> {
        self.grid.bounds().index(c)
    }

    pub(crate) fn is_closed(&self, v: Vertex) -> bool {
        self.slot(v.coord).is_some_and(|i| self.closed[i])
    }

    /// Heuristic estimate from `v` to the end vertex.
    pub(crate) fn estimate(&self, v: Vertex) -> f64 {
        self.options.heuristic.distance(v.coord, self.end.coord)
    }

    fn close(&mut self, v: Vertex) -> Snapshot {
        if let Some(i) = self.slot(v.coord) {
            self.closed[i] = true;
        }
        self.order.push(v);
        Snapshot::new(self.order.clone())
    }
}

/// Frontier policy of one strategy.
pub(crate) trait Frontier {
    /// Next candidate vertex, or `None` once the frontier is exhausted.
    ///
    /// Candidates that were closed in the meantime are skipped by the loop.
    fn pop(&mut self) -> Option<Vertex>;

    /// Push or relax the enterable `neighbors` of the just-closed `current`.
    fn expand(&mut self, state: &mut SearchState, current: Vertex, neighbors: &[Vertex]);
}

/// The shared search loop, parameterized by a frontier.
pub(crate) struct Search<F> {
    name: &'static str,
    state: SearchState,
    frontier: F,
    neighbors: Neighbors,
    /// Vertex closed by the previous resume, expanded by the next one.
    pending: Option<Vertex>,
}

impl<F: Frontier + 'static> Search<F> {
    /// Build a generator; `seed` initializes the frontier with the start vertex.
    pub(crate) fn generator(
        name: &'static str,
        query: Query,
        seed: impl FnOnce(&SearchState) -> F,
    ) -> PathGenerator {
        let state = SearchState::new(query);
        let frontier = seed(&state);
        Generator::new(Search {
            name,
            state,
            frontier,
            neighbors: Neighbors::new(),
            pending: None,
        })
    }
}

impl<F: Frontier> Stepper for Search<F> {
    type Yield = Snapshot;
    type Return = Path;

    fn resume(&mut self) -> Result<Resume<Snapshot, Path>> {
        if let Some(current) = self.pending.take() {
            if current.coord == self.state.end.coord {
                let path = reconstruct_path(
                    &self.state.parents,
                    &self.state.grid,
                    self.state.start.coord,
                    current.coord,
                )?;
                return Ok(Resume::Return(path));
            }
            let mut nb = std::mem::take(&mut self.neighbors);
            let ns = nb.compose(&self.state.grid, current, self.state.options.diagonal);
            self.frontier.expand(&mut self.state, current, ns);
            self.neighbors = nb;
        }
        while let Some(current) = self.frontier.pop() {
            if self.state.is_closed(current) {
                continue;
            }
            self.pending = Some(current);
            return Ok(Resume::Yield(self.state.close(current)));
        }
        Err(Error::NoPathFound {
            strategy: self.name,
        })
    }
}
