use stepwise_core::Coord;

use crate::grid::Grid;
use crate::vertex::{Terrain, Vertex};

/// Orthogonal steps: up, down, right, left.
const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Diagonal steps: up-left, down-left, down-right, up-right.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Cached neighbor enumeration.
///
/// Yields the enterable neighbors of a vertex in a fixed order: orthogonal
/// first, then diagonal when enabled. Walls, cells outside the grid and the
/// start vertex are never enterable; the end vertex is.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Vertex>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Enterable neighbors of `v`.
    ///
    /// A diagonal step is dropped when both orthogonal cells it passes
    /// between are blocked (outside the grid or walls).
    pub fn compose(&mut self, grid: &Grid, v: Vertex, diagonal: bool) -> &[Vertex] {
        self.buf.clear();
        let p = v.coord;
        for (dr, dc) in ORTHOGONAL {
            if let Some(n) = enterable(grid, p.shift(dr, dc)) {
                self.buf.push(n);
            }
        }
        if diagonal {
            for (dr, dc) in DIAGONAL {
                if blocked(grid, p.shift(dr, 0)) && blocked(grid, p.shift(0, dc)) {
                    continue;
                }
                if let Some(n) = enterable(grid, p.shift(dr, dc)) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

/// Convenience wrapper around [`Neighbors::compose`] returning an owned list.
pub fn compose_neighbors(grid: &Grid, v: Vertex, diagonal: bool) -> Vec<Vertex> {
    Neighbors::new().compose(grid, v, diagonal).to_vec()
}

fn enterable(grid: &Grid, c: Coord) -> Option<Vertex> {
    grid.at(c)
        .filter(|n| !matches!(n.terrain, Terrain::Wall | Terrain::Start))
}

fn blocked(grid: &Grid, c: Coord) -> bool {
    grid.at(c).is_none_or(|n| n.terrain.is_wall())
}
