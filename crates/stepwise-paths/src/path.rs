//! Search results: closed-set snapshots, parent maps and reconstructed paths.

use stepwise_core::{Bounds, Coord, Invariant, Result};

use crate::grid::Grid;
use crate::vertex::Vertex;

/// Copy of the closed set at one point of a search, in closing order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    closed: Vec<Vertex>,
}

impl Snapshot {
    pub fn new(closed: Vec<Vertex>) -> Self {
        Self { closed }
    }

    pub fn closed(&self) -> &[Vertex] {
        &self.closed
    }

    /// The vertex closed by the step that produced this snapshot.
    pub fn latest(&self) -> Option<Vertex> {
        self.closed.last().copied()
    }

    pub fn len(&self) -> usize {
        self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.closed
    }
}

/// An ordered path from start to end, both inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.vertices.iter().map(|v| v.coord)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of entry costs along the path; the start vertex is free.
    pub fn cost(&self) -> f64 {
        self.vertices.iter().skip(1).map(Vertex::weight).sum()
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

/// Parent pointers indexed by flat grid position.
#[derive(Debug, Clone)]
pub struct ParentMap {
    bounds: Bounds,
    parents: Vec<Option<Coord>>,
}

impl ParentMap {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            parents: vec![None; bounds.len()],
        }
    }

    /// Record `parent` as the predecessor of `child`. Out-of-bounds children are ignored.
    pub fn set(&mut self, child: Coord, parent: Coord) {
        if let Some(i) = self.bounds.index(child) {
            self.parents[i] = Some(parent);
        }
    }

    pub fn get(&self, child: Coord) -> Option<Coord> {
        self.bounds.index(child).and_then(|i| self.parents[i])
    }
}

/// Walk parent pointers from `end` back to `start`.
///
/// A missing parent before `start` is reached, or a chain longer than the
/// grid, is a [`Invariant::BrokenParentChain`].
pub fn reconstruct_path(parents: &ParentMap, grid: &Grid, start: Coord, end: Coord) -> Result<Path> {
    let mut coords = vec![end];
    let mut current = end;
    while current != start {
        if coords.len() > grid.len() {
            return Err(Invariant::BrokenParentChain(current).into());
        }
        current = parents
            .get(current)
            .ok_or(Invariant::BrokenParentChain(current))?;
        coords.push(current);
    }
    coords.reverse();
    let vertices = coords
        .into_iter()
        .map(|c| grid.at(c).ok_or(Invariant::BrokenParentChain(c)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Path { vertices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_core::Error;

    #[test]
    fn walks_back_to_start() {
        let g = Grid::parse("S.\n.E").unwrap();
        let mut parents = ParentMap::new(g.bounds());
        parents.set(Coord::new(0, 1), Coord::new(0, 0));
        parents.set(Coord::new(1, 1), Coord::new(0, 1));
        let p = reconstruct_path(&parents, &g, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        let coords: Vec<_> = p.coords().collect();
        assert_eq!(coords, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
        assert_eq!(p.cost(), 2.0);
    }

    #[test]
    fn missing_parent_is_invariant_violation() {
        let g = Grid::new(2, 2);
        let mut parents = ParentMap::new(g.bounds());
        parents.set(Coord::new(1, 1), Coord::new(1, 0));
        let err = reconstruct_path(&parents, &g, Coord::new(0, 0), Coord::new(1, 1)).unwrap_err();
        assert_eq!(err, Error::Invariant(Invariant::BrokenParentChain(Coord::new(1, 0))));
    }

    #[test]
    fn cycle_is_invariant_violation() {
        let g = Grid::new(1, 3);
        let mut parents = ParentMap::new(g.bounds());
        parents.set(Coord::new(0, 2), Coord::new(0, 1));
        parents.set(Coord::new(0, 1), Coord::new(0, 2));
        let err = reconstruct_path(&parents, &g, Coord::new(0, 0), Coord::new(0, 2)).unwrap_err();
        assert!(matches!(err, Error::Invariant(Invariant::BrokenParentChain(_))));
    }

    #[test]
    fn snapshot_latest() {
        let g = Grid::new(1, 2);
        let s = Snapshot::new(g.iter().copied().collect());
        assert_eq!(s.len(), 2);
        assert_eq!(s.latest().map(|v| v.coord), Some(Coord::new(0, 1)));
    }
}
