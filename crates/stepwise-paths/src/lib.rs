//! Stepwise pathfinding over a weighted terrain grid.
//!
//! Every strategy produces a [`PathGenerator`]: each resume closes one vertex
//! and yields a [`Snapshot`] of the closed set; the final resume returns the
//! reconstructed [`Path`]. An exhausted frontier ends the run with
//! [`Error::NoPathFound`](stepwise_core::Error::NoPathFound).
//!
//! | Key | Strategy | Frontier |
//! |---|---|---|
//! | `bfs` | [`Bfs`] | FIFO queue |
//! | `dfs` | [`Dfs`] | stack |
//! | `dijkstra` | [`Dijkstra`] | priority = accumulated cost |
//! | `a-star` | [`AStar`] | priority = cost + heuristic |
//! | `gbfs` | [`GreedyBestFirst`] | priority = heuristic |
//!
//! The grid model ([`Grid`], [`Vertex`], [`Terrain`]), neighbor enumeration
//! with the corner-cutting rule ([`compose_neighbors`]) and the terrain
//! generators ([`TerrainGen`]) live here as well.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod gbfs;
mod grid;
mod heuristics;
mod neighbors;
mod path;
mod registry;
mod search;
mod terrain;
mod vertex;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use gbfs::GreedyBestFirst;
pub use grid::Grid;
pub use heuristics::{Heuristic, chebyshev, diagonal, euclidean, manhattan, octile};
pub use neighbors::{Neighbors, compose_neighbors};
pub use path::{ParentMap, Path, Snapshot, reconstruct_path};
pub use registry::PathfindingRegistry;
pub use search::{PathGenerator, PathfindingStrategy, Query, SearchOptions};
pub use terrain::{Perlin, TerrainGen, noise_scale};
pub use vertex::{Terminal, Terrain, Vertex};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn terrain_uses_kebab_keys() {
        let json = serde_json::to_string(&Terrain::WaterDeep).unwrap();
        assert_eq!(json, "\"water-deep\"");
        let back: Terrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Terrain::WaterDeep);
    }

    #[test]
    fn search_options_roundtrip() {
        let opts = SearchOptions {
            diagonal: false,
            heuristic: Heuristic::Octile,
        };
        let json = serde_json::to_string(&opts).unwrap();
        let back: SearchOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
        let partial: SearchOptions = serde_json::from_str(r#"{"heuristic":"chebyshev"}"#).unwrap();
        assert!(partial.diagonal);
        assert_eq!(partial.heuristic, Heuristic::Chebyshev);
    }

    #[test]
    fn snapshot_roundtrip() {
        let g = Grid::parse("S~E").unwrap();
        let snap = Snapshot::new(g.iter().copied().collect());
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
