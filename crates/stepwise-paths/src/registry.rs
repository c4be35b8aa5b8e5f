use stepwise_core::{Error, KeyFamily, Result};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::gbfs::GreedyBestFirst;
use crate::search::PathfindingStrategy;

/// Key-indexed set of pathfinding strategies.
///
/// Built once and passed by reference to whoever needs to resolve a key.
pub struct PathfindingRegistry {
    strategies: Vec<Box<dyn PathfindingStrategy>>,
}

impl Default for PathfindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PathfindingRegistry {
    /// Registry holding the five built-in strategies.
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(Bfs),
                Box::new(Dfs),
                Box::new(Dijkstra),
                Box::new(AStar),
                Box::new(GreedyBestFirst),
            ],
        }
    }

    /// Look up a strategy, failing with [`Error::UnknownKey`].
    pub fn get(&self, key: &str) -> Result<&dyn PathfindingStrategy> {
        match self.strategies.iter().find(|s| s.key() == key) {
            Some(s) => Ok(s.as_ref()),
            None => {
                log::warn!("unknown pathfinding key {key:?}");
                Err(Error::unknown_key(KeyFamily::Pathfinding, key))
            }
        }
    }

    /// Registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|s| s.key())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PathfindingStrategy> {
        self.strategies.iter().map(|s| s.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_key() {
        let reg = PathfindingRegistry::new();
        let keys: Vec<_> = reg.keys().collect();
        assert_eq!(keys, vec!["bfs", "dfs", "dijkstra", "a-star", "gbfs"]);
        for k in keys {
            assert_eq!(reg.get(k).unwrap().key(), k);
        }
    }

    #[test]
    fn heuristic_users() {
        let reg = PathfindingRegistry::new();
        let users: Vec<_> = reg.iter().filter(|s| s.uses_heuristic()).map(|s| s.key()).collect();
        assert_eq!(users, vec!["a-star", "gbfs"]);
    }

    #[test]
    fn unknown_key_fails_fast() {
        let reg = PathfindingRegistry::new();
        assert_eq!(
            reg.get("jps").err(),
            Some(Error::unknown_key(KeyFamily::Pathfinding, "jps"))
        );
    }
}
