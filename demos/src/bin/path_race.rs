//! Run every pathfinding strategy over one generated terrain grid and print
//! the grid with each strategy's path.
//!
//! Usage: `path-race [rows] [cols] [seed] [--no-diagonal] [--random]`

use rand::SeedableRng;
use rand::rngs::StdRng;
use stepwise_core::Coord;
use stepwise_paths::{Grid, Heuristic, PathfindingRegistry, SearchOptions, Terrain, TerrainGen};
use stepwise_session::{Event, Outcome, Session, SessionConfig, Status};
use stepwise_sort::SortingRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let flags: Vec<&str> = args.iter().map(String::as_str).filter(|a| a.starts_with("--")).collect();
    let mut nums = args.iter().filter(|a| !a.starts_with("--"));
    let rows: i32 = nums.next().map(|s| s.parse()).transpose()?.unwrap_or(16);
    let cols: i32 = nums.next().map(|s| s.parse()).transpose()?.unwrap_or(40);
    let seed: u64 = nums.next().map(|s| s.parse()).transpose()?.unwrap_or(1);
    let diagonal = !flags.contains(&"--no-diagonal");

    let mut grid = Grid::new(rows, cols);
    let mut terrain = TerrainGen::new(StdRng::seed_from_u64(seed));
    if flags.contains(&"--random") {
        terrain.randomize(&mut grid);
    } else {
        grid.set(Coord::new(0, 0), Terrain::Start);
        grid.set(Coord::new(rows - 1, cols - 1), Terrain::End);
        terrain.noise(&mut grid);
    }
    println!("{grid}");

    let paths = PathfindingRegistry::new();
    let sorts = SortingRegistry::new();
    let mut session = Session::new(&paths, &sorts, SessionConfig::default());
    session.set_grid(grid);
    let options = SearchOptions {
        diagonal,
        heuristic: if diagonal { Heuristic::Octile } else { Heuristic::Manhattan },
    };

    for strategy in paths.iter() {
        session.start_search(strategy.key(), options)?;
        let mut visited = 0;
        for event in session.run_to_end() {
            if let Event::Visited(snapshot) = event {
                visited = snapshot.len();
            }
        }
        match session.status() {
            Status::Finished(Outcome::PathFound { vertices, cost }) => {
                println!("{}: {vertices} vertices, cost {cost}, {visited} visited", strategy.name());
                let on_path = &session.overlay().path;
                let drawn = session.grid().render_with(|c| {
                    let v = on_path.iter().find(|v| v.coord == c)?;
                    (!v.terrain.is_terminal()).then_some('+')
                });
                println!("{drawn}");
            }
            Status::Finished(Outcome::NoPath) => {
                println!("{}: no path, {visited} visited\n", strategy.name());
            }
            other => println!("{}: {other:?}\n", strategy.name()),
        }
    }
    Ok(())
}
