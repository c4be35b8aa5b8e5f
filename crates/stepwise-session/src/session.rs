//! The single-run execution driver.
//!
//! A [`Session`] owns the grid, the displayed array and at most one live
//! generator. Callers poll it with [`Session::tick`] (paced by wall-clock
//! time) or [`Session::step`]/[`Session::advance`] (explicit step counts);
//! every resume comes back as an [`Event`]. Generator errors never escape:
//! they become a terminal [`Status`].

use std::time::Duration;

use stepwise_core::{Coord, Error, ErrorKind, Resume, Result};
use stepwise_paths::{
    Grid, Path, PathGenerator, PathfindingRegistry, Query, SearchOptions, Snapshot, Terminal,
};
use stepwise_sort::{
    SortArray, SortGenerator, SortOptions, SortOutcome, SortingRegistry, StepRecord,
    SweepGenerator, SweepOutcome, sweep,
};

use crate::config::SessionConfig;
use crate::event::{Event, Outcome, Overlay, Phase, Stats, Status};
use crate::pacer::Pacer;

enum Live {
    Search {
        run: PathGenerator,
        strategy: &'static str,
        start: Coord,
        end: Coord,
    },
    Sort {
        run: SortGenerator,
        strategy: &'static str,
    },
    Sweep {
        run: SweepGenerator,
    },
}

/// Result of one resume, taken out of the live generator before the session
/// reacts to it.
enum Resumed {
    Invalidated,
    Search(Result<Resume<Snapshot, Path>>),
    Sort(Result<Resume<StepRecord, SortOutcome>>),
    Sweep(Result<Resume<StepRecord, SweepOutcome>>),
}

pub struct Session<'r> {
    paths: &'r PathfindingRegistry,
    sorts: &'r SortingRegistry,
    config: SessionConfig,
    pacer: Pacer,
    grid: Grid,
    array: SortArray,
    seed: Vec<u32>,
    live: Option<Live>,
    status: Status,
    stats: Stats,
    overlay: Overlay,
}

impl<'r> Session<'r> {
    pub fn new(
        paths: &'r PathfindingRegistry,
        sorts: &'r SortingRegistry,
        config: SessionConfig,
    ) -> Self {
        Self {
            paths,
            sorts,
            config,
            pacer: Pacer::new(&config),
            grid: Grid::new(0, 0),
            array: SortArray::default(),
            seed: Vec::new(),
            live: None,
            status: Status::Idle,
            stats: Stats::default(),
            overlay: Overlay::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Change pacing; carried-over time is dropped.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
        self.pacer = Pacer::new(&config);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access. Moving a terminal while a search runs
    /// invalidates that search on its next step.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    /// Install new array contents, which also become the reset point. A
    /// sort or sweep in progress is cancelled.
    pub fn replace_array(&mut self, values: Vec<u32>) {
        if matches!(self.phase(), Some(Phase::Sorting | Phase::Sweeping)) {
            self.cancel();
        }
        self.seed = values.clone();
        self.array = SortArray::new(values);
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn phase(&self) -> Option<Phase> {
        self.live.as_ref().map(|live| match live {
            Live::Search { .. } => Phase::Searching,
            Live::Sort { .. } => Phase::Sorting,
            Live::Sweep { .. } => Phase::Sweeping,
        })
    }

    // -----------------------------------------------------------------------
    // Starting runs
    // -----------------------------------------------------------------------

    /// Start a search over the current grid, replacing any live run.
    ///
    /// Unknown keys and missing terminals are rejected before anything
    /// changes.
    pub fn start_search(&mut self, key: &str, options: SearchOptions) -> Result<()> {
        let strategy = self.paths.get(key)?;
        let query = Query::new(&self.grid, options)?;
        let (start, end) = (query.start().coord, query.end().coord);
        self.discard();
        log::info!(
            "{} from {start} to {end} (diagonal: {}, heuristic: {})",
            strategy.name(),
            options.diagonal,
            options.heuristic
        );
        self.live = Some(Live::Search {
            run: strategy.generator(query),
            strategy: strategy.name(),
            start,
            end,
        });
        self.status = Status::Running;
        Ok(())
    }

    /// Start sorting the displayed array as it is now, replacing any live
    /// run.
    pub fn start_sort(&mut self, key: &str, options: &SortOptions) -> Result<()> {
        let strategy = self.sorts.get(key)?;
        self.discard();
        log::info!("{} over {} values", strategy.name(), self.array.len());
        self.live = Some(Live::Sort {
            run: strategy.generator(self.array.values().to_vec(), options),
            strategy: strategy.name(),
        });
        self.status = Status::Running;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    pub fn pause(&mut self) {
        if self.status.is_running() {
            log::debug!("paused after {} steps", self.stats.steps);
            self.status = Status::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            log::debug!("resumed");
            self.status = Status::Running;
        }
    }

    /// Drop the live run and its visual side effects.
    pub fn cancel(&mut self) {
        if self.live.is_some() {
            log::debug!("cancelled {:?}", self.phase());
        }
        self.discard();
        self.status = Status::Idle;
    }

    /// Cancel, then restore the array to the contents last installed with
    /// [`replace_array`](Self::replace_array).
    pub fn reset(&mut self) {
        self.cancel();
        self.array = SortArray::new(self.seed.clone());
    }

    fn discard(&mut self) {
        self.live = None;
        self.stats = Stats::default();
        self.overlay.clear();
        self.pacer.reset();
    }

    fn finish(&mut self, outcome: Outcome) {
        self.live = None;
        self.status = Status::Finished(outcome);
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Resume the live generator once. `None` unless running.
    pub fn step(&mut self) -> Option<Event> {
        if !self.status.is_running() {
            return None;
        }
        let resumed = match self.live.as_mut()? {
            Live::Search { run, start, end, .. } => {
                let moved = self.grid.terminal(Terminal::Start) != Some(*start)
                    || self.grid.terminal(Terminal::End) != Some(*end);
                if moved {
                    Resumed::Invalidated
                } else {
                    Resumed::Search(run.resume())
                }
            }
            Live::Sort { run, .. } => Resumed::Sort(run.resume()),
            Live::Sweep { run } => Resumed::Sweep(run.resume()),
        };
        Some(self.react(resumed))
    }

    /// Up to `n` steps, stopping early when the run ends or pauses.
    pub fn advance(&mut self, n: usize) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..n {
            match self.step() {
                Some(e) => events.push(e),
                None => break,
            }
        }
        events
    }

    /// Steps owed for `elapsed` wall-clock time under the configured pacing.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Event> {
        if !self.status.is_running() {
            return Vec::new();
        }
        let n = self.pacer.steps(elapsed);
        self.advance(n)
    }

    /// Run until the session stops running.
    pub fn run_to_end(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(e) = self.step() {
            events.push(e);
        }
        events
    }

    fn react(&mut self, resumed: Resumed) -> Event {
        match resumed {
            Resumed::Invalidated => {
                log::warn!("terminals moved during the search, run dropped");
                self.discard();
                self.status = Status::Idle;
                Event::Invalidated
            }
            Resumed::Search(Ok(Resume::Yield(snapshot))) => {
                self.stats.steps += 1;
                self.stats.visited = snapshot.len();
                self.overlay.visited.extend(snapshot.latest());
                Event::Visited(snapshot)
            }
            Resumed::Search(Ok(Resume::Return(path))) => {
                let cost = path.cost();
                log::info!(
                    "{}: path of {} vertices, cost {cost}",
                    self.strategy_name(),
                    path.len()
                );
                self.overlay.path = path.vertices().to_vec();
                self.overlay.path_cost = Some(cost);
                self.finish(Outcome::PathFound {
                    vertices: path.len(),
                    cost,
                });
                Event::PathFound(path)
            }
            Resumed::Search(Err(e)) => self.fail(e),
            Resumed::Sort(Ok(Resume::Yield(record))) => {
                self.stats.steps += 1;
                self.stats.counts += record.counts();
                self.array.apply(&record);
                self.overlay.highlights = record.highlights.clone();
                Event::Step(record)
            }
            Resumed::Sort(Ok(Resume::Return(outcome))) => {
                log::info!(
                    "{}: sorted with {} comparisons, {} swaps",
                    self.strategy_name(),
                    outcome.totals.comparisons,
                    outcome.totals.swaps
                );
                debug_assert_eq!(self.array.values(), outcome.values.as_slice());
                self.overlay.highlights.clear();
                if self.config.sweep_after_sort {
                    self.live = Some(Live::Sweep {
                        run: sweep(self.array.values().to_vec()),
                    });
                } else {
                    self.finish(Outcome::Sorted);
                }
                Event::Sorted(outcome.totals)
            }
            Resumed::Sort(Err(e)) | Resumed::Sweep(Err(e)) => self.fail(e),
            Resumed::Sweep(Ok(Resume::Yield(record))) => {
                self.stats.steps += 1;
                self.overlay.highlights = record.highlights.clone();
                Event::Sweep(record)
            }
            Resumed::Sweep(Ok(Resume::Return(outcome))) => {
                if let Some(i) = outcome.first_inversion {
                    log::warn!("sweep found an inversion at {i}");
                }
                self.overlay.highlights.clear();
                self.finish(Outcome::Swept {
                    sorted: outcome.sorted,
                });
                Event::Swept {
                    sorted: outcome.sorted,
                    first_inversion: outcome.first_inversion,
                }
            }
        }
    }

    fn fail(&mut self, e: Error) -> Event {
        match e.kind() {
            ErrorKind::Exhausted => {
                log::warn!("{e}");
                self.finish(Outcome::NoPath);
                Event::NoPath
            }
            ErrorKind::UserData | ErrorKind::Invariant => {
                log::error!("run aborted: {e}");
                self.finish(Outcome::Failed(e.clone()));
                Event::Failed(e)
            }
        }
    }

    fn strategy_name(&self) -> &'static str {
        match &self.live {
            Some(Live::Search { strategy, .. } | Live::Sort { strategy, .. }) => *strategy,
            Some(Live::Sweep { .. }) => "sweep",
            None => "",
        }
    }
}
