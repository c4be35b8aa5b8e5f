//! Core types for stepwise algorithm execution.
//!
//! - [`Coord`] and [`Bounds`] for grid geometry
//! - [`Queue`] and [`PriorityQueue`] frontier containers
//! - the step protocol: [`Stepper`], [`Resume`] and the lifecycle-checked
//!   [`Generator`]
//! - the shared [`Error`] type

pub mod error;
pub mod geom;
pub mod priority_queue;
pub mod queue;
pub mod step;

pub use error::{Error, ErrorKind, Invariant, KeyFamily, Result};
pub use geom::{Bounds, BoundsIter, Coord};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use step::{Generator, Resume, Stepper};
