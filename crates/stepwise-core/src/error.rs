//! Error types shared by every algorithm family.
//!
//! Errors fall into three kinds (see [`ErrorKind`]): bad user data rejected
//! before a run starts, the normal "no result" outcome of a correct run, and
//! invariant violations that indicate a programming error.

use std::fmt;

use thiserror::Error;

use crate::geom::Coord;

/// Result alias used across the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Namespace of a registry key, reported in [`Error::UnknownKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    Pathfinding,
    Heuristic,
    Sorting,
    Pivot,
    GapSequence,
    DataPattern,
    Terrain,
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pathfinding => "pathfinding algorithm",
            Self::Heuristic => "heuristic",
            Self::Sorting => "sorting algorithm",
            Self::Pivot => "pivot choice",
            Self::GapSequence => "gap sequence",
            Self::DataPattern => "data pattern",
            Self::Terrain => "terrain kind",
        };
        f.write_str(name)
    }
}

/// Classification used by the driver to pick a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input; the run never starts.
    UserData,
    /// A correct run that found nothing.
    Exhausted,
    /// A programming error.
    Invariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown {family} `{key}`")]
    UnknownKey { family: KeyFamily, key: String },

    #[error("{0} vertex is not placed on the grid")]
    MissingTerminal(&'static str),

    #[error("invalid grid layout: {0}")]
    InvalidLayout(String),

    #[error("{strategy}: no path found")]
    NoPathFound { strategy: &'static str },

    #[error(transparent)]
    Invariant(#[from] Invariant),
}

impl Error {
    pub fn unknown_key(family: KeyFamily, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            family,
            key: key.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownKey { .. } | Self::MissingTerminal(_) | Self::InvalidLayout(_) => {
                ErrorKind::UserData
            }
            Self::NoPathFound { .. } => ErrorKind::Exhausted,
            Self::Invariant(_) => ErrorKind::Invariant,
        }
    }
}

/// Broken internal invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invariant {
    #[error("invariant violated: {0} was empty while the search loop expected an element")]
    EmptyFrontier(&'static str),

    #[error("invariant violated: parent chain broken at {0} before reaching the start vertex")]
    BrokenParentChain(Coord),

    #[error("invariant violated: generator resumed after completion")]
    ResumedAfterCompletion,
}
