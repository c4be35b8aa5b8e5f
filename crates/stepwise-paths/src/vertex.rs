//! Terrain kinds and grid vertices.

use std::fmt;
use std::str::FromStr;

use stepwise_core::{Coord, Error, KeyFamily};

/// The kind of terrain occupying a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Terrain {
    Start,
    End,
    Wall,
    #[default]
    Empty,
    Grass,
    Sand,
    Stone,
    Gravel,
    Snow,
    Water,
    WaterDeep,
}

impl Terrain {
    pub const ALL: [Terrain; 11] = [
        Terrain::Start,
        Terrain::End,
        Terrain::Wall,
        Terrain::Empty,
        Terrain::Grass,
        Terrain::Sand,
        Terrain::Stone,
        Terrain::Gravel,
        Terrain::Snow,
        Terrain::Water,
        Terrain::WaterDeep,
    ];

    /// Every kind a cell may take other than the two terminals.
    pub const NON_TERMINAL: [Terrain; 9] = [
        Terrain::Wall,
        Terrain::Empty,
        Terrain::Grass,
        Terrain::Sand,
        Terrain::Stone,
        Terrain::Gravel,
        Terrain::Snow,
        Terrain::Water,
        Terrain::WaterDeep,
    ];

    /// Cost of entering a cell of this kind.
    pub fn weight(self) -> f64 {
        match self {
            Terrain::Start | Terrain::End | Terrain::Empty => 1.0,
            Terrain::Grass => 2.0,
            Terrain::Sand => 4.0,
            Terrain::Stone => 8.0,
            Terrain::Gravel => 16.0,
            Terrain::Snow => 32.0,
            Terrain::Water => 64.0,
            Terrain::WaterDeep => 128.0,
            Terrain::Wall => f64::INFINITY,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Terrain::Start | Terrain::End)
    }

    pub fn is_wall(self) -> bool {
        self == Terrain::Wall
    }

    /// Registry key.
    pub fn key(self) -> &'static str {
        match self {
            Terrain::Start => "start",
            Terrain::End => "end",
            Terrain::Wall => "wall",
            Terrain::Empty => "empty",
            Terrain::Grass => "grass",
            Terrain::Sand => "sand",
            Terrain::Stone => "stone",
            Terrain::Gravel => "gravel",
            Terrain::Snow => "snow",
            Terrain::Water => "water",
            Terrain::WaterDeep => "water-deep",
        }
    }

    /// Single-character glyph used by text layouts.
    pub fn glyph(self) -> char {
        match self {
            Terrain::Start => 'S',
            Terrain::End => 'E',
            Terrain::Wall => '#',
            Terrain::Empty => '.',
            Terrain::Grass => '"',
            Terrain::Sand => ':',
            Terrain::Stone => 'o',
            Terrain::Gravel => '%',
            Terrain::Snow => '*',
            Terrain::Water => '~',
            Terrain::WaterDeep => 'W',
        }
    }

    pub fn from_glyph(c: char) -> Option<Terrain> {
        Terrain::ALL.into_iter().find(|t| t.glyph() == c)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Terrain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Terrain::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| Error::unknown_key(KeyFamily::Terrain, s))
    }
}

/// One of the two terminal vertices of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Terminal {
    Start,
    End,
}

impl Terminal {
    pub fn terrain(self) -> Terrain {
        match self {
            Terminal::Start => Terrain::Start,
            Terminal::End => Terrain::End,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Terminal::Start => "start",
            Terminal::End => "end",
        }
    }
}

/// An immutable grid cell: position plus terrain.
///
/// A cell whose kind changes is replaced with a new vertex; equality is
/// structural over position and kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub coord: Coord,
    pub terrain: Terrain,
}

impl Vertex {
    #[inline]
    pub const fn new(coord: Coord, terrain: Terrain) -> Self {
        Self { coord, terrain }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.coord.col
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.terrain.weight()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.terrain, self.coord)
    }
}
