//! The weighted terrain grid searched by the pathfinding strategies.

use std::fmt;

use stepwise_core::{Bounds, Coord, Error, Result};

use crate::vertex::{Terminal, Terrain, Vertex};

/// A rectangular, row-major grid of [`Vertex`] values.
///
/// The grid keeps the start and end positions in sync with the cells: placing
/// a terminal moves it (the previous cell reverts to empty) and overwriting a
/// terminal cell removes that terminal. Every edit bumps the
/// [`generation`](Self::generation) counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Vertex>,
    start: Option<Coord>,
    end: Option<Coord>,
    generation: u64,
}

impl Grid {
    /// Create a grid of empty cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        let cells = bounds
            .iter()
            .map(|c| Vertex::new(c, Terrain::Empty))
            .collect();
        Self {
            bounds,
            cells,
            start: None,
            end: None,
            generation: 0,
        }
    }

    /// Parse a text layout, one glyph per cell (see [`Terrain::glyph`]).
    ///
    /// Blank lines and surrounding whitespace are ignored. All rows must have
    /// the same width and at most one start and one end may appear.
    pub fn parse(layout: &str) -> Result<Grid> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Grid::new(rows as i32, cols as i32);
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(Error::InvalidLayout(format!(
                    "row {row} has {width} cells, expected {cols}"
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let terrain = Terrain::from_glyph(ch).ok_or_else(|| {
                    Error::InvalidLayout(format!("unknown glyph {ch:?} at ({row}, {col})"))
                })?;
                let c = Coord::new(row as i32, col as i32);
                let duplicate = match terrain {
                    Terrain::Start => grid.start.is_some(),
                    Terrain::End => grid.end.is_some(),
                    _ => false,
                };
                if duplicate {
                    return Err(Error::InvalidLayout(format!(
                        "second {terrain} vertex at {c}"
                    )));
                }
                grid.set(c, terrain);
            }
        }
        grid.generation = 0;
        Ok(grid)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Edit counter; increases on every change to the cells.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The vertex at `c`, or `None` when out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Vertex> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Replace the cell at `c`. Returns `false` when `c` is out of bounds.
    pub fn set(&mut self, c: Coord, terrain: Terrain) -> bool {
        let Some(idx) = self.bounds.index(c) else {
            return false;
        };
        match self.cells[idx].terrain {
            Terrain::Start => self.start = None,
            Terrain::End => self.end = None,
            _ => {}
        }
        match terrain {
            Terrain::Start => self.place_terminal(Terminal::Start, c),
            Terrain::End => self.place_terminal(Terminal::End, c),
            _ => {}
        }
        self.cells[idx] = Vertex::new(c, terrain);
        self.generation += 1;
        true
    }

    fn place_terminal(&mut self, which: Terminal, c: Coord) {
        let slot = match which {
            Terminal::Start => &mut self.start,
            Terminal::End => &mut self.end,
        };
        if let Some(i) = slot.replace(c).and_then(|old| self.bounds.index(old)) {
            self.cells[i] = Vertex::new(self.bounds.coord(i), Terrain::Empty);
        }
    }

    /// Position of a terminal, if placed.
    pub fn terminal(&self, which: Terminal) -> Option<Coord> {
        match which {
            Terminal::Start => self.start,
            Terminal::End => self.end,
        }
    }

    pub fn start(&self) -> Option<Vertex> {
        self.start.and_then(|c| self.at(c))
    }

    pub fn end(&self) -> Option<Vertex> {
        self.end.and_then(|c| self.at(c))
    }

    /// Both terminals, or [`Error::MissingTerminal`] naming the first absent one.
    pub fn terminals(&self) -> Result<(Vertex, Vertex)> {
        let start = self.start().ok_or(Error::MissingTerminal("start"))?;
        let end = self.end().ok_or(Error::MissingTerminal("end"))?;
        Ok((start, end))
    }

    /// Rebuild every non-terminal cell from `f`.
    ///
    /// Terminal cells keep their kind; a terminal kind returned by `f` is
    /// stored as empty.
    pub fn fill_with(&mut self, mut f: impl FnMut(Coord) -> Terrain) {
        for v in self.cells.iter_mut() {
            if v.terrain.is_terminal() {
                continue;
            }
            let t = f(v.coord);
            let t = if t.is_terminal() { Terrain::Empty } else { t };
            *v = Vertex::new(v.coord, t);
        }
        self.generation += 1;
    }

    /// Reset every non-terminal cell to empty.
    pub fn clear(&mut self) {
        self.fill_with(|_| Terrain::Empty);
    }

    /// Remove both terminals, turning their cells empty.
    pub fn clear_terminals(&mut self) {
        for which in [Terminal::Start, Terminal::End] {
            if let Some(c) = self.terminal(which) {
                self.set(c, Terrain::Empty);
            }
        }
    }

    /// Change the dimensions, keeping overlapping cells.
    ///
    /// Terminals outside the new bounds are dropped.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        let mut next = Grid::new(rows, cols);
        for c in next.bounds.iter() {
            if let Some(v) = self.at(c) {
                next.set(c, v.terrain);
            }
        }
        next.generation = self.generation + 1;
        *self = next;
    }

    /// Iterate over all vertices in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.cells.iter()
    }

    /// Render the layout, letting `overlay` replace the glyph of any cell.
    pub fn render_with(&self, overlay: impl Fn(Coord) -> Option<char>) -> String {
        let mut out = String::with_capacity(self.len() + self.rows().max(0) as usize);
        for (i, v) in self.cells.iter().enumerate() {
            if i > 0 && v.col() == 0 {
                out.push('\n');
            }
            out.push(overlay(v.coord).unwrap_or_else(|| v.terrain.glyph()));
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_terrain() {
        let g = Grid::new(2, 3);
        assert_eq!(g.len(), 6);
        assert!(g.iter().all(|v| v.terrain == Terrain::Empty));
        assert_eq!(g.at(Coord::new(1, 2)).map(|v| v.coord), Some(Coord::new(1, 2)));
        assert_eq!(g.at(Coord::new(2, 0)), None);
        assert_eq!(g.terminals(), Err(Error::MissingTerminal("start")));
    }

    #[test]
    fn placing_terminal_moves_it() {
        let mut g = Grid::new(3, 3);
        g.set(Coord::new(0, 0), Terrain::Start);
        g.set(Coord::new(2, 2), Terrain::End);
        g.set(Coord::new(1, 1), Terrain::Start);
        assert_eq!(g.terminal(Terminal::Start), Some(Coord::new(1, 1)));
        assert_eq!(g.at(Coord::new(0, 0)).unwrap().terrain, Terrain::Empty);
        let (s, e) = g.terminals().unwrap();
        assert_eq!(s.coord, Coord::new(1, 1));
        assert_eq!(e.terrain, Terrain::End);
    }

    #[test]
    fn overwriting_terminal_removes_it() {
        let mut g = Grid::new(2, 2);
        g.set(Coord::new(0, 0), Terrain::Start);
        g.set(Coord::new(0, 1), Terrain::End);
        g.set(Coord::new(0, 1), Terrain::Start);
        assert_eq!(g.terminal(Terminal::End), None);
        assert_eq!(g.terminal(Terminal::Start), Some(Coord::new(0, 1)));
        assert_eq!(g.at(Coord::new(0, 0)).unwrap().terrain, Terrain::Empty);
        g.set(Coord::new(0, 1), Terrain::Wall);
        assert_eq!(g.terminal(Terminal::Start), None);
    }

    #[test]
    fn generation_tracks_edits() {
        let mut g = Grid::new(2, 2);
        let g0 = g.generation();
        assert!(g.set(Coord::new(1, 1), Terrain::Wall));
        assert!(!g.set(Coord::new(5, 5), Terrain::Wall));
        assert_eq!(g.generation(), g0 + 1);
        g.clear();
        assert_eq!(g.generation(), g0 + 2);
    }

    #[test]
    fn parse_and_render() {
        let layout = "S.#\n~W\"\n:oE";
        let g = Grid::parse(layout).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 3));
        assert_eq!(g.at(Coord::new(0, 2)).unwrap().terrain, Terrain::Wall);
        assert_eq!(g.at(Coord::new(1, 1)).unwrap().terrain, Terrain::WaterDeep);
        assert_eq!(g.terminal(Terminal::End), Some(Coord::new(2, 2)));
        assert_eq!(g.generation(), 0);
        assert_eq!(g.to_string(), layout);
    }

    #[test]
    fn parse_rejects_bad_layouts() {
        assert!(matches!(Grid::parse("..\n."), Err(Error::InvalidLayout(_))));
        assert!(matches!(Grid::parse(".?"), Err(Error::InvalidLayout(_))));
        assert!(matches!(Grid::parse("SS"), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn resize_keeps_overlap_and_drops_terminals() {
        let mut g = Grid::parse("S..\n.#.\n..E").unwrap();
        g.resize(2, 2);
        assert_eq!(g.to_string(), "S.\n.#");
        assert_eq!(g.terminal(Terminal::End), None);
        assert_eq!(g.terminal(Terminal::Start), Some(Coord::ZERO));
        g.resize(3, 4);
        assert_eq!(g.to_string(), "S...\n.#..\n....");
    }

    #[test]
    fn fill_with_preserves_terminals() {
        let mut g = Grid::parse("S.\n.E").unwrap();
        g.fill_with(|_| Terrain::Snow);
        assert_eq!(g.to_string(), "S*\n*E");
        g.fill_with(|_| Terrain::End);
        assert_eq!(g.to_string(), "S.\n.E");
        g.clear_terminals();
        assert_eq!(g.to_string(), "..\n..");
    }

    #[test]
    fn render_overlay() {
        let g = Grid::parse("S..\n..E").unwrap();
        let s = g.render_with(|c| (c == Coord::new(0, 1)).then_some('o'));
        assert_eq!(s, "So.\n..E");
    }
}
