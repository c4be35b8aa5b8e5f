//! Terrain generators for the pathfinding grid.
//!
//! - **Randomize**: uniform random terrain plus random terminals.
//! - **Noise**: Perlin-noise height map banded into terrain kinds, from deep
//!   water in the valleys up to walls on the peaks.

use std::collections::HashMap;
use std::f64::consts::TAU;

use rand::Rng;
use stepwise_core::Coord;

use crate::grid::Grid;
use crate::vertex::Terrain;

/// Height thresholds (normalized to 0..1) and the terrain below each.
const BANDS: [(f64, Terrain); 8] = [
    (0.20, Terrain::WaterDeep),
    (0.30, Terrain::Water),
    (0.38, Terrain::Sand),
    (0.52, Terrain::Empty),
    (0.64, Terrain::Grass),
    (0.72, Terrain::Gravel),
    (0.80, Terrain::Stone),
    (0.90, Terrain::Snow),
];

/// Terrain generator operating on a [`Grid`].
pub struct TerrainGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> TerrainGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fill every cell with a uniformly random non-terminal kind, then place
    /// the start and a distinct end at random positions.
    ///
    /// Grids with fewer than two cells end up without terminals.
    pub fn randomize(&mut self, grid: &mut Grid) {
        grid.clear_terminals();
        let rng = &mut self.rng;
        grid.fill_with(|_| Terrain::NON_TERMINAL[rng.random_range(0..Terrain::NON_TERMINAL.len())]);
        self.place_terminals(grid);
    }

    /// Replace every non-terminal cell using a fresh Perlin noise field.
    ///
    /// Existing terminals keep their positions.
    pub fn noise(&mut self, grid: &mut Grid) {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows == 0 || cols == 0 {
            return;
        }
        let scale = noise_scale(rows, cols);
        let offset_row = self.rng.random_range(0.0..10.0);
        let offset_col = self.rng.random_range(0.0..10.0);
        log::debug!("noise terrain {rows}x{cols}, scale {scale:.3}");

        let mut perlin = Perlin::new(&mut self.rng);
        grid.fill_with(|c| {
            let x = f64::from(c.col) / f64::from(cols) * scale + offset_col;
            let y = f64::from(c.row) / f64::from(rows) * scale + offset_row;
            band(normalize(perlin.sample(x, y)))
        });
    }

    fn place_terminals(&mut self, grid: &mut Grid) {
        let n = grid.len();
        if n < 2 {
            return;
        }
        let s = self.rng.random_range(0..n);
        let mut e = self.rng.random_range(0..n - 1);
        if e >= s {
            e += 1;
        }
        let bounds = grid.bounds();
        grid.set(bounds.coord(s), Terrain::Start);
        grid.set(bounds.coord(e), Terrain::End);
        log::debug!("terminals placed at {} and {}", bounds.coord(s), bounds.coord(e));
    }
}

/// Noise frequency for a grid, widening with the aspect ratio.
pub fn noise_scale(rows: i32, cols: i32) -> f64 {
    let ratio = f64::from(cols) / f64::from(rows);
    if ratio <= 1.0 {
        3.0 * ratio
    } else {
        4.0 - f64::from(rows) / f64::from(cols)
    }
}

/// Map a raw 2-D Perlin sample (about ±0.71) into 0..=1.
fn normalize(v: f64) -> f64 {
    ((v + std::f64::consts::FRAC_1_SQRT_2) * std::f64::consts::FRAC_1_SQRT_2).clamp(0.0, 1.0)
}

fn band(height: f64) -> Terrain {
    BANDS
        .iter()
        .find(|(limit, _)| height < *limit)
        .map_or(Terrain::Wall, |&(_, t)| t)
}

// ---------------------------------------------------------------------------
// Perlin noise
// ---------------------------------------------------------------------------

/// Gradient noise with lazily drawn unit gradients per lattice point.
pub struct Perlin<'a, R: Rng> {
    rng: &'a mut R,
    gradients: HashMap<Coord, (f64, f64)>,
}

impl<'a, R: Rng> Perlin<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            gradients: HashMap::new(),
        }
    }

    fn gradient(&mut self, ix: i32, iy: i32) -> (f64, f64) {
        let rng = &mut *self.rng;
        *self
            .gradients
            .entry(Coord::new(iy, ix))
            .or_insert_with(|| {
                let theta = rng.random_range(0.0..TAU);
                (theta.cos(), theta.sin())
            })
    }

    fn dot_gradient(&mut self, ix: i32, iy: i32, x: f64, y: f64) -> f64 {
        let (gx, gy) = self.gradient(ix, iy);
        (x - f64::from(ix)) * gx + (y - f64::from(iy)) * gy
    }

    /// Noise value at (x, y).
    pub fn sample(&mut self, x: f64, y: f64) -> f64 {
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        let (x1, y1) = (x0 + 1, y0 + 1);
        let sx = fade(x - f64::from(x0));
        let sy = fade(y - f64::from(y0));

        let top = lerp(
            self.dot_gradient(x0, y0, x, y),
            self.dot_gradient(x1, y0, x, y),
            sx,
        );
        let bottom = lerp(
            self.dot_gradient(x0, y1, x, y),
            self.dot_gradient(x1, y1, x, y),
            sx,
        );
        lerp(top, bottom, sy)
    }
}

/// Quintic smoothstep 6t⁵ − 15t⁴ + 10t³.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
