use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use tracing::debug;

use super::config::SamplerConfig;
use super::plot::is_plottable;
use crate::error::GridError;
use crate::ops::Complex;

/// One continuous curve. Consecutive points are joined when drawn; a
/// non-plottable point breaks the line but keeps its slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline(pub(crate) Vec<Complex>);

impl Polyline {
    pub fn new(points: Vec<Complex>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Complex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Complex> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Complex> {
        self.0.last().copied()
    }

    /// Point-for-point image under `f`; the length never changes.
    pub fn map<F>(&self, f: F) -> Polyline
    where
        F: Fn(Complex) -> Complex,
    {
        Polyline(self.0.iter().map(|&z| f(z)).collect())
    }

    /// First and last point coincide within `epsilon`.
    pub fn is_closed(&self, epsilon: f64) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) if self.len() > 1 => approx::abs_diff_eq!(a, b, epsilon = epsilon),
            _ => false,
        }
    }

    /// `n x 2` array of `(re, im)` rows.
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.len(), 2), |(i, j)| {
            let z = self.0[i];
            if j == 0 { z.re } else { z.im }
        })
    }

    pub fn from_array(points: &ArrayView2<f64>) -> Result<Polyline, GridError> {
        if points.ncols() != 2 {
            return Err(GridError::PointShape { cols: points.ncols() });
        }
        Ok(Polyline(
            points.rows().into_iter().map(|row| Complex::new(row[0], row[1])).collect(),
        ))
    }
}

impl From<Vec<Complex>> for Polyline {
    fn from(points: Vec<Complex>) -> Self {
        Self(points)
    }
}

/// Set of polylines sampling the plane at one pipeline stage. Line `i` of
/// every stage is the image of line `i` of the stage before it.
///
/// Read-only outside the crate:
///
/// ```compile_fail
/// let mut grid = conformal_grid::generate_grid();
/// grid.lines.clear();
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    pub(crate) lines: Vec<Polyline>,
}

impl Grid {
    pub fn new(lines: Vec<Polyline>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[Polyline] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.lines.iter().map(Polyline::len).sum()
    }

    /// Points that would not be drawn with the given display bound.
    pub fn gap_count(&self, bound: f64) -> usize {
        self.lines
            .iter()
            .flat_map(|line| line.points())
            .filter(|&&z| !is_plottable(z, bound))
            .count()
    }

    pub fn to_arrays(&self) -> Vec<Array2<f64>> {
        self.lines.iter().map(Polyline::to_array).collect()
    }
}

/// Maps every point of every line through `f`. Lines are processed in
/// parallel; output order matches input order.
pub fn map_grid<F>(grid: &Grid, f: F) -> Grid
where
    F: Fn(Complex) -> Complex + Sync + Send,
{
    let lines = grid.lines.par_iter().map(|line| line.map(&f)).collect();
    Grid { lines }
}

/// Stage-0 grid with the default sampling parameters.
pub fn generate_grid() -> Grid {
    sample_grid(&SamplerConfig::default())
}

pub fn generate_grid_with(config: &SamplerConfig) -> Result<Grid, GridError> {
    config.validate()?;
    Ok(sample_grid(config))
}

fn sample_grid(config: &SamplerConfig) -> Grid {
    let n = config.points_per_line;
    let half = n / 2;
    let mut lines = Vec::new();

    let columns = config.line_count(config.x_min, config.x_max);
    let mut split = 0usize;
    for i in 0..columns {
        let x = config.x_min + i as f64 * config.step;
        if x < config.branch_cut_threshold {
            // Leave the real axis unsampled so the cut is never bridged.
            let gap = config.gap_half_width;
            lines.push(vertical(x, config.y_min, -gap, half));
            lines.push(vertical(x, gap, config.y_max, half));
            split += 1;
        } else {
            lines.push(vertical(x, config.y_min, config.y_max, n));
        }
    }

    let rows = config.line_count(config.y_min, config.y_max);
    for i in 0..rows {
        let y = config.y_min + i as f64 * config.step;
        lines.push(horizontal(y, config.x_min, config.x_max, n));
    }

    debug!(columns, rows, split, polylines = lines.len(), "sampled grid");
    Grid { lines }
}

fn vertical(x: f64, y0: f64, y1: f64, segments: usize) -> Polyline {
    Polyline(
        (0..=segments)
            .map(|i| Complex::new(x, lerp(y0, y1, i, segments)))
            .collect(),
    )
}

fn horizontal(y: f64, x0: f64, x1: f64, segments: usize) -> Polyline {
    Polyline(
        (0..=segments)
            .map(|i| Complex::new(lerp(x0, x1, i, segments), y))
            .collect(),
    )
}

#[inline]
fn lerp(a: f64, b: f64, i: usize, n: usize) -> f64 {
    let t = i as f64 / n as f64;
    a + t * (b - a)
}
