use std::f64::consts::PI;

use super::grid::{Grid, Polyline};
use crate::ops::Complex;

pub const CIRCLE_SEGMENTS: usize = 100;

/// Closed circle of `radius` around the origin as a one-line grid,
/// `CIRCLE_SEGMENTS + 1` points with the last repeating the first.
pub fn generate_circle(radius: f64) -> Grid {
    generate_circle_with(radius, CIRCLE_SEGMENTS)
}

pub fn generate_unit_circle() -> Grid {
    generate_circle(1.0)
}

/// `segments == 0` is clamped to 1 (a two-point line); `SamplerConfig`
/// rejects 0 before it reaches here.
pub fn generate_circle_with(radius: f64, segments: usize) -> Grid {
    let segments = segments.max(1);
    let line = (0..=segments)
        .map(|i| {
            let theta = (i as f64 / segments as f64) * 2.0 * PI;
            Complex::from_polar(radius, theta)
        })
        .collect();
    Grid::new(vec![Polyline(line)])
}
