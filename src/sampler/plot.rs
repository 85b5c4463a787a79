use super::grid::Polyline;
use crate::ops::Complex;

/// Points at or beyond this absolute coordinate are not drawn.
pub const DISPLAY_BOUND: f64 = 100.0;

/// A point is drawn only if both parts are finite and inside `bound`.
/// Sentinels from the singular stages (`NaN`, `inf`) always fail.
#[inline]
pub fn is_plottable(z: Complex, bound: f64) -> bool {
    z.is_finite() && z.re.abs() < bound && z.im.abs() < bound
}

impl Polyline {
    /// Maximal runs of consecutive plottable points, in order. A run of a
    /// single point is kept; it draws nothing but starts no bridge either.
    pub fn segments(&self, bound: f64) -> Vec<&[Complex]> {
        self.points()
            .split(|&z| !is_plottable(z, bound))
            .filter(|run| !run.is_empty())
            .collect()
    }
}

/// Square plot window `[min, max]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotDomain {
    pub min: f64,
    pub max: f64,
}

impl PlotDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, z: Complex) -> bool {
        (self.min..=self.max).contains(&z.re) && (self.min..=self.max).contains(&z.im)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// The marked stretch of the negative real axis, from the left edge of the
/// window to the origin.
pub fn branch_cut_indicator(domain: PlotDomain) -> Option<(Complex, Complex)> {
    if domain.min >= 0.0 || domain.max < 0.0 {
        return None;
    }
    Some((Complex::new(domain.min, 0.0), Complex::new(0.0, 0.0)))
}
