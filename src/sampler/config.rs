use crate::error::GridError;

/// Upper bound on grid lines along one axis.
pub const MAX_LINES_PER_AXIS: usize = 10_000;

/// Sampling parameters for the stage-0 grid and the reference circles.
///
/// `branch_cut_threshold` and `gap_half_width` are visual tuning knobs: every
/// vertical line left of the threshold is cut in two, leaving
/// `(-gap_half_width, gap_half_width)` unsampled around the real axis.
///
/// Lines sit at `min + i * step` and include both ends of the range, so the
/// defaults give 51 columns and 51 rows. A floating-point `x += step` loop
/// stops at 4.8 and yields 50 of each; the difference is intended.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub step: f64,
    pub points_per_line: usize,
    pub branch_cut_threshold: f64,
    pub gap_half_width: f64,
    pub circle_segments: usize,
    pub display_bound: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            x_min: -5.0,
            x_max: 5.0,
            y_min: -5.0,
            y_max: 5.0,
            step: 0.2,
            points_per_line: 100,
            branch_cut_threshold: -0.001,
            gap_half_width: 0.02,
            circle_segments: 100,
            display_bound: 100.0,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(GridError::Step(self.step));
        }
        check_range(self.x_min, self.x_max)?;
        check_range(self.y_min, self.y_max)?;
        if self.points_per_line < 2 || self.points_per_line % 2 != 0 {
            return Err(GridError::PointsPerLine(self.points_per_line));
        }
        if self.branch_cut_threshold.is_nan() {
            return Err(GridError::Threshold(self.branch_cut_threshold));
        }
        // Columns ascend from x_min, so the first one decides whether any split.
        if self.x_min < self.branch_cut_threshold {
            let gap = self.gap_half_width;
            // Both halves of a split line must keep a non-empty span.
            if !gap.is_finite() || gap < 0.0 || self.y_min >= -gap || gap >= self.y_max {
                return Err(GridError::Gap { gap, min: self.y_min, max: self.y_max });
            }
        }
        self.checked_line_count(self.x_min, self.x_max)?;
        self.checked_line_count(self.y_min, self.y_max)?;
        if self.circle_segments == 0 {
            return Err(GridError::CircleSegments);
        }
        if !self.display_bound.is_finite() || self.display_bound <= 0.0 {
            return Err(GridError::DisplayBound(self.display_bound));
        }
        Ok(())
    }

    /// Number of grid lines per axis for a `[min, max]` span. Only called on
    /// a validated config.
    pub(crate) fn line_count(&self, min: f64, max: f64) -> usize {
        ((max - min) / self.step + 1e-9).floor() as usize + 1
    }

    fn checked_line_count(&self, min: f64, max: f64) -> Result<usize, GridError> {
        let intervals = ((max - min) / self.step + 1e-9).floor();
        // Compare in f64 before casting; the cast saturates.
        if !intervals.is_finite() || intervals >= MAX_LINES_PER_AXIS as f64 {
            return Err(GridError::TooManyLines { step: self.step, max: MAX_LINES_PER_AXIS });
        }
        Ok(intervals as usize + 1)
    }
}

fn check_range(min: f64, max: f64) -> Result<(), GridError> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(GridError::Range { min, max });
    }
    Ok(())
}
