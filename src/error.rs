use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("step must be finite and > 0, got {0}")]
    Step(f64),
    #[error("range [{min}, {max}] is empty or not finite")]
    Range { min: f64, max: f64 },
    #[error("points_per_line must be even and >= 2, got {0}")]
    PointsPerLine(usize),
    #[error("gap half-width {gap} does not fit inside y range [{min}, {max}]")]
    Gap { gap: f64, min: f64, max: f64 },
    #[error("branch cut threshold must not be NaN, got {0}")]
    Threshold(f64),
    #[error("step {step} yields more than {max} lines per axis")]
    TooManyLines { step: f64, max: usize },
    #[error("circle_segments must be > 0")]
    CircleSegments,
    #[error("display bound must be finite and > 0, got {0}")]
    DisplayBound(f64),
    #[error("stage index {0} out of range (0..5)")]
    StageIndex(usize),
    #[error("point array must have 2 columns (re, im), got {cols}")]
    PointShape { cols: usize },
}
