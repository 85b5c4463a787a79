use num_traits::One;

use super::complex::{div, magnitude, sqrt, Complex};
use crate::error::GridError;

/// Euler's number, the scale factor of the last stage.
pub const E: f64 = std::f64::consts::E;

/// Below this magnitude the inversion stage treats its input as the pole.
pub const INVERSION_EPS: f64 = 1e-6;

/// Slit plane -> open right half-plane.
#[inline]
pub fn stage1(z: Complex) -> Complex {
    sqrt(z)
}

/// Right half-plane -> unit disk, `(w - 1) / (w + 1)`.
#[inline]
pub fn stage2(w: Complex) -> Complex {
    let num = w - Complex::one();
    let den = w + Complex::one();
    div(num, den)
}

/// Disk interior -> exterior, `1 / w`. Near the pole returns [`Complex::NAN`].
#[inline]
pub fn stage3(w: Complex) -> Complex {
    if magnitude(w) < INVERSION_EPS {
        return Complex::NAN;
    }
    div(Complex::one(), w)
}

/// Unit circle -> circle of radius `e`.
#[inline]
pub fn stage4(w: Complex) -> Complex {
    w * E
}

/// Full map `F(z) = e * (sqrt(z) + 1) / (sqrt(z) - 1)`, evaluated as
/// `stage4(stage3(stage2(stage1(z))))` so the stage sentinels apply.
pub fn transform(z: Complex) -> Complex {
    let s1 = stage1(z);
    let s2 = stage2(s1);
    let s3 = stage3(s2);
    stage4(s3)
}

/// Position in the five-snapshot pipeline. `Identity` is the untouched grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Stage {
    Identity = 0,
    SquareRoot = 1,
    HalfPlaneToDisk = 2,
    Inversion = 3,
    Scale = 4,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Identity,
        Stage::SquareRoot,
        Stage::HalfPlaneToDisk,
        Stage::Inversion,
        Stage::Scale,
    ];

    pub fn from_index(index: usize) -> Result<Stage, GridError> {
        Stage::ALL
            .get(index)
            .copied()
            .ok_or(GridError::StageIndex(index))
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map applied to the previous snapshot to get this one.
    #[inline]
    pub fn apply(self, z: Complex) -> Complex {
        match self {
            Stage::Identity => z,
            Stage::SquareRoot => stage1(z),
            Stage::HalfPlaneToDisk => stage2(z),
            Stage::Inversion => stage3(z),
            Stage::Scale => stage4(z),
        }
    }
}
