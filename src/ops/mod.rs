pub mod complex;
pub mod transform;

#[cfg(test)]
mod __test__;

pub use self::complex::{add, div, magnitude, mul, sqrt, sub, Complex};
pub use self::transform::{
    stage1, stage2, stage3, stage4, transform, Stage, E, INVERSION_EPS,
};
