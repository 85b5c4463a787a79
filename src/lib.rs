//! Conformal grid - the five-stage map
//! `F(z) = e * (sqrt(z) + 1) / (sqrt(z) - 1)` of the complex plane, sampled
//! as a deformed coordinate grid after every stage.
//!
//! - [`ops`]: complex arithmetic and the four stage functions
//! - [`sampler`]: grid / reference circle sampling and the snapshot pipeline

pub mod error;
pub mod ops;
pub mod sampler;

#[cfg(feature = "python")]
mod bindings;

pub use error::GridError;
pub use ops::{stage1, stage2, stage3, stage4, transform, Complex, Stage, E};
pub use sampler::{
    generate_circle, generate_grid, generate_grid_with, generate_unit_circle, map_grid, Grid,
    Pipeline, Polyline, SamplerConfig,
};
