//! Grid and reference-shape sampling, and the five-snapshot pipeline that
//! pushes the sampled grid through every transform stage.

pub mod circle;
pub mod config;
pub mod grid;
pub mod pipeline;
pub mod plot;


pub use self::circle::{generate_circle, generate_circle_with, generate_unit_circle};
pub use self::config::{SamplerConfig, MAX_LINES_PER_AXIS};
pub use self::grid::{generate_grid, generate_grid_with, map_grid, Grid, Polyline};
pub use self::pipeline::{Pipeline, ReferenceShape, StageDescriptor, StageView, STAGES};
pub use self::plot::{branch_cut_indicator, is_plottable, PlotDomain, DISPLAY_BOUND};
