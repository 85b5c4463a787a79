use tracing::debug;

use super::circle::generate_circle_with;
use super::config::SamplerConfig;
use super::grid::{generate_grid_with, map_grid, Grid};
use super::plot::PlotDomain;
use crate::error::GridError;
use crate::ops::{Stage, E};

/// Static overlay drawn on top of a stage's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceShape {
    UnitCircle,
    RadiusE,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageDescriptor {
    pub stage: Stage,
    pub title: &'static str,
    pub formula: &'static str,
    pub domain: PlotDomain,
    pub reference: Option<ReferenceShape>,
    pub show_branch_cut: bool,
}

pub const STAGES: [StageDescriptor; 5] = [
    StageDescriptor {
        stage: Stage::Identity,
        title: "Initial set",
        formula: "z",
        domain: PlotDomain::new(-5.0, 5.0),
        reference: None,
        show_branch_cut: true,
    },
    StageDescriptor {
        stage: Stage::SquareRoot,
        title: "Slit plane to right half-plane",
        formula: "w1 = sqrt(z)",
        domain: PlotDomain::new(-4.0, 4.0),
        reference: None,
        show_branch_cut: false,
    },
    StageDescriptor {
        stage: Stage::HalfPlaneToDisk,
        title: "Right half-plane to unit disk",
        formula: "w2 = (w1 - 1) / (w1 + 1)",
        domain: PlotDomain::new(-2.0, 2.0),
        reference: Some(ReferenceShape::UnitCircle),
        show_branch_cut: false,
    },
    StageDescriptor {
        stage: Stage::Inversion,
        title: "Disk interior to exterior",
        formula: "w3 = 1 / w2",
        domain: PlotDomain::new(-5.0, 5.0),
        reference: Some(ReferenceShape::UnitCircle),
        show_branch_cut: false,
    },
    StageDescriptor {
        stage: Stage::Scale,
        title: "Unit circle to radius-e circle",
        formula: "w4 = e * w3",
        domain: PlotDomain::new(-15.0, 15.0),
        reference: Some(ReferenceShape::RadiusE),
        show_branch_cut: false,
    },
];

/// All five grid snapshots plus the two reference circles. Computed once,
/// never mutated.
#[derive(Debug, Clone)]
pub struct Pipeline {
    snapshots: Vec<Grid>,
    unit_circle: Grid,
    e_circle: Grid,
    display_bound: f64,
}

/// What a renderer needs for one panel.
#[derive(Debug, Clone, Copy)]
pub struct StageView<'a> {
    pub descriptor: &'a StageDescriptor,
    pub grid: &'a Grid,
    pub reference: Option<&'a Grid>,
}

impl Pipeline {
    pub fn run() -> Pipeline {
        Self::build(&SamplerConfig::default(), super::grid::generate_grid())
    }

    pub fn run_with(config: &SamplerConfig) -> Result<Pipeline, GridError> {
        let grid = generate_grid_with(config)?;
        Ok(Self::build(config, grid))
    }

    fn build(config: &SamplerConfig, grid: Grid) -> Pipeline {
        let mut snapshots = Vec::with_capacity(Stage::ALL.len());
        snapshots.push(grid);
        for stage in &Stage::ALL[1..] {
            let prev = &snapshots[snapshots.len() - 1];
            let next = map_grid(prev, |z| stage.apply(z));
            debug!(
                stage = stage.index(),
                polylines = next.len(),
                gaps = next.gap_count(config.display_bound),
                "mapped grid"
            );
            snapshots.push(next);
        }

        Pipeline {
            snapshots,
            unit_circle: generate_circle_with(1.0, config.circle_segments),
            e_circle: generate_circle_with(E, config.circle_segments),
            display_bound: config.display_bound,
        }
    }

    pub fn snapshots(&self) -> &[Grid] {
        &self.snapshots
    }

    pub fn snapshot(&self, stage: Stage) -> &Grid {
        &self.snapshots[stage.index()]
    }

    pub fn unit_circle(&self) -> &Grid {
        &self.unit_circle
    }

    pub fn e_circle(&self) -> &Grid {
        &self.e_circle
    }

    pub fn display_bound(&self) -> f64 {
        self.display_bound
    }

    pub fn reference(&self, shape: ReferenceShape) -> &Grid {
        match shape {
            ReferenceShape::UnitCircle => &self.unit_circle,
            ReferenceShape::RadiusE => &self.e_circle,
        }
    }

    pub fn stage_view(&self, index: usize) -> Result<StageView<'_>, GridError> {
        let stage = Stage::from_index(index)?;
        let descriptor = &STAGES[stage.index()];
        Ok(StageView {
            descriptor,
            grid: self.snapshot(stage),
            reference: descriptor.reference.map(|shape| self.reference(shape)),
        })
    }
}
