//! Two-factor sensitivity sweep over WACC and terminal growth
//!
//! Re-prices the company at every point of a (WACC, terminal growth) grid.
//! Rows are evaluated in parallel; a grid point whose pair is invalid
//! (growth at or above WACC) yields an empty cell instead of failing the
//! whole sweep.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::DcfInputs;
use crate::valuation::ValuationEngine;

/// Axis configuration for a sweep centered on the base case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepParams {
    /// Step between adjacent WACC grid points
    #[serde(default = "default_wacc_step")]
    pub wacc_step: f64,

    /// Step between adjacent terminal growth grid points
    #[serde(default = "default_growth_step")]
    pub growth_step: f64,

    /// Points per axis; an odd count keeps the base case on the center cell
    #[serde(default = "default_axis_points")]
    pub axis_points: usize,
}

fn default_wacc_step() -> f64 { 0.01 }
fn default_growth_step() -> f64 { 0.005 }
fn default_axis_points() -> usize { 5 }

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            wacc_step: 0.01,
            growth_step: 0.005,
            axis_points: 5,
        }
    }
}

/// Equity values across a (WACC, terminal growth) grid
///
/// Rows follow the WACC axis, columns the growth axis.
#[derive(Debug, Clone, Serialize)]
pub struct SensitivityGrid {
    pub wacc_axis: Vec<f64>,
    pub growth_axis: Vec<f64>,
    /// Row-major equity values; `None` where the pair is invalid
    pub equity_values: Vec<Vec<Option<f64>>>,
}

impl SensitivityGrid {
    /// Sweep explicit axes
    pub fn sweep(base: &DcfInputs, wacc_axis: &[f64], growth_axis: &[f64]) -> Self {
        let equity_values: Vec<Vec<Option<f64>>> = wacc_axis
            .par_iter()
            .map(|&wacc| {
                growth_axis
                    .iter()
                    .map(|&growth| {
                        let mut inputs = base.clone();
                        inputs.discount_rate = wacc;
                        inputs.terminal_growth_rate = growth;
                        ValuationEngine::new(inputs)
                            .value()
                            .ok()
                            .map(|result| result.equity_value)
                    })
                    .collect()
            })
            .collect();

        Self {
            wacc_axis: wacc_axis.to_vec(),
            growth_axis: growth_axis.to_vec(),
            equity_values,
        }
    }

    /// Sweep axes centered on the base-case discount and terminal growth rates
    pub fn sweep_around(base: &DcfInputs, params: &SweepParams) -> Self {
        let wacc_axis = centered_axis(base.discount_rate, params.wacc_step, params.axis_points);
        let growth_axis = centered_axis(
            base.terminal_growth_rate,
            params.growth_step,
            params.axis_points,
        );
        Self::sweep(base, &wacc_axis, &growth_axis)
    }

    /// Cell lookup by (WACC row, growth column)
    pub fn cell(&self, row: usize, col: usize) -> Option<f64> {
        self.equity_values
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
    }
}

/// Build an axis of `points` values spaced `step` apart, centered on `center`
pub fn centered_axis(center: f64, step: f64, points: usize) -> Vec<f64> {
    let half = points as i64 / 2;
    (0..points as i64)
        .map(|i| center + (i - half) as f64 * step)
        .collect()
}
