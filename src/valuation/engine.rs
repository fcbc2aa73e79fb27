//! Enterprise and equity value from the projected cash flows

use log::debug;
use serde::Serialize;

use crate::assumptions::DcfInputs;
use crate::error::ModelError;
use crate::projection::{ProjectionEngine, ProjectionTable};

/// Terminal value under both closing methods
///
/// The perpetuity growth figure drives the enterprise value; the exit
/// multiple figure is reported alongside for cross-checking.
#[derive(Debug, Clone, Serialize)]
pub struct TerminalValue {
    /// Gordon growth: terminal-year FCF / (WACC - terminal growth)
    pub perpetuity_growth: f64,
    /// Final forecast year EBITDA x exit multiple
    pub exit_multiple: f64,
    /// Perpetuity growth figure at the final forecast year's discount factor
    pub present_value: f64,
}

/// Complete valuation output for one input set
#[derive(Debug, Clone, Serialize)]
pub struct ValuationResult {
    pub projections: ProjectionTable,
    pub terminal: TerminalValue,
    pub enterprise_value: f64,
    /// Enterprise value less net debt
    pub equity_value: f64,
    /// Implied multiple on final forecast year EBITDA
    pub ev_to_ebitda: f64,
    /// Implied multiple on final forecast year revenue
    pub ev_to_revenue: f64,
    /// PV of the terminal value as a share of enterprise value
    pub terminal_value_share: f64,
}

/// Values one input set end to end
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    inputs: DcfInputs,
}

impl ValuationEngine {
    pub fn new(inputs: DcfInputs) -> Self {
        Self { inputs }
    }

    /// Project, discount, and close the horizon with a terminal value
    pub fn value(&self) -> Result<ValuationResult, ModelError> {
        let table = ProjectionEngine::new(self.inputs.clone()).project()?;

        let (Some(last), Some(terminal)) = (table.last_forecast(), table.terminal()) else {
            return Err(ModelError::EmptyHorizon);
        };
        let (last_ebitda, last_revenue, last_factor) =
            (last.ebitda, last.revenue, last.discount_factor);
        let terminal_fcf = terminal.fcf;

        let perpetuity_growth =
            terminal_fcf / (self.inputs.discount_rate - self.inputs.terminal_growth_rate);
        let exit_multiple = last_ebitda * self.inputs.terminal_ebitda_multiple;
        let present_value = perpetuity_growth * last_factor;

        let enterprise_value = table.forecast_pv_total() + present_value;
        let equity_value = enterprise_value - self.inputs.net_debt;

        debug!(
            "EV {:.0}, equity {:.0}, terminal share {:.3}",
            enterprise_value,
            equity_value,
            present_value / enterprise_value
        );

        Ok(ValuationResult {
            projections: table,
            terminal: TerminalValue {
                perpetuity_growth,
                exit_multiple,
                present_value,
            },
            enterprise_value,
            equity_value,
            ev_to_ebitda: enterprise_value / last_ebitda,
            ev_to_revenue: enterprise_value / last_revenue,
            terminal_value_share: present_value / enterprise_value,
        })
    }
}
