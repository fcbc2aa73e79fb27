//! WACC build-up from capital structure components

use serde::{Deserialize, Serialize};

/// Capital structure components for deriving the discount rate
///
/// WACC = equity weight × cost of equity
///      + debt weight × after-tax cost of debt
///      + business risk premium
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaccComponents {
    /// Equity share of the capital structure
    #[serde(default = "default_equity_weight")]
    pub equity_weight: f64,

    /// Debt share of the capital structure
    #[serde(default = "default_debt_weight")]
    pub debt_weight: f64,

    /// Required return on equity
    #[serde(default = "default_cost_of_equity")]
    pub cost_of_equity: f64,

    /// Cost of debt before the tax shield
    #[serde(default = "default_cost_of_debt")]
    pub pre_tax_cost_of_debt: f64,

    /// Tax rate used for the debt tax shield
    #[serde(default = "default_wacc_tax_rate")]
    pub tax_rate: f64,

    /// Premium for small-company / key-person risk
    #[serde(default = "default_risk_premium")]
    pub business_risk_premium: f64,
}

fn default_equity_weight() -> f64 { 0.70 }
fn default_debt_weight() -> f64 { 0.30 }
fn default_cost_of_equity() -> f64 { 0.10 }
fn default_cost_of_debt() -> f64 { 0.035 }
fn default_wacc_tax_rate() -> f64 { 0.18 }
fn default_risk_premium() -> f64 { 0.023 }

impl Default for WaccComponents {
    fn default() -> Self {
        Self {
            equity_weight: 0.70,
            debt_weight: 0.30,
            cost_of_equity: 0.10,
            pre_tax_cost_of_debt: 0.035,
            tax_rate: 0.18,
            business_risk_premium: 0.023,
        }
    }
}

impl WaccComponents {
    /// Cost of debt after the tax shield
    pub fn after_tax_cost_of_debt(&self) -> f64 {
        self.pre_tax_cost_of_debt * (1.0 - self.tax_rate)
    }

    /// Weighted average cost of capital
    pub fn wacc(&self) -> f64 {
        self.equity_weight * self.cost_of_equity
            + self.debt_weight * self.after_tax_cost_of_debt()
            + self.business_risk_premium
    }
}
