//! Core valuation inputs
//!
//! Defaults reflect the standard base case for a Swiss training and
//! consulting company (CHF figures, five-year horizon).

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Revenue growth over the explicit forecast horizon
///
/// Either a single rate applied to every forecast year, or a per-year
/// schedule. A schedule shorter than the horizon keeps using its last entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrowthSchedule {
    /// Same rate in every forecast year
    Uniform(f64),
    /// Rates by forecast year (1-indexed)
    PerYear(Vec<f64>),
}

impl GrowthSchedule {
    /// Get the growth rate for a forecast year (1-indexed)
    pub fn rate_for_year(&self, year: u32) -> f64 {
        match self {
            GrowthSchedule::Uniform(rate) => *rate,
            GrowthSchedule::PerYear(rates) => {
                let idx = (year as usize).saturating_sub(1);
                rates
                    .get(idx)
                    .copied()
                    .unwrap_or_else(|| rates.last().copied().unwrap_or(0.0))
            }
        }
    }

    /// True for a per-year schedule with no entries
    pub fn is_empty(&self) -> bool {
        matches!(self, GrowthSchedule::PerYear(rates) if rates.is_empty())
    }
}

/// Full input set for one valuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DcfInputs {
    /// Base year revenue (CHF)
    #[serde(default = "default_base_revenue")]
    pub base_revenue: f64,

    /// Revenue growth over the forecast horizon
    /// Default: 12% in every forecast year
    #[serde(default = "default_growth")]
    pub revenue_growth: GrowthSchedule,

    /// Perpetuity growth rate beyond the horizon
    #[serde(default = "default_terminal_growth")]
    pub terminal_growth_rate: f64,

    /// EBITDA as a fraction of revenue
    #[serde(default = "default_ebitda_margin")]
    pub ebitda_margin: f64,

    /// Tax rate applied to EBIT
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Depreciation as a fraction of revenue
    #[serde(default = "default_depreciation_rate")]
    pub depreciation_rate: f64,

    /// Capital expenditure as a fraction of revenue
    #[serde(default = "default_capex_rate")]
    pub capex_rate: f64,

    /// Working-capital change as a fraction of the revenue change
    #[serde(default = "default_wc_change_rate")]
    pub wc_change_rate: f64,

    /// Discount rate (WACC)
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,

    /// Exit multiple applied to final-year EBITDA
    #[serde(default = "default_terminal_multiple")]
    pub terminal_ebitda_multiple: f64,

    /// Net debt subtracted from enterprise value (CHF)
    #[serde(default = "default_net_debt")]
    pub net_debt: f64,

    /// Explicit forecast horizon in years
    #[serde(default = "default_forecast_years")]
    pub forecast_years: u32,
}

fn default_base_revenue() -> f64 { 1_500_000.0 }
fn default_growth() -> GrowthSchedule { GrowthSchedule::Uniform(0.12) }
fn default_terminal_growth() -> f64 { 0.02 }
fn default_ebitda_margin() -> f64 { 0.25 }
fn default_tax_rate() -> f64 { 0.1379 }
fn default_depreciation_rate() -> f64 { 0.03 }
fn default_capex_rate() -> f64 { 0.01 }
fn default_wc_change_rate() -> f64 { 0.15 }
fn default_discount_rate() -> f64 { 0.102 }
fn default_terminal_multiple() -> f64 { 1.2 }
fn default_net_debt() -> f64 { 20_000.0 }
fn default_forecast_years() -> u32 { 5 }

impl Default for DcfInputs {
    fn default() -> Self {
        Self {
            base_revenue: 1_500_000.0,
            revenue_growth: GrowthSchedule::Uniform(0.12),
            terminal_growth_rate: 0.02,
            ebitda_margin: 0.25,
            tax_rate: 0.1379,
            depreciation_rate: 0.03,
            capex_rate: 0.01,
            wc_change_rate: 0.15,
            discount_rate: 0.102,
            terminal_ebitda_multiple: 1.2,
            net_debt: 20_000.0,
            forecast_years: 5,
        }
    }
}

impl DcfInputs {
    /// Check the input set before projecting or valuing
    ///
    /// Rejects non-positive revenue, an empty horizon or growth schedule,
    /// non-finite rates, and terminal growth at or above the discount rate
    /// (the Gordon formula diverges there).
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.base_revenue.is_finite() || self.base_revenue <= 0.0 {
            return Err(ModelError::NonPositiveRevenue(self.base_revenue));
        }
        if self.forecast_years == 0 {
            return Err(ModelError::EmptyHorizon);
        }
        if self.revenue_growth.is_empty() {
            return Err(ModelError::EmptyGrowthSchedule);
        }

        let checks = [
            ("terminal_growth_rate", self.terminal_growth_rate),
            ("ebitda_margin", self.ebitda_margin),
            ("tax_rate", self.tax_rate),
            ("depreciation_rate", self.depreciation_rate),
            ("capex_rate", self.capex_rate),
            ("wc_change_rate", self.wc_change_rate),
            ("discount_rate", self.discount_rate),
            ("terminal_ebitda_multiple", self.terminal_ebitda_multiple),
            ("net_debt", self.net_debt),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteInput(name));
            }
        }
        for year in 1..=self.forecast_years {
            if !self.revenue_growth.rate_for_year(year).is_finite() {
                return Err(ModelError::NonFiniteInput("revenue_growth"));
            }
        }

        if self.terminal_growth_rate >= self.discount_rate {
            return Err(ModelError::TerminalGrowthTooHigh {
                growth: self.terminal_growth_rate,
                discount: self.discount_rate,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_growth() {
        let growth = GrowthSchedule::Uniform(0.12);

        assert_eq!(growth.rate_for_year(1), 0.12);
        assert_eq!(growth.rate_for_year(10), 0.12);
    }

    #[test]
    fn test_per_year_growth_fallback() {
        let growth = GrowthSchedule::PerYear(vec![0.15, 0.12, 0.10]);

        assert_eq!(growth.rate_for_year(1), 0.15);
        assert_eq!(growth.rate_for_year(2), 0.12);
        assert_eq!(growth.rate_for_year(3), 0.10);
        // Beyond the schedule, keep using the last entry
        assert_eq!(growth.rate_for_year(4), 0.10);
        assert_eq!(growth.rate_for_year(9), 0.10);
    }

    #[test]
    fn test_default_inputs_are_valid() {
        let inputs = DcfInputs::default();
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        let mut inputs = DcfInputs::default();
        inputs.base_revenue = 0.0;
        assert!(matches!(
            inputs.validate(),
            Err(ModelError::NonPositiveRevenue(_))
        ));

        let mut inputs = DcfInputs::default();
        inputs.forecast_years = 0;
        assert!(matches!(inputs.validate(), Err(ModelError::EmptyHorizon)));

        let mut inputs = DcfInputs::default();
        inputs.revenue_growth = GrowthSchedule::PerYear(vec![]);
        assert!(matches!(
            inputs.validate(),
            Err(ModelError::EmptyGrowthSchedule)
        ));

        let mut inputs = DcfInputs::default();
        inputs.ebitda_margin = f64::NAN;
        assert!(matches!(
            inputs.validate(),
            Err(ModelError::NonFiniteInput("ebitda_margin"))
        ));
    }

    #[test]
    fn test_validation_rejects_divergent_terminal_value() {
        let mut inputs = DcfInputs::default();
        inputs.terminal_growth_rate = 0.102;
        assert!(matches!(
            inputs.validate(),
            Err(ModelError::TerminalGrowthTooHigh { .. })
        ));

        inputs.terminal_growth_rate = 0.15;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let inputs: DcfInputs = serde_json::from_str("{}").expect("Failed to parse");

        assert_eq!(inputs.base_revenue, 1_500_000.0);
        assert_eq!(inputs.discount_rate, 0.102);
        assert_eq!(inputs.forecast_years, 5);
    }

    #[test]
    fn test_growth_parses_from_number_or_array() {
        let inputs: DcfInputs =
            serde_json::from_str(r#"{"revenue_growth": 0.08}"#).expect("Failed to parse");
        assert_eq!(inputs.revenue_growth.rate_for_year(3), 0.08);

        let inputs: DcfInputs =
            serde_json::from_str(r#"{"revenue_growth": [0.15, 0.10]}"#).expect("Failed to parse");
        assert_eq!(inputs.revenue_growth.rate_for_year(1), 0.15);
        assert_eq!(inputs.revenue_growth.rate_for_year(5), 0.10);
    }
}
