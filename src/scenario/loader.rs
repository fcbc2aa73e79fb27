//! CSV scenario loading
//!
//! One scenario per row. Only the `scenario` name column is required;
//! missing assumption columns fall back to the base-case defaults.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::assumptions::{DcfInputs, GrowthSchedule};
use crate::error::ScenarioError;

/// A named input set loaded from a scenario file
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub inputs: DcfInputs,
}

/// Raw CSV row; every assumption column is optional
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    scenario: String,
    #[serde(default)]
    base_revenue: Option<f64>,
    #[serde(default)]
    revenue_growth_rate: Option<f64>,
    #[serde(default)]
    terminal_growth_rate: Option<f64>,
    #[serde(default)]
    ebitda_margin: Option<f64>,
    #[serde(default)]
    tax_rate: Option<f64>,
    #[serde(default)]
    depreciation_rate: Option<f64>,
    #[serde(default)]
    capex_rate: Option<f64>,
    #[serde(default)]
    wc_change_rate: Option<f64>,
    #[serde(default)]
    discount_rate: Option<f64>,
    #[serde(default)]
    terminal_ebitda_multiple: Option<f64>,
    #[serde(default)]
    net_debt: Option<f64>,
    #[serde(default)]
    forecast_years: Option<u32>,
}

impl ScenarioRow {
    fn into_scenario(self) -> Scenario {
        let defaults = DcfInputs::default();
        let inputs = DcfInputs {
            base_revenue: self.base_revenue.unwrap_or(defaults.base_revenue),
            revenue_growth: self
                .revenue_growth_rate
                .map(GrowthSchedule::Uniform)
                .unwrap_or(defaults.revenue_growth),
            terminal_growth_rate: self
                .terminal_growth_rate
                .unwrap_or(defaults.terminal_growth_rate),
            ebitda_margin: self.ebitda_margin.unwrap_or(defaults.ebitda_margin),
            tax_rate: self.tax_rate.unwrap_or(defaults.tax_rate),
            depreciation_rate: self
                .depreciation_rate
                .unwrap_or(defaults.depreciation_rate),
            capex_rate: self.capex_rate.unwrap_or(defaults.capex_rate),
            wc_change_rate: self.wc_change_rate.unwrap_or(defaults.wc_change_rate),
            discount_rate: self.discount_rate.unwrap_or(defaults.discount_rate),
            terminal_ebitda_multiple: self
                .terminal_ebitda_multiple
                .unwrap_or(defaults.terminal_ebitda_multiple),
            net_debt: self.net_debt.unwrap_or(defaults.net_debt),
            forecast_years: self.forecast_years.unwrap_or(defaults.forecast_years),
        };

        Scenario {
            name: self.scenario,
            inputs,
        }
    }
}

/// Load scenarios from any reader (used by tests and the file loader)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for row in csv_reader.deserialize() {
        let row: ScenarioRow = row?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}

/// Load scenarios from a CSV file
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ScenarioError> {
    let file = File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}
