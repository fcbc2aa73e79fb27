//! Builds the Base / forecast / Terminal cash flow table for one input set

use log::debug;

use super::table::{Period, ProjectionRow, ProjectionTable};
use crate::assumptions::DcfInputs;
use crate::error::ModelError;

/// Projects revenue through free cash flow for every period
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    inputs: DcfInputs,
}

impl ProjectionEngine {
    pub fn new(inputs: DcfInputs) -> Self {
        Self { inputs }
    }

    /// Project the full table
    ///
    /// Validates the inputs, then compounds revenue through the forecast
    /// years and one terminal year, deriving the income-statement and cash
    /// flow line items per row.
    pub fn project(&self) -> Result<ProjectionTable, ModelError> {
        self.inputs.validate()?;
        let inputs = &self.inputs;

        let mut rows = Vec::with_capacity(inputs.forecast_years as usize + 2);

        // Base year: no growth, no working-capital change, undiscounted
        rows.push(self.derive_row(Period::Base, inputs.base_revenue, 0.0, 1.0));

        let mut revenue = inputs.base_revenue;
        for year in 1..=inputs.forecast_years {
            let prior = revenue;
            revenue = prior * (1.0 + inputs.revenue_growth.rate_for_year(year));
            let wc_change = (revenue - prior) * inputs.wc_change_rate;
            let factor = 1.0 / (1.0 + inputs.discount_rate).powi(year as i32);
            rows.push(self.derive_row(Period::Year(year), revenue, wc_change, factor));
        }

        // Terminal year grows once more at the perpetuity rate and shares
        // the final forecast year's discount factor
        let last_factor =
            1.0 / (1.0 + inputs.discount_rate).powi(inputs.forecast_years as i32);
        let terminal_revenue = revenue * (1.0 + inputs.terminal_growth_rate);
        let terminal_wc = (terminal_revenue - revenue) * inputs.wc_change_rate;
        let mut terminal =
            self.derive_row(Period::Terminal, terminal_revenue, terminal_wc, last_factor);
        terminal.pv_fcf = None;
        rows.push(terminal);

        debug!(
            "projected {} periods, terminal revenue {:.0}",
            rows.len(),
            terminal_revenue
        );

        Ok(ProjectionTable::new(rows))
    }

    fn derive_row(
        &self,
        period: Period,
        revenue: f64,
        wc_change: f64,
        discount_factor: f64,
    ) -> ProjectionRow {
        let inputs = &self.inputs;
        let ebitda = revenue * inputs.ebitda_margin;
        let depreciation = revenue * inputs.depreciation_rate;
        let ebit = ebitda - depreciation;
        let taxes = ebit * inputs.tax_rate;
        let nopat = ebit - taxes;
        let capex = revenue * inputs.capex_rate;
        let fcf = nopat + depreciation - capex - wc_change;

        ProjectionRow {
            period,
            revenue,
            ebitda,
            depreciation,
            ebit,
            taxes,
            nopat,
            capex,
            wc_change,
            fcf,
            discount_factor,
            pv_fcf: Some(fcf * discount_factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::GrowthSchedule;
    use approx::assert_relative_eq;

    #[test]
    fn test_revenue_compounding() {
        let engine = ProjectionEngine::new(DcfInputs::default());
        let table = engine.project().expect("projection failed");

        assert_eq!(table.rows().len(), 7); // Base + 5 years + Terminal
        assert_eq!(table.base().unwrap().revenue, 1_500_000.0);
        assert_relative_eq!(table.year(1).unwrap().revenue, 1_680_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            table.year(5).unwrap().revenue,
            1_500_000.0 * 1.12f64.powi(5),
            max_relative = 1e-12
        );

        // Terminal revenue grows once at the terminal rate
        let terminal = table.terminal().unwrap();
        assert_relative_eq!(
            terminal.revenue,
            table.year(5).unwrap().revenue * 1.02,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_base_row_conventions() {
        let engine = ProjectionEngine::new(DcfInputs::default());
        let table = engine.project().expect("projection failed");
        let base = table.base().unwrap();

        assert_eq!(base.wc_change, 0.0);
        assert_eq!(base.discount_factor, 1.0);
        assert_relative_eq!(base.pv_fcf.unwrap(), base.fcf, max_relative = 1e-12);
        // 330000 EBIT taxed at 13.79%, plus depreciation, less capex
        assert_relative_eq!(base.fcf, 314_493.0, max_relative = 1e-10);
    }

    #[test]
    fn test_forecast_line_items() {
        let engine = ProjectionEngine::new(DcfInputs::default());
        let table = engine.project().expect("projection failed");
        let year1 = table.year(1).unwrap();

        assert_relative_eq!(year1.ebitda, 420_000.0, max_relative = 1e-12);
        assert_relative_eq!(year1.depreciation, 50_400.0, max_relative = 1e-12);
        assert_relative_eq!(year1.ebit, 369_600.0, max_relative = 1e-12);
        assert_relative_eq!(year1.taxes, 50_967.84, max_relative = 1e-10);
        assert_relative_eq!(year1.nopat, 318_632.16, max_relative = 1e-10);
        assert_relative_eq!(year1.capex, 16_800.0, max_relative = 1e-12);
        // 15% of the 180k revenue step
        assert_relative_eq!(year1.wc_change, 27_000.0, max_relative = 1e-12);
        assert_relative_eq!(year1.fcf, 325_232.16, max_relative = 1e-10);
    }

    #[test]
    fn test_discount_factors() {
        let engine = ProjectionEngine::new(DcfInputs::default());
        let table = engine.project().expect("projection failed");

        assert_relative_eq!(
            table.year(2).unwrap().discount_factor,
            1.0 / 1.102f64.powi(2),
            max_relative = 1e-12
        );
        // Terminal row reuses the final forecast year's factor
        assert_eq!(
            table.terminal().unwrap().discount_factor,
            table.year(5).unwrap().discount_factor
        );
        // The terminal value is discounted separately
        assert!(table.terminal().unwrap().pv_fcf.is_none());
    }

    #[test]
    fn test_per_year_growth_schedule() {
        let mut inputs = DcfInputs::default();
        inputs.revenue_growth = GrowthSchedule::PerYear(vec![0.20, 0.10]);
        inputs.forecast_years = 4;
        let table = ProjectionEngine::new(inputs).project().expect("projection failed");

        assert_relative_eq!(table.year(1).unwrap().revenue, 1_800_000.0, max_relative = 1e-12);
        assert_relative_eq!(table.year(2).unwrap().revenue, 1_980_000.0, max_relative = 1e-12);
        // Years beyond the schedule keep the last rate
        assert_relative_eq!(table.year(3).unwrap().revenue, 2_178_000.0, max_relative = 1e-12);
        assert_relative_eq!(table.year(4).unwrap().revenue, 2_395_800.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut inputs = DcfInputs::default();
        inputs.terminal_growth_rate = 0.20;
        assert!(ProjectionEngine::new(inputs).project().is_err());
    }

    #[test]
    fn test_forecast_pv_total_excludes_base() {
        let engine = ProjectionEngine::new(DcfInputs::default());
        let table = engine.project().expect("projection failed");

        let by_hand: f64 = (1..=5)
            .map(|year| table.year(year).unwrap().pv_fcf.unwrap())
            .sum();
        assert_relative_eq!(table.forecast_pv_total(), by_hand, max_relative = 1e-12);

        // The base row carries a PV but stays out of the forecast total
        let with_base = by_hand + table.base().unwrap().pv_fcf.unwrap();
        assert!(table.forecast_pv_total() < with_base);
    }
}
