//! Value a single company and print the appraisal summary
//!
//! Defaults reproduce the base case for a Swiss training and consulting
//! company; every assumption can be overridden from the command line.

use anyhow::Result;
use clap::Parser;

use dcf_valuation::{
    DcfInputs, GrowthSchedule, SensitivityGrid, SweepParams, ValuationEngine, WaccComponents,
};

#[derive(Parser, Debug)]
#[command(name = "run_valuation", about = "Value a company with the DCF engine")]
struct Args {
    /// Base year revenue (CHF)
    #[arg(long, default_value_t = 1_500_000.0)]
    revenue: f64,

    /// Revenue growth rate for the forecast years
    #[arg(long, default_value_t = 0.12)]
    growth: f64,

    /// Terminal growth rate
    #[arg(long, default_value_t = 0.02)]
    terminal_growth: f64,

    /// EBITDA margin
    #[arg(long, default_value_t = 0.25)]
    margin: f64,

    /// Tax rate on EBIT
    #[arg(long, default_value_t = 0.1379)]
    tax_rate: f64,

    /// Depreciation as a share of revenue
    #[arg(long, default_value_t = 0.03)]
    depreciation_rate: f64,

    /// Capex as a share of revenue
    #[arg(long, default_value_t = 0.01)]
    capex_rate: f64,

    /// Working-capital change as a share of the revenue change
    #[arg(long, default_value_t = 0.15)]
    wc_rate: f64,

    /// Discount rate; ignored with --derive-wacc
    #[arg(long, default_value_t = 0.102)]
    wacc: f64,

    /// Terminal EBITDA exit multiple
    #[arg(long, default_value_t = 1.2)]
    terminal_multiple: f64,

    /// Net debt (CHF)
    #[arg(long, default_value_t = 20_000.0)]
    net_debt: f64,

    /// Forecast horizon in years
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Derive the discount rate from the capital structure components
    #[arg(long)]
    derive_wacc: bool,

    /// Print the WACC x terminal growth sensitivity matrix
    #[arg(long)]
    sensitivity: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut inputs = DcfInputs {
        base_revenue: args.revenue,
        revenue_growth: GrowthSchedule::Uniform(args.growth),
        terminal_growth_rate: args.terminal_growth,
        ebitda_margin: args.margin,
        tax_rate: args.tax_rate,
        depreciation_rate: args.depreciation_rate,
        capex_rate: args.capex_rate,
        wc_change_rate: args.wc_rate,
        discount_rate: args.wacc,
        terminal_ebitda_multiple: args.terminal_multiple,
        net_debt: args.net_debt,
        forecast_years: args.years,
    };

    if args.derive_wacc {
        let components = WaccComponents::default();
        inputs.discount_rate = components.wacc();
        println!(
            "Derived WACC: {:.2}% (equity {:.0}%/{:.0}% debt, after-tax cost of debt {:.2}%)",
            inputs.discount_rate * 100.0,
            components.equity_weight * 100.0,
            components.debt_weight * 100.0,
            components.after_tax_cost_of_debt() * 100.0,
        );
    }

    let result = ValuationEngine::new(inputs.clone()).value()?;

    println!("=== DCF VALUATION SUMMARY ===");
    println!("Enterprise Value: CHF {:.2}", result.enterprise_value);
    println!("Equity Value: CHF {:.2}", result.equity_value);

    println!("\nTerminal Value:");
    println!(
        "  - Perpetuity Growth Method: CHF {:.2}",
        result.terminal.perpetuity_growth
    );
    println!(
        "  - Exit Multiple Method: CHF {:.2}",
        result.terminal.exit_multiple
    );
    println!(
        "  - PV of Terminal Value: CHF {:.2}",
        result.terminal.present_value
    );
    println!(
        "  - % of Enterprise Value: {:.1}%",
        result.terminal_value_share * 100.0
    );

    println!("\nKey Inputs:");
    println!("  - Base Revenue: CHF {:.2}", inputs.base_revenue);
    println!("  - Revenue Growth Rate: {:.1}%", args.growth * 100.0);
    println!(
        "  - Terminal Growth Rate: {:.1}%",
        inputs.terminal_growth_rate * 100.0
    );
    println!("  - EBITDA Margin: {:.1}%", inputs.ebitda_margin * 100.0);
    println!(
        "  - Discount Rate (WACC): {:.1}%",
        inputs.discount_rate * 100.0
    );

    println!("\nImplied Valuation Multiples:");
    println!("  - EV/EBITDA: {:.2}x", result.ev_to_ebitda);
    println!("  - EV/Revenue: {:.2}x", result.ev_to_revenue);

    println!("\nProjections:");
    println!(
        "{:<10} {:>14} {:>12} {:>12} {:>12} {:>10} {:>12}",
        "Period", "Revenue", "EBITDA", "NOPAT", "FCF", "DF", "PV of FCF"
    );
    for row in result.projections.rows() {
        let pv = match row.pv_fcf {
            Some(pv) => format!("{:.0}", pv),
            None => "-".to_string(),
        };
        println!(
            "{:<10} {:>14.0} {:>12.0} {:>12.0} {:>12.0} {:>10.4} {:>12}",
            row.period.to_string(),
            row.revenue,
            row.ebitda,
            row.nopat,
            row.fcf,
            row.discount_factor,
            pv
        );
    }

    if args.sensitivity {
        let grid = SensitivityGrid::sweep_around(&inputs, &SweepParams::default());

        println!("\n=== SENSITIVITY ANALYSIS (Equity Value in CHF) ===");
        print!("{:>8}", "WACC");
        for growth in &grid.growth_axis {
            print!(" {:>12.1}%", growth * 100.0);
        }
        println!();

        for (row_idx, wacc) in grid.wacc_axis.iter().enumerate() {
            print!("{:>7.1}%", wacc * 100.0);
            for col_idx in 0..grid.growth_axis.len() {
                match grid.cell(row_idx, col_idx) {
                    Some(equity) => print!(" {:>13.0}", equity),
                    None => print!(" {:>13}", "n/a"),
                }
            }
            println!();
        }
    }

    Ok(())
}
