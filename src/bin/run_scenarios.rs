//! Batch-value every scenario in a CSV file
//!
//! Outputs one line per scenario for comparison across assumption sets

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use dcf_valuation::scenario::{load_scenarios, value_all};

#[derive(Parser, Debug)]
#[command(name = "run_scenarios", about = "Batch-value scenarios from a CSV file")]
struct Args {
    /// Path to the scenario CSV
    scenarios: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("failed to load {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running valuations...");
    let run_start = Instant::now();
    let outcomes = value_all(&scenarios);
    println!("Valuations complete in {:?}", run_start.elapsed());

    println!();
    println!(
        "{:<24} {:>16} {:>16} {:>10} {:>10}",
        "Scenario", "Enterprise", "Equity", "EV/EBITDA", "TV % EV"
    );

    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => println!(
                "{:<24} {:>16.0} {:>16.0} {:>9.2}x {:>9.1}%",
                outcome.name,
                result.enterprise_value,
                result.equity_value,
                result.ev_to_ebitda,
                result.terminal_value_share * 100.0,
            ),
            Err(err) => {
                failures += 1;
                println!("{:<24} FAILED: {}", outcome.name, err);
            }
        }
    }

    if failures > 0 {
        println!("\n{} of {} scenarios failed validation", failures, outcomes.len());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
