//! Named scenario loading and batch valuation

mod loader;

pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};

use rayon::prelude::*;

use crate::error::ModelError;
use crate::valuation::{ValuationEngine, ValuationResult};

/// Valuation outcome for one named scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ValuationResult, ModelError>,
}

/// Value every scenario in parallel
///
/// A scenario that fails validation carries its error in the outcome; it
/// never aborts the rest of the batch.
pub fn value_all(scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .par_iter()
        .map(|scenario| ScenarioOutcome {
            name: scenario.name.clone(),
            result: ValuationEngine::new(scenario.inputs.clone()).value(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::DcfInputs;

    #[test]
    fn test_bad_scenario_does_not_abort_batch() {
        let mut divergent = DcfInputs::default();
        divergent.terminal_growth_rate = 0.50;

        let scenarios = vec![
            Scenario {
                name: "base".to_string(),
                inputs: DcfInputs::default(),
            },
            Scenario {
                name: "divergent".to_string(),
                inputs: divergent,
            },
        ];

        let outcomes = value_all(&scenarios);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
    }
}
