//! Error types for input validation and scenario loading

use thiserror::Error;

/// Errors raised when validating valuation inputs or running the model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("base revenue must be positive, got {0}")]
    NonPositiveRevenue(f64),

    #[error("forecast horizon must cover at least one year")]
    EmptyHorizon,

    #[error("per-year growth schedule has no entries")]
    EmptyGrowthSchedule,

    /// The Gordon growth formula diverges when growth reaches the discount rate
    #[error("terminal growth rate {growth} must be below the discount rate {discount}")]
    TerminalGrowthTooHigh { growth: f64, discount: f64 },

    #[error("input `{0}` is not a finite number")]
    NonFiniteInput(&'static str),
}

/// Errors raised while loading scenario files
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario row")]
    Csv(#[from] csv::Error),
}
