//! Valuation engine closing the forecast with a terminal value

mod engine;

pub use engine::{TerminalValue, ValuationEngine, ValuationResult};
