//! Discounted cash flow valuation engine for training and consulting
//! company appraisals.
//!
//! The library projects revenue, EBITDA and free cash flow over an explicit
//! forecast horizon, discounts the cash flows at the WACC, closes the horizon
//! with a Gordon-growth terminal value, and derives enterprise and equity
//! value. A sensitivity sweep re-prices the company across a grid of
//! (WACC, terminal growth) pairs, and a scenario loader batch-values a CSV of
//! named assumption sets.

pub mod assumptions;
pub mod error;
pub mod projection;
pub mod scenario;
pub mod sensitivity;
pub mod valuation;

pub use assumptions::{DcfInputs, GrowthSchedule, WaccComponents};
pub use error::{ModelError, ScenarioError};
pub use projection::{Period, ProjectionEngine, ProjectionRow, ProjectionTable};
pub use sensitivity::{SensitivityGrid, SweepParams};
pub use valuation::{TerminalValue, ValuationEngine, ValuationResult};
