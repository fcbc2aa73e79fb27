//! Valuation input assumptions and WACC build-up

mod inputs;
mod wacc;

pub use inputs::{DcfInputs, GrowthSchedule};
pub use wacc::WaccComponents;
