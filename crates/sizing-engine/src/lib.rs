//! Position sizing engine.
//!
//! Pure functions for direction, risk per share, share count and profit
//! targets, plus the three calculators that compose validation, the engine
//! and result assembly.

mod calculator;
mod checks;
mod dollar_risk;
pub mod engine;
mod position_percent;
mod total_risk;

pub use calculator::Calculator;
pub use engine::{
    binding_constraint, classify_direction, max_shares, position_allotment, profit_targets,
    risk_per_share, AllotmentCap,
};
