//! Calculator modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three sizing calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorMode {
    /// Percentage of the account is the risk budget
    TotalRisk,
    /// Fixed dollar amount is the risk budget
    DollarRisk,
    /// Percentage of the account sizes the position itself
    PositionPercent,
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalculatorMode::TotalRisk => "Total Risk",
            CalculatorMode::DollarRisk => "Dollar Risk",
            CalculatorMode::PositionPercent => "Position Percent",
        };
        f.write_str(name)
    }
}
