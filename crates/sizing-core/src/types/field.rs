//! Input field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-supplied input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AccountValue,
    RiskPercentage,
    DollarRisk,
    EntryPrice,
    StopLoss,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AccountValue => "account_value",
            Field::RiskPercentage => "risk_percentage",
            Field::DollarRisk => "dollar_risk",
            Field::EntryPrice => "entry_price",
            Field::StopLoss => "stop_loss",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::AccountValue => "Account Value",
            Field::RiskPercentage => "Risk Percentage",
            Field::DollarRisk => "Dollar Risk",
            Field::EntryPrice => "Entry Price",
            Field::StopLoss => "Stop Loss",
        }
    }

    /// Input hint shown under an invalid field.
    pub fn hint(&self) -> &'static str {
        match self {
            Field::AccountValue => "Enter account value in dollars (e.g., 10000).",
            Field::RiskPercentage => "Allowed range: 0–100.",
            Field::DollarRisk => "Positive dollars (e.g., 100).",
            Field::EntryPrice => "Positive price (e.g., 100.50).",
            Field::StopLoss => "Positive price (e.g., 95.00).",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
