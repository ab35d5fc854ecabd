//! User-facing messages.
//!
//! The table is an immutable value handed to the calculator, so callers can
//! override wording from configuration without any process-wide state.

use serde::{Deserialize, Serialize};

use crate::types::Field;

/// Messages attached to field errors and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub invalid_number: String,
    pub invalid_percentage: String,
    pub percentage_range: String,
    pub entry_stop_equal: String,
    pub dollar_risk_positive: String,
    pub positive_number: String,
    pub fix_fields: String,
    pub calculation_complete: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_number: "Please enter a valid number.".to_string(),
            invalid_percentage: "Please enter a valid percentage.".to_string(),
            percentage_range: "Position risk must be between 0 and 100.".to_string(),
            entry_stop_equal: "Entry price and stop loss cannot be equal.".to_string(),
            dollar_risk_positive: "Dollar risk must be greater than 0.".to_string(),
            positive_number: "Value must be greater than 0.".to_string(),
            fix_fields: "Please correct the highlighted fields.".to_string(),
            calculation_complete: "Calculation complete.".to_string(),
        }
    }
}

impl Messages {
    /// Message for a field that does not hold a finite number.
    pub fn invalid_number_for(&self, field: Field) -> &str {
        match field {
            Field::RiskPercentage => &self.invalid_percentage,
            _ => &self.invalid_number,
        }
    }

    /// Message for a field that must be strictly positive.
    pub fn non_positive_for(&self, field: Field) -> &str {
        match field {
            Field::DollarRisk => &self.dollar_risk_positive,
            _ => &self.positive_number,
        }
    }
}
