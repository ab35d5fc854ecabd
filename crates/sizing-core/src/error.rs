//! Validation failure types.
//!
//! Bad input is never fatal: every rejection is reported as structured,
//! per-field data so the caller can highlight exactly the offending inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::types::Field;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Missing, empty, non-numeric, NaN or infinite
    InvalidNumber,
    /// Percentage outside `[0, 100]`
    PercentageRange,
    /// Value required to be strictly positive is `<= 0`
    NonPositive,
    /// Entry price equals stop loss, so the direction is undefined
    EntryStopEqual,
}

/// Pipeline stage of a calculation.
///
/// Calculations move `Collecting -> Validating -> Classifying -> Computing -> Done`
/// and may be rejected from `Validating` or `Classifying`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Collecting,
    Validating,
    Classifying,
    Computing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Collecting => "collecting",
            Stage::Validating => "validating",
            Stage::Classifying => "classifying",
            Stage::Computing => "computing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// A single field-level error.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Offending field
    pub field: Field,
    /// Error category
    pub kind: RejectionKind,
    /// Message shown next to the field
    pub message: String,
    /// Input hint for the field
    pub hint: String,
}

impl FieldError {
    pub fn new(field: Field, kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
            hint: field.hint().to_string(),
        }
    }
}

/// Structured rejection returned instead of a result.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{summary}")]
pub struct ValidationFailure {
    /// Stage the calculation was rejected in
    pub stage: Stage,
    /// Errors keyed by field, in field order
    pub field_errors: BTreeMap<Field, FieldError>,
    /// One-line message for notifications
    pub summary: String,
}

impl ValidationFailure {
    pub fn new(stage: Stage, errors: Vec<FieldError>, summary: impl Into<String>) -> Self {
        let field_errors = errors.into_iter().map(|e| (e.field, e)).collect();
        Self {
            stage,
            field_errors,
            summary: summary.into(),
        }
    }

    /// Error for a specific field, if it was rejected.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.field_errors.get(&field)
    }

    /// Rejected fields, in field order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.field_errors.keys().copied()
    }

    /// Check whether any field was rejected for the given reason.
    pub fn has_kind(&self, kind: RejectionKind) -> bool {
        self.field_errors.values().any(|e| e.kind == kind)
    }

    pub fn is_entry_stop_equal(&self) -> bool {
        self.has_kind(RejectionKind::EntryStopEqual)
    }

    pub fn len(&self) -> usize {
        self.field_errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_lookup() {
        let failure = ValidationFailure::new(
            Stage::Classifying,
            vec![
                FieldError::new(Field::StopLoss, RejectionKind::EntryStopEqual, "equal"),
                FieldError::new(Field::EntryPrice, RejectionKind::EntryStopEqual, "equal"),
            ],
            "Entry price and stop loss cannot be equal.",
        );

        assert_eq!(failure.len(), 2);
        assert!(failure.is_entry_stop_equal());
        assert!(!failure.has_kind(RejectionKind::InvalidNumber));
        // Ordered by field declaration, not insertion
        let fields: Vec<_> = failure.fields().collect();
        assert_eq!(fields, vec![Field::EntryPrice, Field::StopLoss]);
        assert_eq!(failure.to_string(), "Entry price and stop loss cannot be equal.");
    }

    #[test]
    fn test_stage_names() {
        let stages = [
            Stage::Collecting,
            Stage::Validating,
            Stage::Classifying,
            Stage::Computing,
            Stage::Done,
        ];
        let names: Vec<_> = stages.iter().map(Stage::to_string).collect();
        assert_eq!(
            names,
            vec!["collecting", "validating", "classifying", "computing", "done"]
        );
    }

    #[test]
    fn test_field_error_carries_hint() {
        let err = FieldError::new(
            Field::RiskPercentage,
            RejectionKind::PercentageRange,
            "Position risk must be between 0 and 100.",
        );
        assert_eq!(err.hint, "Allowed range: 0–100.");
        assert_eq!(
            err.to_string(),
            "risk_percentage: Position risk must be between 0 and 100."
        );
    }
}
