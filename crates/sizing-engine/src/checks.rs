//! Validation and classification steps shared by the calculators.

use sizing_core::{
    is_percentage, is_positive_number, is_valid_number, validate_inputs, CalculatorMode, Field,
    FieldError, Messages, PositionDirection, RejectionKind, Stage, ValidationFailure,
};
use tracing::debug;

use crate::engine::classify_direction;

/// Collects field errors for one calculation.
pub(crate) struct Checks<'a> {
    mode: CalculatorMode,
    messages: &'a Messages,
    errors: Vec<FieldError>,
}

impl<'a> Checks<'a> {
    pub fn new(mode: CalculatorMode, messages: &'a Messages) -> Self {
        Self {
            mode,
            messages,
            errors: Vec::new(),
        }
    }

    /// Reject unless every required field holds a finite number.
    pub fn require_numbers(&self, fields: &[(Field, f64)]) -> Result<(), ValidationFailure> {
        if validate_inputs(fields.iter().copied()) {
            return Ok(());
        }

        let errors = fields
            .iter()
            .filter(|(_, value)| !is_valid_number(*value))
            .map(|&(field, _)| {
                FieldError::new(
                    field,
                    RejectionKind::InvalidNumber,
                    self.messages.invalid_number_for(field),
                )
            })
            .collect();

        Err(self.reject(Stage::Validating, errors))
    }

    pub fn positive(&mut self, field: Field, value: f64) -> &mut Self {
        if !is_positive_number(value) {
            self.errors.push(FieldError::new(
                field,
                RejectionKind::NonPositive,
                self.messages.non_positive_for(field),
            ));
        }
        self
    }

    pub fn percentage(&mut self, field: Field, value: f64) -> &mut Self {
        if !is_percentage(value) {
            self.errors.push(FieldError::new(
                field,
                RejectionKind::PercentageRange,
                self.messages.percentage_range.as_str(),
            ));
        }
        self
    }

    /// Reject if any range or sign check failed.
    pub fn finish(&mut self) -> Result<(), ValidationFailure> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let errors = std::mem::take(&mut self.errors);
        Err(self.reject(Stage::Validating, errors))
    }

    /// Classify the direction, rejecting equal entry and stop.
    pub fn classify(&self, entry: f64, stop: f64) -> Result<PositionDirection, ValidationFailure> {
        let direction = classify_direction(entry, stop);
        if direction.is_valid() {
            return Ok(direction);
        }

        let message = self.messages.entry_stop_equal.as_str();
        let errors = vec![
            FieldError::new(Field::EntryPrice, RejectionKind::EntryStopEqual, message),
            FieldError::new(Field::StopLoss, RejectionKind::EntryStopEqual, message),
        ];
        Err(self.reject(Stage::Classifying, errors))
    }

    fn reject(&self, stage: Stage, errors: Vec<FieldError>) -> ValidationFailure {
        let summary = match (stage, errors.as_slice()) {
            (Stage::Classifying, _) => self.messages.entry_stop_equal.clone(),
            (_, [only])
                if only.kind == RejectionKind::PercentageRange || only.field == Field::DollarRisk =>
            {
                only.message.clone()
            }
            _ => self.messages.fix_fields.clone(),
        };

        debug!(
            mode = %self.mode,
            stage = %stage,
            fields = errors.len(),
            "calculation rejected"
        );

        ValidationFailure::new(stage, errors, summary)
    }
}
