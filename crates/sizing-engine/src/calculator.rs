//! Calculator entry points.

use sizing_core::{
    CalculationResult, DollarRiskInput, Messages, PositionPercentInput, TotalRiskInput, TradeInput,
    ValidationFailure,
};

use crate::{dollar_risk, position_percent, total_risk};

/// Runs the sizing calculators against an immutable message table.
///
/// Holds no state between calls: identical inputs always produce identical
/// outputs.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    messages: Messages,
}

impl Calculator {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Size a trade from a percentage-of-account risk budget.
    pub fn total_risk(&self, input: &TotalRiskInput) -> Result<CalculationResult, ValidationFailure> {
        total_risk::compute(input, &self.messages)
    }

    /// Size a trade from a fixed dollar risk budget.
    pub fn dollar_risk(
        &self,
        input: &DollarRiskInput,
    ) -> Result<CalculationResult, ValidationFailure> {
        dollar_risk::compute(input, &self.messages)
    }

    /// Size a trade from a percentage-of-account position allocation.
    pub fn position_percent(
        &self,
        input: &PositionPercentInput,
    ) -> Result<CalculationResult, ValidationFailure> {
        position_percent::compute(input, &self.messages)
    }

    /// Dispatch on the input's mode.
    pub fn calculate(&self, input: &TradeInput) -> Result<CalculationResult, ValidationFailure> {
        match input {
            TradeInput::TotalRisk(input) => self.total_risk(input),
            TradeInput::DollarRisk(input) => self.dollar_risk(input),
            TradeInput::PositionPercent(input) => self.position_percent(input),
        }
    }
}
