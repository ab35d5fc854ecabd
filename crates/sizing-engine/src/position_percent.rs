//! Position-percent calculator.
//!
//! The percentage sizes the position itself. Dollars at risk are whatever
//! falls out of that allocation at the given stop.

use sizing_core::{
    CalculationResult, CalculatorMode, Field, Messages, PositionPercentInput, Stage,
    ValidationFailure,
};
use tracing::{debug, trace};

use crate::checks::Checks;
use crate::engine::risk_per_share;

pub(crate) fn compute(
    input: &PositionPercentInput,
    messages: &Messages,
) -> Result<CalculationResult, ValidationFailure> {
    let mode = CalculatorMode::PositionPercent;
    trace!(mode = %mode, stage = %Stage::Collecting, "inputs received");
    let mut checks = Checks::new(mode, messages);

    checks.require_numbers(&input.required_fields())?;
    checks
        .positive(Field::AccountValue, input.account_value)
        .percentage(Field::RiskPercentage, input.position_percentage)
        .positive(Field::EntryPrice, input.entry_price)
        .positive(Field::StopLoss, input.stop_loss);
    checks.finish()?;

    let direction = checks.classify(input.entry_price, input.stop_loss)?;
    trace!(mode = %mode, stage = %Stage::Computing, %direction, "direction classified");

    let entry = input.entry_price;
    let risk_per_share = risk_per_share(entry, input.stop_loss);
    let allocation = input.account_value * (input.position_percentage / 100.0);
    let shares = allocation / entry;
    let dollars_risked = shares * risk_per_share;

    let mut result =
        CalculationResult::new(mode, direction, shares, entry, risk_per_share, dollars_risked);
    result.position_allocation = Some(allocation);
    result.percent_risked = Some((dollars_risked / input.account_value) * 100.0);

    debug!(
        mode = %mode,
        stage = %Stage::Done,
        %direction,
        max_shares = shares,
        dollars_risked,
        "calculation complete"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizing_core::{PositionDirection, RejectionKind};

    fn calc(input: &PositionPercentInput) -> Result<CalculationResult, ValidationFailure> {
        compute(input, &Messages::default())
    }

    #[test]
    fn test_position_percent_long() {
        let result = calc(&PositionPercentInput::new(10000.0, 10.0, 50.0, 45.0)).unwrap();

        assert_eq!(result.direction, PositionDirection::Long);
        assert_eq!(result.position_allocation, Some(1000.0));
        assert_eq!(result.max_shares, 20.0);
        assert_eq!(result.position_size, 1000.0);
        assert_eq!(result.dollars_risked, 100.0);
        assert!((result.percent_risked.unwrap() - 1.0).abs() < 1e-9);
        assert_eq!(result.targets, None);
    }

    #[test]
    fn test_risk_follows_from_allocation() {
        // Same allocation, wider stop: more dollars at risk, same share count
        let tight = calc(&PositionPercentInput::new(10000.0, 10.0, 50.0, 45.0)).unwrap();
        let wide = calc(&PositionPercentInput::new(10000.0, 10.0, 50.0, 40.0)).unwrap();

        assert_eq!(tight.max_shares, wide.max_shares);
        assert_eq!(wide.dollars_risked, 200.0);
    }

    #[test]
    fn test_percentage_out_of_range() {
        let failure = calc(&PositionPercentInput::new(10000.0, 120.0, 50.0, 45.0)).unwrap_err();
        assert_eq!(
            failure.get(Field::RiskPercentage).unwrap().kind,
            RejectionKind::PercentageRange
        );
        assert_eq!(failure.summary, "Position risk must be between 0 and 100.");
    }

    #[test]
    fn test_non_positive_fields_collected() {
        let failure = calc(&PositionPercentInput::new(-10000.0, 10.0, 0.0, -45.0)).unwrap_err();

        assert_eq!(failure.stage, Stage::Validating);
        let fields: Vec<_> = failure.fields().collect();
        assert_eq!(
            fields,
            vec![Field::AccountValue, Field::EntryPrice, Field::StopLoss]
        );
        assert!(failure.has_kind(RejectionKind::NonPositive));
        assert_eq!(
            failure.get(Field::AccountValue).unwrap().message,
            "Value must be greater than 0."
        );
        assert_eq!(failure.summary, "Please correct the highlighted fields.");
    }

    #[test]
    fn test_large_account_does_not_overflow() {
        let result = calc(&PositionPercentInput::new(1e307, 100.0, 100.0, 90.0)).unwrap();
        assert_eq!(result.position_allocation, Some(1e307));
        assert!(result.max_shares.is_finite());
        assert!(result.dollars_risked.is_finite());
        assert!(result.percent_risked.unwrap().is_finite());
    }

    #[test]
    fn test_entry_equals_stop() {
        let failure = calc(&PositionPercentInput::new(10000.0, 10.0, 50.0, 50.0)).unwrap_err();
        assert_eq!(failure.stage, Stage::Classifying);
        assert!(failure.is_entry_stop_equal());
    }
}
