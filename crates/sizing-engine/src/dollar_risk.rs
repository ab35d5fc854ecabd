//! Dollar-risk calculator.
//!
//! The trader states the dollars at risk directly; there is no allotment
//! constraint in this mode.

use sizing_core::{
    is_positive_number, CalculationResult, CalculatorMode, DollarRiskInput, Field, Messages,
    Stage, ValidationFailure,
};
use tracing::{debug, trace};

use crate::checks::Checks;
use crate::engine::{max_shares, risk_per_share};

pub(crate) fn compute(
    input: &DollarRiskInput,
    messages: &Messages,
) -> Result<CalculationResult, ValidationFailure> {
    let mode = CalculatorMode::DollarRisk;
    trace!(mode = %mode, stage = %Stage::Collecting, "inputs received");
    let mut checks = Checks::new(mode, messages);

    checks.require_numbers(&input.required_fields())?;
    checks
        .positive(Field::DollarRisk, input.dollar_risk)
        .positive(Field::EntryPrice, input.entry_price)
        .positive(Field::StopLoss, input.stop_loss);
    checks.finish()?;

    let direction = checks.classify(input.entry_price, input.stop_loss)?;
    trace!(mode = %mode, stage = %Stage::Computing, %direction, "direction classified");

    let entry = input.entry_price;
    let risk_per_share = risk_per_share(entry, input.stop_loss);
    let shares = max_shares(input.dollar_risk, risk_per_share, None);

    let mut result = CalculationResult::new(
        mode,
        direction,
        shares,
        entry,
        risk_per_share,
        input.dollar_risk,
    );

    // Account size is informational; anything unusable reads as not applicable
    let position_size = result.position_size;
    result.position_percent_of_account = input
        .account_size
        .filter(|&size| is_positive_number(size))
        .map(|size| (position_size / size) * 100.0);

    debug!(
        mode = %mode,
        stage = %Stage::Done,
        %direction,
        max_shares = shares,
        dollars_risked = input.dollar_risk,
        "calculation complete"
    );

    Ok(result)
}
