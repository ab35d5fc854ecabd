//! Total-risk calculator.
//!
//! A percentage of the account is the risk budget. An optional maximum
//! position count caps each trade at `account_value / max_positions`.

use sizing_core::{
    CalculationResult, CalculatorMode, Field, Messages, Stage, TotalRiskInput, ValidationFailure,
};
use tracing::{debug, trace};

use crate::checks::Checks;
use crate::engine::{
    binding_constraint, max_shares, position_allotment, profit_targets, risk_per_share,
    AllotmentCap,
};

pub(crate) fn compute(
    input: &TotalRiskInput,
    messages: &Messages,
) -> Result<CalculationResult, ValidationFailure> {
    let mode = CalculatorMode::TotalRisk;
    trace!(mode = %mode, stage = %Stage::Collecting, "inputs received");
    let mut checks = Checks::new(mode, messages);

    checks.require_numbers(&input.required_fields())?;
    checks
        .positive(Field::AccountValue, input.account_value)
        .percentage(Field::RiskPercentage, input.risk_percentage)
        .positive(Field::EntryPrice, input.entry_price)
        .positive(Field::StopLoss, input.stop_loss);
    checks.finish()?;

    let direction = checks.classify(input.entry_price, input.stop_loss)?;
    trace!(mode = %mode, stage = %Stage::Computing, %direction, "direction classified");

    let entry = input.entry_price;
    let risk_per_share = risk_per_share(entry, input.stop_loss);
    // Scale the percentage first so large accounts cannot overflow
    let dollars_risked = input.account_value * (input.risk_percentage / 100.0);

    // A zero position count means no allotment, not an error
    let max_positions = input.max_positions.filter(|&n| n > 0);
    let allotment = max_positions.and_then(|n| position_allotment(input.account_value, n));
    let cap = allotment.map(|allotment| AllotmentCap::new(allotment, entry));

    let shares = max_shares(dollars_risked, risk_per_share, cap);

    let mut result =
        CalculationResult::new(mode, direction, shares, entry, risk_per_share, dollars_risked);
    result.percent_risked = Some((risk_per_share / entry) * 100.0);
    result.targets = profit_targets(direction, entry, risk_per_share);
    result.max_positions = max_positions;
    result.position_allotment = allotment;
    result.binding_constraint = Some(binding_constraint(dollars_risked, risk_per_share, cap));

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
