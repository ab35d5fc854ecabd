//! Position engine.
//!
//! All functions are pure and total over their documented domain. Callers
//! must classify the direction first: `risk_per_share` and `max_shares` have
//! no defined result when entry equals stop.

use sizing_core::{BindingConstraint, PositionDirection, ProfitTargets};

/// Per-position capital limit derived from a maximum position count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllotmentCap {
    /// Dollars available to one position
    pub allotment: f64,
    /// Price paid per share
    pub entry_price: f64,
}

impl AllotmentCap {
    pub fn new(allotment: f64, entry_price: f64) -> Self {
        Self {
            allotment,
            entry_price,
        }
    }

    /// Shares the allotment can buy.
    pub fn shares(&self) -> f64 {
        self.allotment / self.entry_price
    }
}

/// Classify a trade by where the stop sits relative to entry.
///
/// Uses exact comparison: only identical prices are `Invalid`.
pub fn classify_direction(entry: f64, stop: f64) -> PositionDirection {
    if entry > stop {
        PositionDirection::Long
    } else if stop > entry {
        PositionDirection::Short
    } else {
        PositionDirection::Invalid
    }
}

/// Dollar loss per share if the stop is hit.
pub fn risk_per_share(entry: f64, stop: f64) -> f64 {
    (entry - stop).abs()
}

/// Largest share count that stays within the risk budget and, when given,
/// the per-position allotment.
///
/// The result never risks more than `dollars_risked`: when rounding makes
/// `shares * risk_per_share` overshoot the budget, the share count is
/// stepped down to the largest value whose risk fits.
pub fn max_shares(dollars_risked: f64, risk_per_share: f64, cap: Option<AllotmentCap>) -> f64 {
    let by_risk = dollars_risked / risk_per_share;

    let shares = match cap {
        Some(cap) => by_risk.min(cap.shares()),
        None => by_risk,
    };

    clamp_to_budget(shares, risk_per_share, dollars_risked)
}

/// Step `shares` down one ULP at a time until its risk fits the budget.
///
/// Division rounding leaves the product at most a few ULPs over, so the loop
/// runs a handful of times at most.
fn clamp_to_budget(mut shares: f64, risk_per_share: f64, dollars_risked: f64) -> f64 {
    while shares > 0.0 && shares * risk_per_share > dollars_risked {
        shares = next_down(shares);
    }
    shares
}

/// Largest `f64` below a positive value.
fn next_down(value: f64) -> f64 {
    if value.is_infinite() {
        f64::MAX
    } else {
        f64::from_bits(value.to_bits() - 1)
    }
}

/// Which limit sets the share count. Ties go to the risk budget.
pub fn binding_constraint(
    dollars_risked: f64,
    risk_per_share: f64,
    cap: Option<AllotmentCap>,
) -> BindingConstraint {
    match cap {
        Some(cap) if cap.shares() < dollars_risked / risk_per_share => BindingConstraint::Allotment,
        _ => BindingConstraint::Risk,
    }
}

/// 1R, 2R and 3R target prices in the direction favorable to the trade.
///
/// Returns `None` for an invalid direction.
pub fn profit_targets(
    direction: PositionDirection,
    entry: f64,
    risk_per_share: f64,
) -> Option<ProfitTargets> {
    let sign = direction.sign()?;
    let [one_r, two_r, three_r] = ProfitTargets::MULTIPLES.map(|k| entry + risk_per_share * k * sign);

    Some(ProfitTargets {
        one_r,
        two_r,
        three_r,
    })
}

/// Capital available to each of `max_positions` concurrent positions.
///
/// A zero position count has no allotment.
pub fn position_allotment(account_value: f64, max_positions: u32) -> Option<f64> {
    (max_positions > 0).then(|| account_value / f64::from(max_positions))
}
