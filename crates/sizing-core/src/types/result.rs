//! Calculation results.

use serde::{Deserialize, Serialize};

use super::{CalculatorMode, PositionDirection};

/// Prices at which profit equals 1x, 2x and 3x the risk per share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitTargets {
    pub one_r: f64,
    pub two_r: f64,
    pub three_r: f64,
}

impl ProfitTargets {
    /// R-multiples reported for every trade.
    pub const MULTIPLES: [f64; 3] = [1.0, 2.0, 3.0];

    pub fn as_array(&self) -> [f64; 3] {
        [self.one_r, self.two_r, self.three_r]
    }
}

/// The limit that determined the share count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingConstraint {
    /// Risk budget divided by risk per share
    Risk,
    /// Per-position dollar allotment divided by entry price
    Allotment,
}

/// Outcome of an accepted calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Calculator that produced the result
    pub mode: CalculatorMode,
    /// Long or short
    pub direction: PositionDirection,
    /// Fractional share count
    pub max_shares: f64,
    /// Shares times entry price
    pub position_size: f64,
    /// Distance between entry and stop
    pub risk_per_share: f64,
    /// Dollars lost if the stop is hit
    pub dollars_risked: f64,
    /// Trade risk in percent (per-share risk over entry for total risk,
    /// dollars risked over account for position percent)
    pub percent_risked: Option<f64>,
    /// R-multiple targets (total risk only)
    pub targets: Option<ProfitTargets>,
    /// Position count the allotment was derived from
    pub max_positions: Option<u32>,
    /// Account value divided by max positions
    pub position_allotment: Option<f64>,
    /// Which limit set the share count (total risk only)
    pub binding_constraint: Option<BindingConstraint>,
    /// Dollars allocated to the position (position percent only)
    pub position_allocation: Option<f64>,
    /// Position size over account size, in percent (dollar risk only)
    pub position_percent_of_account: Option<f64>,
}

impl CalculationResult {
    /// Create a result with only the fields every mode reports.
    pub fn new(
        mode: CalculatorMode,
        direction: PositionDirection,
        max_shares: f64,
        entry_price: f64,
        risk_per_share: f64,
        dollars_risked: f64,
    ) -> Self {
        Self {
            mode,
            direction,
            max_shares,
            position_size: max_shares * entry_price,
            risk_per_share,
            dollars_risked,
            percent_risked: None,
            targets: None,
            max_positions: None,
            position_allotment: None,
            binding_constraint: None,
            position_allocation: None,
            position_percent_of_account: None,
        }
    }

    /// Dollars that would be lost at the stop with `max_shares` held.
    pub fn risk_at_stop(&self) -> f64 {
        self.max_shares * self.risk_per_share
    }
}
