//! Value types shared by every calculator mode.

mod direction;
mod field;
mod input;
mod mode;
mod result;

pub use direction::PositionDirection;
pub use field::Field;
pub use input::{DollarRiskInput, PositionPercentInput, TotalRiskInput, TradeInput};
pub use mode::CalculatorMode;
pub use result::{BindingConstraint, CalculationResult, ProfitTargets};
