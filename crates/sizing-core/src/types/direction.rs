//! Trade direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade, derived from where the stop sits relative to entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionDirection {
    /// Entry above stop: profits when price rises
    Long,
    /// Stop above entry: profits when price falls
    Short,
    /// Entry equals stop: no defined risk per share
    Invalid,
}

impl PositionDirection {
    pub fn is_valid(&self) -> bool {
        !matches!(self, PositionDirection::Invalid)
    }

    /// Sign applied to R-multiples: `+1` for long, `-1` for short.
    pub fn sign(&self) -> Option<f64> {
        match self {
            PositionDirection::Long => Some(1.0),
            PositionDirection::Short => Some(-1.0),
            PositionDirection::Invalid => None,
        }
    }
}

impl fmt::Display for PositionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PositionDirection::Long => "Long Position",
            PositionDirection::Short => "Short Position",
            PositionDirection::Invalid => "Invalid",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PositionDirection::Long.to_string(), "Long Position");
        assert_eq!(PositionDirection::Short.to_string(), "Short Position");
        assert_eq!(PositionDirection::Invalid.to_string(), "Invalid");
    }

    #[test]
    fn test_sign() {
        assert_eq!(PositionDirection::Long.sign(), Some(1.0));
        assert_eq!(PositionDirection::Short.sign(), Some(-1.0));
        assert_eq!(PositionDirection::Invalid.sign(), None);
        assert!(!PositionDirection::Invalid.is_valid());
    }
}
