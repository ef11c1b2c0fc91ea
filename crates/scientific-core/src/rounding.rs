//! Rounding and splitting options
//!
//! Both are plain data with serde support, so a caller can keep them in its
//! own configuration. The default rounding mode is half-to-even.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How to round an amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Banker's rounding: ties go to the even neighbour
    #[default]
    HalfEven,
    /// Ties away from zero
    HalfUp,
    /// Ties towards zero
    HalfDown,
    /// Towards zero
    Down,
    /// Away from zero
    Up,
    /// Towards negative infinity
    Floor,
    /// Towards positive infinity
    Ceiling,
}

impl RoundingMode {
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

/// Number of decimal digits to keep, and how to drop the rest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rounding {
    pub scale: u32,
    pub mode: RoundingMode,
}

impl Rounding {
    /// Round to `scale` digits, half to even
    pub fn new(scale: u32) -> Self {
        Self {
            scale,
            mode: RoundingMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn apply(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.scale, self.mode.strategy())
    }
}

/// Options of [`split`](crate::split::split) and
/// [`to_components`](crate::split::to_components)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Decimal digits kept by every component except the last
    pub scale: u32,
    /// Added before rounding down, so 11.999999999 ft still counts as 12 ft
    pub rounding_threshold: Decimal,
}

impl SplitOptions {
    pub const DEFAULT_ROUNDING_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 7);

    pub fn new(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn with_rounding_threshold(mut self, rounding_threshold: Decimal) -> Self {
        self.rounding_threshold = rounding_threshold;
        self
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            scale: 0,
            rounding_threshold: Self::DEFAULT_ROUNDING_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_half_even_is_default() {
        let rounding = Rounding::new(0);
        assert_eq!(rounding.mode, RoundingMode::HalfEven);
        assert_eq!(rounding.apply(Decimal::new(25, 1)), Decimal::from(2));
        assert_eq!(rounding.apply(Decimal::new(35, 1)), Decimal::from(4));
    }

    #[test]
    fn test_modes() {
        let value = Decimal::new(-125, 2);
        let at = |mode| Rounding::new(1).with_mode(mode).apply(value);
        assert_eq!(at(RoundingMode::HalfUp), Decimal::new(-13, 1));
        assert_eq!(at(RoundingMode::HalfDown), Decimal::new(-12, 1));
        assert_eq!(at(RoundingMode::Down), Decimal::new(-12, 1));
        assert_eq!(at(RoundingMode::Floor), Decimal::new(-13, 1));
        assert_eq!(at(RoundingMode::Ceiling), Decimal::new(-12, 1));
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(SplitOptions::default().rounding_threshold, Decimal::new(1, 7));
    }

    #[test]
    fn test_options_from_partial_config() {
        let options: SplitOptions = serde_json::from_str(r#"{"scale":2}"#).unwrap();
        assert_eq!(options, SplitOptions::new(2));

        let rounding: Rounding = serde_json::from_str(r#"{"mode":"Floor"}"#).unwrap();
        assert_eq!(rounding, Rounding::new(0).with_mode(RoundingMode::Floor));
    }
}
