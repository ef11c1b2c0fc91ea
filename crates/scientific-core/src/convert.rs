//! Conversion between units of one quantity
//!
//! Every conversion pivots through SI: `to.from_si(from.to_si(value))`.
//! Units of different quantities do not type-check.

use rust_decimal::Decimal;
use std::any::Any;

use crate::error::Result;
use crate::rounding::Rounding;
use crate::types::ScientificUnit;

/// Convert an amount from one unit to another
///
/// Converting to the same unit returns the amount untouched.
pub fn convert_value<A, B>(value: Decimal, from: A, to: B) -> Result<Decimal>
where
    A: ScientificUnit,
    B: ScientificUnit<Quantity = A::Quantity>,
{
    if (&from as &dyn Any).downcast_ref::<B>() == Some(&to) {
        return Ok(value);
    }

    // Convert to SI, then to target unit
    let si = from.to_si(value)?;
    to.from_si(si)
}

/// Convert an amount, then round it
pub fn convert_value_rounded<A, B>(value: Decimal, from: A, to: B, rounding: Rounding) -> Result<Decimal>
where
    A: ScientificUnit,
    B: ScientificUnit<Quantity = A::Quantity>,
{
    convert_value(value, from, to).map(|converted| rounding.apply(converted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode;
    use crate::types::Per;
    use crate::units::{LengthUnit, TemperatureUnit, TimeUnit, VolumeUnit};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_length_conversion() {
        let km_to_m = convert_value(Decimal::ONE, LengthUnit::Kilometer, LengthUnit::Meter);
        assert_eq!(km_to_m, Ok(Decimal::from(1000)));

        let mi_to_km = convert_value(Decimal::ONE, LengthUnit::Mile, LengthUnit::Kilometer);
        assert_eq!(mi_to_km, Ok(Decimal::new(1_609_344, 6)));

        let ft_to_in = convert_value(Decimal::from(3), LengthUnit::Foot, LengthUnit::Inch);
        assert_eq!(ft_to_in, Ok(Decimal::from(36)));
    }

    #[test]
    fn test_time_conversion() {
        let hours_to_min = convert_value(Decimal::TWO, TimeUnit::Hour, TimeUnit::Minute);
        assert_eq!(hours_to_min, Ok(Decimal::from(120)));
    }

    #[test]
    fn test_temperature_conversion() {
        let boiling = convert_value(Decimal::from(100), TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert_eq!(boiling, Ok(Decimal::from(212)));

        let freezing = convert_value(Decimal::from(32), TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin);
        assert_eq!(freezing, Ok(Decimal::new(27315, 2)));
    }

    #[test]
    fn test_same_unit_is_exact() {
        let third = Decimal::ONE / Decimal::from(3);
        assert_eq!(
            convert_value(third, TemperatureUnit::Fahrenheit, TemperatureUnit::Fahrenheit),
            Ok(third)
        );
    }

    #[test]
    fn test_gallons_differ_between_systems() {
        let liters = convert_value(Decimal::ONE, VolumeUnit::ImperialGallon, VolumeUnit::Liter).unwrap();
        assert_eq!(liters, Decimal::new(454609, 5));
        let us = convert_value(Decimal::ONE, VolumeUnit::ImperialGallon, VolumeUnit::USGallon).unwrap();
        assert!(us > Decimal::new(12, 1));
    }

    #[test]
    fn test_composite_conversion() {
        let kph = Per::new(LengthUnit::Kilometer, TimeUnit::Hour).unwrap();
        let mps = Per::new(LengthUnit::Meter, TimeUnit::Second).unwrap();
        assert_eq!(convert_value(Decimal::from(90), kph, mps), Ok(Decimal::from(25)));
    }

    #[test]
    fn test_rounded_conversion() {
        let rounded = convert_value_rounded(
            Decimal::ONE,
            LengthUnit::Inch,
            LengthUnit::Centimeter,
            Rounding::new(1),
        );
        assert_eq!(rounded, Ok(Decimal::new(25, 1)));

        let up = convert_value_rounded(
            Decimal::ONE,
            LengthUnit::Inch,
            LengthUnit::Centimeter,
            Rounding::new(0).with_mode(RoundingMode::Up),
        );
        assert_eq!(up, Ok(Decimal::from(3)));
    }
}
