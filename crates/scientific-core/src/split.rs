//! Splitting a value over several units (5.75 ft → 5 ft 9 in)
//!
//! Every component but the last is rounded down to
//! [`SplitOptions::scale`] digits; the last one carries whatever is left.
//! A small threshold is added before rounding down, to keep an amount that
//! sits just below a boundary (11.9999999 ft) from losing a whole unit.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

use crate::arith;
use crate::convert::convert_value;
use crate::error::{Result, UnitsError};
use crate::rounding::SplitOptions;
use crate::types::{MeasurementSystem, ScientificUnit, ScientificValue};

/// Splits `value` into a rounded-down amount of `left` and the remainder in
/// `right`.
///
/// Both units must share a measurement-system family. Units of another
/// quantity are rejected at compile time:
///
/// ```compile_fail
/// use scientific_core::units::{VolumeUnit, WeightUnit};
/// use scientific_core::ScientificUnit;
///
/// let volume = VolumeUnit::ImperialGallon.of(3);
/// let _ = volume.split(VolumeUnit::ImperialGallon, WeightUnit::Pound);
/// ```
pub fn split<V, L, R>(
    value: &ScientificValue<V>,
    left: L,
    right: R,
    options: &SplitOptions,
) -> Result<(ScientificValue<L>, ScientificValue<R>)>
where
    V: ScientificUnit,
    L: ScientificUnit<Quantity = V::Quantity>,
    R: ScientificUnit<Quantity = V::Quantity>,
{
    check_systems(&left, &right)?;

    let amount = convert_value(value.value(), value.unit(), left)?;
    let (whole, remainder) = split_amount(amount, options)?;
    let remainder = convert_value(remainder, left, right)?;

    trace!(%value, left = %left.symbol(), right = %right.symbol(), %whole, %remainder, "split value");

    Ok((ScientificValue::new(whole, left), ScientificValue::new(remainder, right)))
}

/// Decomposes `value` over `units`, largest unit first (feet, inches,
/// sixteenths of an inch).
///
/// Needs at least two units, all sharing one measurement-system family.
pub fn to_components<V, U, const N: usize>(
    value: &ScientificValue<V>,
    units: [U; N],
    options: &SplitOptions,
) -> Result<[ScientificValue<U>; N]>
where
    V: ScientificUnit,
    U: ScientificUnit<Quantity = V::Quantity>,
{
    if N < 2 {
        return Err(UnitsError::TooFewComponents(N));
    }

    let first = &units[0];
    units[1..].iter().try_fold(first.system(), |shared, unit| {
        shared
            .common(unit.system())
            .ok_or_else(|| incompatible(first, unit))
    })?;

    let mut amounts = [Decimal::ZERO; N];
    let mut carry = convert_value(value.value(), value.unit(), units[0])?;
    for index in 0..N - 1 {
        let (whole, remainder) = split_amount(carry, options)?;
        amounts[index] = whole;
        carry = convert_value(remainder, units[index], units[index + 1])?;
    }
    amounts[N - 1] = carry;

    trace!(%value, ?amounts, "decomposed value");

    Ok(std::array::from_fn(|index| {
        ScientificValue::new(amounts[index], units[index])
    }))
}

/// Splits an amount into its rounded-down part and the remainder.
///
/// Negative amounts split by magnitude; both parts keep the sign.
pub fn split_amount(amount: Decimal, options: &SplitOptions) -> Result<(Decimal, Decimal)> {
    let magnitude = amount.abs();
    let whole = arith::add(magnitude, options.rounding_threshold)?
        .round_dp_with_strategy(options.scale, RoundingStrategy::ToZero);
    let remainder = if whole < magnitude {
        arith::sub(magnitude, whole)?
    } else {
        Decimal::ZERO
    };

    if amount.is_sign_negative() {
        Ok((negate(whole), negate(remainder)))
    } else {
        Ok((whole, remainder))
    }
}

fn negate(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        amount
    } else {
        -amount
    }
}

fn check_systems<L: ScientificUnit, R: ScientificUnit>(left: &L, right: &R) -> Result<MeasurementSystem> {
    left.system()
        .common(right.system())
        .ok_or_else(|| incompatible(left, right))
}

fn incompatible<L: ScientificUnit, R: ScientificUnit>(left: &L, right: &R) -> UnitsError {
    UnitsError::IncompatibleMeasurementSystem {
        left_symbol: left.symbol().into_owned(),
        left: left.system(),
        right_symbol: right.symbol().into_owned(),
        right: right.system(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, TimeUnit, VolumeUnit, WeightUnit};
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_feet_and_inches() {
        let height = LengthUnit::Foot.of(d("5.75"));
        let (feet, inches) = height.split(LengthUnit::Foot, LengthUnit::Inch).unwrap();
        assert_eq!(feet.value(), Decimal::from(5));
        assert_eq!(inches.value(), Decimal::from(9));
    }

    #[test]
    fn test_threshold_absorbs_representation_error() {
        let height = LengthUnit::Foot.of(d("5.9999999999"));
        let (feet, inches) = height.split(LengthUnit::Foot, LengthUnit::Inch).unwrap();
        assert_eq!(feet.value(), Decimal::from(6));
        assert_eq!(inches.value(), Decimal::ZERO);
    }

    #[test]
    fn test_metric_split_from_other_unit() {
        let length = LengthUnit::Centimeter.of(125);
        let (meters, centimeters) = length.split(LengthUnit::Meter, LengthUnit::Centimeter).unwrap();
        assert_eq!(meters.value(), Decimal::ONE);
        assert_eq!(centimeters.value(), Decimal::from(25));
    }

    #[test]
    fn test_split_with_scale() {
        let options = SplitOptions::new(1);
        let (whole, rest) = split(&WeightUnit::Kilogram.of(d("2.345")), WeightUnit::Kilogram, WeightUnit::Gram, &options).unwrap();
        assert_eq!(whole.value(), d("2.3"));
        assert_eq!(rest.value(), Decimal::from(45));
    }

    #[test]
    fn test_negative_split_keeps_sign() {
        let (feet, inches) = LengthUnit::Foot
            .of(d("-5.75"))
            .split(LengthUnit::Foot, LengthUnit::Inch)
            .unwrap();
        assert_eq!(feet.value(), Decimal::from(-5));
        assert_eq!(inches.value(), Decimal::from(-9));

        let (whole, rest) = split_amount(Decimal::from(-3), &SplitOptions::default()).unwrap();
        assert_eq!((whole, rest), (Decimal::from(-3), Decimal::ZERO));
        assert!(!rest.is_sign_negative());
    }

    #[test]
    fn test_mixed_systems_rejected() {
        let volume = VolumeUnit::ImperialGallon.of(3);
        let result = volume.split(VolumeUnit::ImperialGallon, VolumeUnit::USFluidOunce);
        assert!(matches!(
            result,
            Err(UnitsError::IncompatibleMeasurementSystem { .. })
        ));
    }

    #[test]
    fn test_components_chain() {
        let length = LengthUnit::Meter.of(d("1.5"));
        let [meters, centimeters, millimeters] = length
            .to_components([LengthUnit::Meter, LengthUnit::Centimeter, LengthUnit::Millimeter])
            .unwrap();
        assert_eq!(meters.value(), Decimal::ONE);
        assert_eq!(centimeters.value(), Decimal::from(50));
        assert_eq!(millimeters.value(), Decimal::ZERO);

        let duration = TimeUnit::Hour.of(d("1.5125"));
        let [hours, minutes, seconds] = duration
            .to_components([TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second])
            .unwrap();
        assert_eq!(hours.value(), Decimal::ONE);
        assert_eq!(minutes.value(), Decimal::from(30));
        assert_eq!(seconds.value(), Decimal::from(45));
    }

    #[test]
    fn test_components_need_two_units() {
        let result = LengthUnit::Meter.of(1).to_components([LengthUnit::Meter]);
        assert_eq!(result.unwrap_err(), UnitsError::TooFewComponents(1));
    }

    #[test]
    fn test_components_mixed_systems_rejected() {
        let result = VolumeUnit::Liter
            .of(5)
            .to_components([VolumeUnit::ImperialGallon, VolumeUnit::ImperialPint, VolumeUnit::USFluidOunce]);
        assert!(matches!(
            result,
            Err(UnitsError::IncompatibleMeasurementSystem { .. })
        ));
    }
}
