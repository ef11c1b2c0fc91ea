//! Splitting values over units

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use scientific_core::derived::METER_PER_SECOND;
use scientific_core::split::{split, to_components};
use scientific_core::units::{LengthUnit, TimeUnit, VolumeUnit, WeightUnit};
use scientific_core::{Per, ScientificUnit, SplitOptions, UnitsError};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_pounds_and_ounces() {
    let (pounds, ounces) = WeightUnit::Pound
        .of(d("2.5"))
        .split(WeightUnit::Pound, WeightUnit::Ounce)
        .unwrap();
    assert_eq!(pounds.to_string(), "2 lb");
    assert_eq!(ounces.value(), Decimal::from(8));
}

#[test]
fn test_split_from_metric_source() {
    // 1 m is 3 ft 3.3700787... in
    let (feet, inches) = LengthUnit::Meter
        .of(1)
        .split(LengthUnit::Foot, LengthUnit::Inch)
        .unwrap();
    assert_eq!(feet.value(), Decimal::from(3));
    assert_eq!(inches.value().round_dp(4), d("3.3701"));
}

#[test]
fn test_split_keeps_decimal_places() {
    let options = SplitOptions::new(2);
    let (hours, minutes) = split(&TimeUnit::Hour.of(d("1.255")), TimeUnit::Hour, TimeUnit::Minute, &options).unwrap();
    assert_eq!(hours.value(), d("1.25"));
    assert_eq!(minutes.value(), d("0.3"));
}

#[test]
fn test_custom_threshold() {
    let options = SplitOptions::default().with_rounding_threshold(d("0.01"));
    let (feet, inches) = split(&LengthUnit::Foot.of(d("4.995")), LengthUnit::Foot, LengthUnit::Inch, &options).unwrap();
    assert_eq!(feet.value(), Decimal::from(5));
    assert_eq!(inches.value(), Decimal::ZERO);
}

#[test]
fn test_centimeters_as_meter_components() {
    let [meters, centimeters] = LengthUnit::Centimeter
        .of(125)
        .to_components([LengthUnit::Meter, LengthUnit::Centimeter])
        .unwrap();
    assert_eq!(meters.to_string(), "1 m");
    assert_eq!(centimeters.to_string(), "25 cm");
}

#[test]
fn test_exact_whole_leaves_zero_remainder() {
    let [meters, centimeters] = LengthUnit::Centimeter
        .of(100)
        .to_components([LengthUnit::Meter, LengthUnit::Centimeter])
        .unwrap();
    assert_eq!(meters.to_string(), "1 m");
    assert_eq!(centimeters.value(), Decimal::ZERO);
}

#[test]
fn test_gallon_components() {
    let [gallons, quarts, pints] = to_components(
        &VolumeUnit::ImperialGallon.of(d("2.375")),
        [VolumeUnit::ImperialGallon, VolumeUnit::ImperialQuart, VolumeUnit::ImperialPint],
        &SplitOptions::default(),
    )
    .unwrap();
    assert_eq!(gallons.value(), Decimal::from(2));
    assert_eq!(quarts.value(), Decimal::ONE);
    assert_eq!(pints.value(), Decimal::ONE);
}

#[test]
fn test_us_and_uk_units_do_not_split_together() {
    let result = VolumeUnit::USGallon
        .of(1)
        .split(VolumeUnit::USGallon, VolumeUnit::ImperialPint);
    match result {
        Err(UnitsError::IncompatibleMeasurementSystem { left_symbol, right_symbol, .. }) => {
            assert_eq!(left_symbol, VolumeUnit::USGallon.symbol());
            assert_eq!(right_symbol, VolumeUnit::ImperialPint.symbol());
        }
        other => panic!("expected a system mismatch, got {other:?}"),
    }
}

#[test]
fn test_metric_speed_does_not_split_into_imperial() {
    let feet_per_second = Per::new(LengthUnit::Foot, TimeUnit::Second).unwrap();
    let result = METER_PER_SECOND
        .of(1)
        .split(METER_PER_SECOND, feet_per_second);
    assert!(matches!(
        result,
        Err(UnitsError::IncompatibleMeasurementSystem { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn feet_and_inches_add_back_up(mantissa in 0_i64..10_000_000, scale in 0_u32..=4) {
        let height = LengthUnit::Foot.of(Decimal::new(mantissa, scale));
        let (feet, inches) = height.split(LengthUnit::Foot, LengthUnit::Inch).unwrap();

        prop_assert_eq!(feet.value().fract(), Decimal::ZERO);
        prop_assert!(inches.value() >= Decimal::ZERO);
        prop_assert!(inches.value() < Decimal::from(12));

        let total = feet.plus(&inches).unwrap();
        let drift = (total.value() - height.value()).abs();
        prop_assert!(drift <= SplitOptions::DEFAULT_ROUNDING_THRESHOLD, "{} drifted by {}", height, drift);
    }
}
