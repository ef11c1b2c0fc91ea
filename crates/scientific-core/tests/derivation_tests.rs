//! Named relations and their inverses

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use scientific_core::derived::{KILOGRAM_PER_CUBIC_METER, METER_PER_SECOND_SQUARED};
use scientific_core::units::{
    ElectricCurrentUnit, ElectricResistanceUnit, EnergyUnit, ForceUnit, FrequencyUnit, LengthUnit, PowerUnit,
    TemperatureUnit, TimeUnit, VoltageUnit, VolumeUnit, WeightUnit,
};
use scientific_core::{ArithmeticError, Per, ScientificUnit, UnitsError};

fn close(actual: Decimal, expected: Decimal) -> bool {
    (actual - expected).abs() <= expected.abs().max(Decimal::ONE) * Decimal::new(1, 15)
}

#[test]
fn test_heat_capacity_from_quotient() {
    let capacity = EnergyUnit::Joule.of(10).per(&TemperatureUnit::Kelvin.of(2)).unwrap();
    assert_eq!(capacity.value(), Decimal::from(5));
    assert_eq!(capacity.to_string(), "5 J/K");
}

#[test]
fn test_ohms_law_both_ways() {
    let current = ElectricCurrentUnit::Ampere.of(2);
    let resistance = ElectricResistanceUnit::Ohm.of(3);

    let voltage = VoltageUnit::Volt.voltage(&current, &resistance).unwrap();
    assert_eq!(voltage.value(), Decimal::from(6));

    let back = ElectricResistanceUnit::Ohm.resistance(&voltage, &current).unwrap();
    assert_eq!(back.value(), Decimal::from(3));

    let power = PowerUnit::Watt.power(&voltage, &current).unwrap();
    assert_eq!(power.value(), Decimal::from(12));
}

#[test]
fn test_energy_from_power_over_time() {
    let energy = EnergyUnit::KilowattHour
        .energy_from_power(&PowerUnit::Kilowatt.of(2), &TimeUnit::Minute.of(30))
        .unwrap();
    assert_eq!(energy.value(), Decimal::ONE);
}

#[test]
fn test_period_and_frequency() {
    let period = TimeUnit::Millisecond.period(&FrequencyUnit::Hertz.of(50)).unwrap();
    assert_eq!(period.value(), Decimal::from(20));

    let frequency = FrequencyUnit::Hertz.frequency(&period).unwrap();
    assert_eq!(frequency.value(), Decimal::from(50));
}

#[test]
fn test_density_in_si() {
    let density = KILOGRAM_PER_CUBIC_METER
        .density(&WeightUnit::Kilogram.of(1), &VolumeUnit::Liter.of(1))
        .unwrap();
    assert_eq!(density.value(), Decimal::from(1000));
}

#[test]
fn test_zero_acceleration_is_reported() {
    let result = WeightUnit::Kilogram.mass(&ForceUnit::Newton.of(10), &METER_PER_SECOND_SQUARED.of(0));
    assert_eq!(
        result.unwrap_err(),
        UnitsError::Arithmetic(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn test_composite_needs_shared_system() {
    let result = WeightUnit::Pound.of(1).per(&VolumeUnit::Liter.of(1));
    assert!(matches!(
        result,
        Err(UnitsError::IncompatibleMeasurementSystem { .. })
    ));
    assert!(Per::new(LengthUnit::Mile, TimeUnit::Hour).is_ok());
}

#[test]
fn test_undefined_intermediate() {
    let power = PowerUnit::Kilowatt.of(2).as_undefined();
    let duration = TimeUnit::Minute.of(30).as_undefined();
    let product = power.times(&duration).unwrap();
    let energy = product.to_defined(EnergyUnit::KilowattHour).unwrap();
    assert_eq!(energy.value(), Decimal::ONE);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn force_and_mass_are_inverse(mass in 1_i64..10_000, acceleration in 1_i64..1_000) {
        let mass = WeightUnit::Pound.of(mass);
        let acceleration = METER_PER_SECOND_SQUARED.of(acceleration);
        let force = ForceUnit::Newton.force(&mass, &acceleration).unwrap();
        let back = WeightUnit::Pound.mass(&force, &acceleration).unwrap();
        prop_assert!(close(back.value(), mass.value()), "{} vs {}", back, mass);
    }

    #[test]
    fn voltage_and_current_are_inverse(current in 1_i64..10_000, resistance in 1_i64..10_000) {
        let current = ElectricCurrentUnit::Milliampere.of(current);
        let resistance = ElectricResistanceUnit::Kiloohm.of(resistance);
        let voltage = VoltageUnit::Volt.voltage(&current, &resistance).unwrap();
        let back = ElectricCurrentUnit::Milliampere.current(&voltage, &resistance).unwrap();
        prop_assert!(close(back.value(), current.value()), "{} vs {}", back, current);
    }
}
