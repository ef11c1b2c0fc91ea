//! Named relations between quantities
//!
//! Each relation `X = Y op Z` gets one function per direction, defined on the
//! unit type of the quantity it solves for:
//!
//! ```
//! use rust_decimal::Decimal;
//! use scientific_core::derived::METER_PER_SECOND_SQUARED;
//! use scientific_core::units::{ForceUnit, WeightUnit};
//! use scientific_core::ScientificUnit;
//!
//! let acceleration = METER_PER_SECOND_SQUARED.of(2);
//! let force = ForceUnit::Newton.force(&WeightUnit::Kilogram.of(5), &acceleration)?;
//! assert_eq!(force.value(), Decimal::from(10));
//!
//! let mass = WeightUnit::Kilogram.mass(&force, &acceleration)?;
//! assert_eq!(mass.value(), Decimal::from(5));
//! # Ok::<(), scientific_core::UnitsError>(())
//! ```
//!
//! Composite results are written as [`Per`] or [`Times`] of the base unit
//! enums. The constants below cover the SI ones.

mod chemistry;
mod electricity;
mod flow;
mod geometry;
mod kinematics;
mod mechanics;
mod thermal;

use crate::types::system::MeasurementSystem::{Imperial, Metric, MetricAndImperial};
use crate::types::{Per, Times};
use crate::units::{
    AmountOfSubstanceUnit, EnergyUnit, ForceUnit, LengthUnit, PressureUnit, TemperatureUnit, TimeUnit, VolumeUnit,
    WeightUnit,
};

pub const METER_PER_SECOND: Per<LengthUnit, TimeUnit> =
    Per::from_systems(LengthUnit::Meter, Metric, TimeUnit::Second, MetricAndImperial);

pub const KILOMETER_PER_HOUR: Per<LengthUnit, TimeUnit> =
    Per::from_systems(LengthUnit::Kilometer, Metric, TimeUnit::Hour, MetricAndImperial);

pub const MILE_PER_HOUR: Per<LengthUnit, TimeUnit> =
    Per::from_systems(LengthUnit::Mile, Imperial, TimeUnit::Hour, MetricAndImperial);

pub const METER_PER_SECOND_SQUARED: Per<Per<LengthUnit, TimeUnit>, TimeUnit> = Per::from_systems(
    METER_PER_SECOND,
    METER_PER_SECOND.shared_system(),
    TimeUnit::Second,
    MetricAndImperial,
);

pub const NEWTON_PER_SECOND: Per<ForceUnit, TimeUnit> =
    Per::from_systems(ForceUnit::Newton, Metric, TimeUnit::Second, MetricAndImperial);

pub const JOULE_SECOND: Times<EnergyUnit, TimeUnit> =
    Times::from_systems(EnergyUnit::Joule, Metric, TimeUnit::Second, MetricAndImperial);

pub const PASCAL_SECOND: Times<PressureUnit, TimeUnit> =
    Times::from_systems(PressureUnit::Pascal, Metric, TimeUnit::Second, MetricAndImperial);

pub const KILOGRAM_METER_PER_SECOND: Times<WeightUnit, Per<LengthUnit, TimeUnit>> = Times::from_systems(
    WeightUnit::Kilogram,
    Metric,
    METER_PER_SECOND,
    METER_PER_SECOND.shared_system(),
);

pub const JOULE_PER_KELVIN: Per<EnergyUnit, TemperatureUnit> =
    Per::from_systems(EnergyUnit::Joule, Metric, TemperatureUnit::Kelvin, Metric);

pub const JOULE_PER_KILOGRAM_KELVIN: Per<Per<EnergyUnit, TemperatureUnit>, WeightUnit> = Per::from_systems(
    JOULE_PER_KELVIN,
    JOULE_PER_KELVIN.shared_system(),
    WeightUnit::Kilogram,
    Metric,
);

pub const MOLE_PER_KILOGRAM: Per<AmountOfSubstanceUnit, WeightUnit> =
    Per::from_systems(AmountOfSubstanceUnit::Mole, MetricAndImperial, WeightUnit::Kilogram, Metric);

pub const KILOGRAM_PER_MOLE: Per<WeightUnit, AmountOfSubstanceUnit> =
    Per::from_systems(WeightUnit::Kilogram, Metric, AmountOfSubstanceUnit::Mole, MetricAndImperial);

pub const GRAM_PER_MOLE: Per<WeightUnit, AmountOfSubstanceUnit> =
    Per::from_systems(WeightUnit::Gram, Metric, AmountOfSubstanceUnit::Mole, MetricAndImperial);

pub const MOLE_PER_CUBIC_METER: Per<AmountOfSubstanceUnit, VolumeUnit> =
    Per::from_systems(AmountOfSubstanceUnit::Mole, MetricAndImperial, VolumeUnit::CubicMeter, Metric);

pub const MOLE_PER_LITER: Per<AmountOfSubstanceUnit, VolumeUnit> =
    Per::from_systems(AmountOfSubstanceUnit::Mole, MetricAndImperial, VolumeUnit::Liter, Metric);

pub const CUBIC_METER_PER_MOLE: Per<VolumeUnit, AmountOfSubstanceUnit> =
    Per::from_systems(VolumeUnit::CubicMeter, Metric, AmountOfSubstanceUnit::Mole, MetricAndImperial);

pub const KILOGRAM_PER_CUBIC_METER: Per<WeightUnit, VolumeUnit> =
    Per::from_systems(WeightUnit::Kilogram, Metric, VolumeUnit::CubicMeter, Metric);

pub const CUBIC_METER_PER_KILOGRAM: Per<VolumeUnit, WeightUnit> =
    Per::from_systems(VolumeUnit::CubicMeter, Metric, WeightUnit::Kilogram, Metric);

pub const KILOGRAM_PER_SECOND: Per<WeightUnit, TimeUnit> =
    Per::from_systems(WeightUnit::Kilogram, Metric, TimeUnit::Second, MetricAndImperial);

pub const CUBIC_METER_PER_SECOND: Per<VolumeUnit, TimeUnit> =
    Per::from_systems(VolumeUnit::CubicMeter, Metric, TimeUnit::Second, MetricAndImperial);
