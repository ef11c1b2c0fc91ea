//! Weight (SI unit: kilogram)
//!
//! The table is anchored on the gram so the metric prefixes apply to it; the
//! gram itself converts with a factor of 1/1000.

use serde::{Deserialize, Serialize};

use crate::types::quantity::Weight;
use crate::types::system::MeasurementSystem::{Imperial, Metric, UKImperial, USCustomary};
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Microgram,
    Milligram,
    Gram,
    Kilogram,
    Tonne,
    Grain,
    Ounce,
    Pound,
    Stone,
    ShortTon,
    LongTon,
}

pub static WEIGHT_UNITS: &[UnitDef<WeightUnit>] = &[
    UnitDef::new(WeightUnit::Microgram, "µg", Metric, Scaled(MetricMultiple::Micro, WeightUnit::Gram)),
    UnitDef::new(WeightUnit::Milligram, "mg", Metric, Scaled(MetricMultiple::Milli, WeightUnit::Gram)),
    UnitDef::new(WeightUnit::Gram, "g", Metric, Factor(decimal(1, 3))),
    UnitDef::new(WeightUnit::Kilogram, "kg", Metric, Scaled(MetricMultiple::Kilo, WeightUnit::Gram)),
    UnitDef::new(WeightUnit::Tonne, "t", Metric, Factor(decimal(1000, 0))),
    UnitDef::new(WeightUnit::Grain, "gr", Imperial, Factor(decimal(6_479_891, 11))),
    UnitDef::new(WeightUnit::Ounce, "oz", Imperial, Factor(decimal(28_349_523_125, 12))),
    UnitDef::new(WeightUnit::Pound, "lb", Imperial, Factor(decimal(45_359_237, 8))),
    UnitDef::new(WeightUnit::Stone, "st", UKImperial, Factor(decimal(635_029_318, 8))),
    UnitDef::new(WeightUnit::ShortTon, "ton (US)", USCustomary, Factor(decimal(90_718_474, 5))),
    UnitDef::new(WeightUnit::LongTon, "ton (UK)", UKImperial, Factor(decimal(10_160_469_088, 7))),
];

impl_base_unit!(WeightUnit, Weight, WEIGHT_UNITS);
