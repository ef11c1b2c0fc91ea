//! Frequency (SI unit: hertz)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Frequency;
use crate::types::system::MeasurementSystem::MetricAndImperial;
use crate::types::unit::{decimal, impl_base_unit, Conversion, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
    BeatsPerMinute,
    RevolutionsPerMinute,
}

pub static FREQUENCY_UNITS: &[UnitDef<FrequencyUnit>] = &[
    UnitDef::new(FrequencyUnit::Hertz, "Hz", MetricAndImperial, Factor(Decimal::ONE)),
    UnitDef::new(FrequencyUnit::Kilohertz, "kHz", MetricAndImperial, Scaled(MetricMultiple::Kilo, FrequencyUnit::Hertz)),
    UnitDef::new(FrequencyUnit::Megahertz, "MHz", MetricAndImperial, Scaled(MetricMultiple::Mega, FrequencyUnit::Hertz)),
    UnitDef::new(FrequencyUnit::Gigahertz, "GHz", MetricAndImperial, Scaled(MetricMultiple::Giga, FrequencyUnit::Hertz)),
    UnitDef::new(
        FrequencyUnit::BeatsPerMinute,
        "bpm",
        MetricAndImperial,
        Conversion::ratio(Decimal::ONE, decimal(60, 0)),
    ),
    UnitDef::new(
        FrequencyUnit::RevolutionsPerMinute,
        "rpm",
        MetricAndImperial,
        Conversion::ratio(Decimal::ONE, decimal(60, 0)),
    ),
];

impl_base_unit!(FrequencyUnit, Frequency, FREQUENCY_UNITS);
