//! Temperature (SI unit: kelvin)
//!
//! Celsius and Fahrenheit carry an offset, so their absolute conversions are
//! affine. Composite units see them through their delta conversions, where a
//! step of 1 °C is a step of 1 K.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Temperature;
use crate::types::system::MeasurementSystem::{Imperial, Metric};
use crate::types::unit::{decimal, impl_base_unit, Conversion, Conversion::Factor, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

pub static TEMPERATURE_UNITS: &[UnitDef<TemperatureUnit>] = &[
    UnitDef::new(TemperatureUnit::Kelvin, "K", Metric, Factor(Decimal::ONE)),
    UnitDef::new(
        TemperatureUnit::Celsius,
        "°C",
        Metric,
        Conversion::Affine {
            offset: decimal(27_315, 2),
            numerator: Decimal::ONE,
            denominator: Decimal::ONE,
        },
    ),
    UnitDef::new(
        TemperatureUnit::Fahrenheit,
        "°F",
        Imperial,
        Conversion::Affine {
            offset: decimal(45_967, 2),
            numerator: decimal(5, 0),
            denominator: decimal(9, 0),
        },
    ),
    UnitDef::new(
        TemperatureUnit::Rankine,
        "°R",
        Imperial,
        Conversion::ratio(decimal(5, 0), decimal(9, 0)),
    ),
];

impl_base_unit!(TemperatureUnit, Temperature, TEMPERATURE_UNITS);
