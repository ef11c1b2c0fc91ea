//! Power (SI unit: watt)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Power;
use crate::types::system::MeasurementSystem::{Imperial, Metric};
use crate::types::unit::{decimal, impl_base_unit, Conversion, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUnit {
    Milliwatt,
    Watt,
    Kilowatt,
    Megawatt,
    Gigawatt,
    MetricHorsepower,
    Horsepower,
    BtuPerHour,
    FootPoundForcePerSecond,
    ErgPerSecond,
}

pub static POWER_UNITS: &[UnitDef<PowerUnit>] = &[
    UnitDef::new(PowerUnit::Milliwatt, "mW", Metric, Scaled(MetricMultiple::Milli, PowerUnit::Watt)),
    UnitDef::new(PowerUnit::Watt, "W", Metric, Factor(Decimal::ONE)),
    UnitDef::new(PowerUnit::Kilowatt, "kW", Metric, Scaled(MetricMultiple::Kilo, PowerUnit::Watt)),
    UnitDef::new(PowerUnit::Megawatt, "MW", Metric, Scaled(MetricMultiple::Mega, PowerUnit::Watt)),
    UnitDef::new(PowerUnit::Gigawatt, "GW", Metric, Scaled(MetricMultiple::Giga, PowerUnit::Watt)),
    UnitDef::new(PowerUnit::MetricHorsepower, "PS", Metric, Factor(decimal(73_549_875, 5))),
    // Mechanical horsepower, 550 ft⋅lbf/s
    UnitDef::new(PowerUnit::Horsepower, "hp", Imperial, Factor(decimal(74_569_987_158_227_022, 14))),
    UnitDef::new(
        PowerUnit::BtuPerHour,
        "BTU/h",
        Imperial,
        Conversion::ratio(decimal(105_505_585_262, 8), decimal(3_600, 0)),
    ),
    UnitDef::new(
        PowerUnit::FootPoundForcePerSecond,
        "ft⋅lbf/s",
        Imperial,
        Factor(decimal(13_558_179_483_314_004, 16)),
    ),
    UnitDef::new(PowerUnit::ErgPerSecond, "erg/s", Metric, Factor(decimal(1, 7))),
];

impl_base_unit!(PowerUnit, Power, POWER_UNITS);
