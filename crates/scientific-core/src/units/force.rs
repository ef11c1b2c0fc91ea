//! Force (SI unit: newton)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Force;
use crate::types::system::MeasurementSystem::{Imperial, Metric, UKImperial, USCustomary};
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceUnit {
    Millinewton,
    Newton,
    Kilonewton,
    Meganewton,
    Dyne,
    KilogramForce,
    PoundForce,
    Poundal,
    OunceForce,
    ShortTonForce,
    LongTonForce,
}

pub static FORCE_UNITS: &[UnitDef<ForceUnit>] = &[
    UnitDef::new(ForceUnit::Millinewton, "mN", Metric, Scaled(MetricMultiple::Milli, ForceUnit::Newton)),
    UnitDef::new(ForceUnit::Newton, "N", Metric, Factor(Decimal::ONE)),
    UnitDef::new(ForceUnit::Kilonewton, "kN", Metric, Scaled(MetricMultiple::Kilo, ForceUnit::Newton)),
    UnitDef::new(ForceUnit::Meganewton, "MN", Metric, Scaled(MetricMultiple::Mega, ForceUnit::Newton)),
    UnitDef::new(ForceUnit::Dyne, "dyn", Metric, Factor(decimal(1, 5))),
    // Standard gravity, 9.80665 m/s²
    UnitDef::new(ForceUnit::KilogramForce, "kgf", Metric, Factor(decimal(980_665, 5))),
    UnitDef::new(ForceUnit::PoundForce, "lbf", Imperial, Factor(decimal(44_482_216_152_605, 13))),
    UnitDef::new(ForceUnit::Poundal, "pdl", Imperial, Factor(decimal(138_254_954_376, 12))),
    UnitDef::new(ForceUnit::OunceForce, "ozf", Imperial, Factor(decimal(27_801_385_095_378_125, 17))),
    UnitDef::new(ForceUnit::ShortTonForce, "tonf (US)", USCustomary, Factor(decimal(8_896_443_230_521, 9))),
    UnitDef::new(ForceUnit::LongTonForce, "tonf (UK)", UKImperial, Factor(decimal(996_401_641_818_352, 11))),
];

impl_base_unit!(ForceUnit, Force, FORCE_UNITS);
