//! Length (SI unit: meter)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Length;
use crate::types::system::MeasurementSystem::{Imperial, Metric, MetricAndImperial};
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
}

pub static LENGTH_UNITS: &[UnitDef<LengthUnit>] = &[
    UnitDef::new(LengthUnit::Nanometer, "nm", Metric, Scaled(MetricMultiple::Nano, LengthUnit::Meter)),
    UnitDef::new(LengthUnit::Micrometer, "µm", Metric, Scaled(MetricMultiple::Micro, LengthUnit::Meter)),
    UnitDef::new(LengthUnit::Millimeter, "mm", Metric, Scaled(MetricMultiple::Milli, LengthUnit::Meter)),
    UnitDef::new(LengthUnit::Centimeter, "cm", Metric, Scaled(MetricMultiple::Centi, LengthUnit::Meter)),
    UnitDef::new(LengthUnit::Decimeter, "dm", Metric, Scaled(MetricMultiple::Deci, LengthUnit::Meter)),
    UnitDef::new(LengthUnit::Meter, "m", Metric, Factor(Decimal::ONE)),
    UnitDef::new(LengthUnit::Kilometer, "km", Metric, Scaled(MetricMultiple::Kilo, LengthUnit::Meter)),
    // International yard and pound agreement (1959)
    UnitDef::new(LengthUnit::Inch, "in", Imperial, Factor(decimal(254, 4))),
    UnitDef::new(LengthUnit::Foot, "ft", Imperial, Factor(decimal(3048, 4))),
    UnitDef::new(LengthUnit::Yard, "yd", Imperial, Factor(decimal(9144, 4))),
    UnitDef::new(LengthUnit::Mile, "mi", Imperial, Factor(decimal(1_609_344, 3))),
    UnitDef::new(LengthUnit::NauticalMile, "nmi", MetricAndImperial, Factor(decimal(1852, 0))),
];

impl_base_unit!(LengthUnit, Length, LENGTH_UNITS);
