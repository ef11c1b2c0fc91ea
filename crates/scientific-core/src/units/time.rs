//! Time (SI unit: second)
//!
//! Time units belong to every measurement system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Time;
use crate::types::system::MeasurementSystem::MetricAndImperial;
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

pub static TIME_UNITS: &[UnitDef<TimeUnit>] = &[
    UnitDef::new(TimeUnit::Nanosecond, "ns", MetricAndImperial, Scaled(MetricMultiple::Nano, TimeUnit::Second)),
    UnitDef::new(TimeUnit::Microsecond, "µs", MetricAndImperial, Scaled(MetricMultiple::Micro, TimeUnit::Second)),
    UnitDef::new(TimeUnit::Millisecond, "ms", MetricAndImperial, Scaled(MetricMultiple::Milli, TimeUnit::Second)),
    UnitDef::new(TimeUnit::Second, "s", MetricAndImperial, Factor(Decimal::ONE)),
    UnitDef::new(TimeUnit::Minute, "min", MetricAndImperial, Factor(decimal(60, 0))),
    UnitDef::new(TimeUnit::Hour, "h", MetricAndImperial, Factor(decimal(3_600, 0))),
    UnitDef::new(TimeUnit::Day, "d", MetricAndImperial, Factor(decimal(86_400, 0))),
    UnitDef::new(TimeUnit::Week, "wk", MetricAndImperial, Factor(decimal(604_800, 0))),
];

impl_base_unit!(TimeUnit, Time, TIME_UNITS);
