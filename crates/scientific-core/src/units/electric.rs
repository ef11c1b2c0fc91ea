//! Electric quantities: current, charge, voltage, resistance and conductance
//!
//! The ab- units are the CGS electromagnetic ones.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::{ElectricCharge, ElectricConductance, ElectricCurrent, ElectricResistance, Voltage};
use crate::types::system::MeasurementSystem::Metric;
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

/// Electric current (SI unit: ampere)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricCurrentUnit {
    Microampere,
    Milliampere,
    Ampere,
    Kiloampere,
    Abampere,
}

pub static ELECTRIC_CURRENT_UNITS: &[UnitDef<ElectricCurrentUnit>] = &[
    UnitDef::new(
        ElectricCurrentUnit::Microampere,
        "µA",
        Metric,
        Scaled(MetricMultiple::Micro, ElectricCurrentUnit::Ampere),
    ),
    UnitDef::new(
        ElectricCurrentUnit::Milliampere,
        "mA",
        Metric,
        Scaled(MetricMultiple::Milli, ElectricCurrentUnit::Ampere),
    ),
    UnitDef::new(ElectricCurrentUnit::Ampere, "A", Metric, Factor(Decimal::ONE)),
    UnitDef::new(
        ElectricCurrentUnit::Kiloampere,
        "kA",
        Metric,
        Scaled(MetricMultiple::Kilo, ElectricCurrentUnit::Ampere),
    ),
    UnitDef::new(ElectricCurrentUnit::Abampere, "abA", Metric, Factor(decimal(10, 0))),
];

impl_base_unit!(ElectricCurrentUnit, ElectricCurrent, ELECTRIC_CURRENT_UNITS);

/// Electric charge (SI unit: coulomb)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricChargeUnit {
    Microcoulomb,
    Millicoulomb,
    Coulomb,
    Kilocoulomb,
    MilliampereHour,
    AmpereHour,
    Abcoulomb,
}

pub static ELECTRIC_CHARGE_UNITS: &[UnitDef<ElectricChargeUnit>] = &[
    UnitDef::new(
        ElectricChargeUnit::Microcoulomb,
        "µC",
        Metric,
        Scaled(MetricMultiple::Micro, ElectricChargeUnit::Coulomb),
    ),
    UnitDef::new(
        ElectricChargeUnit::Millicoulomb,
        "mC",
        Metric,
        Scaled(MetricMultiple::Milli, ElectricChargeUnit::Coulomb),
    ),
    UnitDef::new(ElectricChargeUnit::Coulomb, "C", Metric, Factor(Decimal::ONE)),
    UnitDef::new(
        ElectricChargeUnit::Kilocoulomb,
        "kC",
        Metric,
        Scaled(MetricMultiple::Kilo, ElectricChargeUnit::Coulomb),
    ),
    UnitDef::new(
        ElectricChargeUnit::MilliampereHour,
        "mAh",
        Metric,
        Scaled(MetricMultiple::Milli, ElectricChargeUnit::AmpereHour),
    ),
    UnitDef::new(ElectricChargeUnit::AmpereHour, "Ah", Metric, Factor(decimal(3_600, 0))),
    UnitDef::new(ElectricChargeUnit::Abcoulomb, "abC", Metric, Factor(decimal(10, 0))),
];

impl_base_unit!(ElectricChargeUnit, ElectricCharge, ELECTRIC_CHARGE_UNITS);

/// Voltage (SI unit: volt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoltageUnit {
    Microvolt,
    Millivolt,
    Volt,
    Kilovolt,
    Megavolt,
    Abvolt,
}

pub static VOLTAGE_UNITS: &[UnitDef<VoltageUnit>] = &[
    UnitDef::new(VoltageUnit::Microvolt, "µV", Metric, Scaled(MetricMultiple::Micro, VoltageUnit::Volt)),
    UnitDef::new(VoltageUnit::Millivolt, "mV", Metric, Scaled(MetricMultiple::Milli, VoltageUnit::Volt)),
    UnitDef::new(VoltageUnit::Volt, "V", Metric, Factor(Decimal::ONE)),
    UnitDef::new(VoltageUnit::Kilovolt, "kV", Metric, Scaled(MetricMultiple::Kilo, VoltageUnit::Volt)),
    UnitDef::new(VoltageUnit::Megavolt, "MV", Metric, Scaled(MetricMultiple::Mega, VoltageUnit::Volt)),
    UnitDef::new(VoltageUnit::Abvolt, "abV", Metric, Factor(decimal(1, 8))),
];

impl_base_unit!(VoltageUnit, Voltage, VOLTAGE_UNITS);

/// Electric resistance (SI unit: ohm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricResistanceUnit {
    Milliohm,
    Ohm,
    Kiloohm,
    Megaohm,
    Abohm,
}

pub static ELECTRIC_RESISTANCE_UNITS: &[UnitDef<ElectricResistanceUnit>] = &[
    UnitDef::new(
        ElectricResistanceUnit::Milliohm,
        "mΩ",
        Metric,
        Scaled(MetricMultiple::Milli, ElectricResistanceUnit::Ohm),
    ),
    UnitDef::new(ElectricResistanceUnit::Ohm, "Ω", Metric, Factor(Decimal::ONE)),
    UnitDef::new(
        ElectricResistanceUnit::Kiloohm,
        "kΩ",
        Metric,
        Scaled(MetricMultiple::Kilo, ElectricResistanceUnit::Ohm),
    ),
    UnitDef::new(
        ElectricResistanceUnit::Megaohm,
        "MΩ",
        Metric,
        Scaled(MetricMultiple::Mega, ElectricResistanceUnit::Ohm),
    ),
    UnitDef::new(ElectricResistanceUnit::Abohm, "abΩ", Metric, Factor(decimal(1, 9))),
];

impl_base_unit!(ElectricResistanceUnit, ElectricResistance, ELECTRIC_RESISTANCE_UNITS);

/// Electric conductance (SI unit: siemens)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricConductanceUnit {
    Microsiemens,
    Millisiemens,
    Siemens,
    Kilosiemens,
    Abmho,
}

pub static ELECTRIC_CONDUCTANCE_UNITS: &[UnitDef<ElectricConductanceUnit>] = &[
    UnitDef::new(
        ElectricConductanceUnit::Microsiemens,
        "µS",
        Metric,
        Scaled(MetricMultiple::Micro, ElectricConductanceUnit::Siemens),
    ),
    UnitDef::new(
        ElectricConductanceUnit::Millisiemens,
        "mS",
        Metric,
        Scaled(MetricMultiple::Milli, ElectricConductanceUnit::Siemens),
    ),
    UnitDef::new(ElectricConductanceUnit::Siemens, "S", Metric, Factor(Decimal::ONE)),
    UnitDef::new(
        ElectricConductanceUnit::Kilosiemens,
        "kS",
        Metric,
        Scaled(MetricMultiple::Kilo, ElectricConductanceUnit::Siemens),
    ),
    UnitDef::new(ElectricConductanceUnit::Abmho, "abS", Metric, Factor(decimal(1_000_000_000, 0))),
];

impl_base_unit!(ElectricConductanceUnit, ElectricConductance, ELECTRIC_CONDUCTANCE_UNITS);
