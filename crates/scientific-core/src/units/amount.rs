//! Amount of substance (SI unit: mole)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::AmountOfSubstance;
use crate::types::system::MeasurementSystem::MetricAndImperial;
use crate::types::unit::{impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

/// Counts of entities belong to every measurement system, so a mole pairs
/// with pounds as well as with grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountOfSubstanceUnit {
    Nanomole,
    Micromole,
    Millimole,
    Mole,
    Kilomole,
}

pub static AMOUNT_OF_SUBSTANCE_UNITS: &[UnitDef<AmountOfSubstanceUnit>] = &[
    UnitDef::new(
        AmountOfSubstanceUnit::Nanomole,
        "nmol",
        MetricAndImperial,
        Scaled(MetricMultiple::Nano, AmountOfSubstanceUnit::Mole),
    ),
    UnitDef::new(
        AmountOfSubstanceUnit::Micromole,
        "µmol",
        MetricAndImperial,
        Scaled(MetricMultiple::Micro, AmountOfSubstanceUnit::Mole),
    ),
    UnitDef::new(
        AmountOfSubstanceUnit::Millimole,
        "mmol",
        MetricAndImperial,
        Scaled(MetricMultiple::Milli, AmountOfSubstanceUnit::Mole),
    ),
    UnitDef::new(AmountOfSubstanceUnit::Mole, "mol", MetricAndImperial, Factor(Decimal::ONE)),
    UnitDef::new(
        AmountOfSubstanceUnit::Kilomole,
        "kmol",
        MetricAndImperial,
        Scaled(MetricMultiple::Kilo, AmountOfSubstanceUnit::Mole),
    ),
];

impl_base_unit!(AmountOfSubstanceUnit, AmountOfSubstance, AMOUNT_OF_SUBSTANCE_UNITS);
