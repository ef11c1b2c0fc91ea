//! Energy (SI unit: joule)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Energy;
use crate::types::system::MeasurementSystem::{Imperial, Metric};
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyUnit {
    Millijoule,
    Joule,
    Kilojoule,
    Megajoule,
    Gigajoule,
    WattHour,
    KilowattHour,
    Calorie,
    Kilocalorie,
    Erg,
    BritishThermalUnit,
    FootPoundForce,
}

pub static ENERGY_UNITS: &[UnitDef<EnergyUnit>] = &[
    UnitDef::new(EnergyUnit::Millijoule, "mJ", Metric, Scaled(MetricMultiple::Milli, EnergyUnit::Joule)),
    UnitDef::new(EnergyUnit::Joule, "J", Metric, Factor(Decimal::ONE)),
    UnitDef::new(EnergyUnit::Kilojoule, "kJ", Metric, Scaled(MetricMultiple::Kilo, EnergyUnit::Joule)),
    UnitDef::new(EnergyUnit::Megajoule, "MJ", Metric, Scaled(MetricMultiple::Mega, EnergyUnit::Joule)),
    UnitDef::new(EnergyUnit::Gigajoule, "GJ", Metric, Scaled(MetricMultiple::Giga, EnergyUnit::Joule)),
    UnitDef::new(EnergyUnit::WattHour, "Wh", Metric, Factor(decimal(3_600, 0))),
    UnitDef::new(EnergyUnit::KilowattHour, "kWh", Metric, Scaled(MetricMultiple::Kilo, EnergyUnit::WattHour)),
    // Thermochemical calorie
    UnitDef::new(EnergyUnit::Calorie, "cal", Metric, Factor(decimal(4_184, 3))),
    UnitDef::new(EnergyUnit::Kilocalorie, "kcal", Metric, Scaled(MetricMultiple::Kilo, EnergyUnit::Calorie)),
    UnitDef::new(EnergyUnit::Erg, "erg", Metric, Factor(decimal(1, 7))),
    // International table BTU
    UnitDef::new(EnergyUnit::BritishThermalUnit, "BTU", Imperial, Factor(decimal(105_505_585_262, 8))),
    UnitDef::new(EnergyUnit::FootPoundForce, "ft⋅lbf", Imperial, Factor(decimal(13_558_179_483_314_004, 16))),
];

impl_base_unit!(EnergyUnit, Energy, ENERGY_UNITS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::unit::check_definitions;
    use crate::types::ScientificUnit;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_definitions() {
        check_definitions::<EnergyUnit>();
    }

    #[test]
    fn test_kilowatt_hour() {
        assert_eq!(EnergyUnit::KilowattHour.of(1).to_si(), Ok(Decimal::from(3_600_000)));
        let megajoules = EnergyUnit::KilowattHour.of(5).convert(EnergyUnit::Megajoule).unwrap();
        assert_eq!(megajoules.value(), Decimal::from(18));
    }

    #[test]
    fn test_food_energy() {
        let kcal = EnergyUnit::Kilocalorie.of(1).convert(EnergyUnit::Kilojoule).unwrap();
        assert_eq!(kcal.value(), Decimal::new(4_184, 3));
    }
}
