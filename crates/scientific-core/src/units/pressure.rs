//! Pressure (SI unit: pascal)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Pressure;
use crate::types::system::MeasurementSystem::{Imperial, Metric, MetricAndImperial};
use crate::types::unit::{decimal, impl_base_unit, Conversion, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    Hectopascal,
    Kilopascal,
    Megapascal,
    Bar,
    Millibar,
    Atmosphere,
    Torr,
    MillimeterOfMercury,
    PoundPerSquareInch,
    KilopoundPerSquareInch,
    InchOfMercury,
}

pub static PRESSURE_UNITS: &[UnitDef<PressureUnit>] = &[
    UnitDef::new(PressureUnit::Pascal, "Pa", Metric, Factor(Decimal::ONE)),
    UnitDef::new(PressureUnit::Hectopascal, "hPa", Metric, Scaled(MetricMultiple::Hecto, PressureUnit::Pascal)),
    UnitDef::new(PressureUnit::Kilopascal, "kPa", Metric, Scaled(MetricMultiple::Kilo, PressureUnit::Pascal)),
    UnitDef::new(PressureUnit::Megapascal, "MPa", Metric, Scaled(MetricMultiple::Mega, PressureUnit::Pascal)),
    UnitDef::new(PressureUnit::Bar, "bar", Metric, Factor(decimal(100_000, 0))),
    UnitDef::new(PressureUnit::Millibar, "mbar", Metric, Scaled(MetricMultiple::Milli, PressureUnit::Bar)),
    UnitDef::new(PressureUnit::Atmosphere, "atm", MetricAndImperial, Factor(decimal(101_325, 0))),
    UnitDef::new(
        PressureUnit::Torr,
        "Torr",
        MetricAndImperial,
        Conversion::ratio(decimal(101_325, 0), decimal(760, 0)),
    ),
    UnitDef::new(PressureUnit::MillimeterOfMercury, "mmHg", Metric, Factor(decimal(133_322_387_415, 9))),
    UnitDef::new(PressureUnit::PoundPerSquareInch, "psi", Imperial, Factor(decimal(6_894_757_293_168_361, 12))),
    UnitDef::new(
        PressureUnit::KilopoundPerSquareInch,
        "ksi",
        Imperial,
        Scaled(MetricMultiple::Kilo, PressureUnit::PoundPerSquareInch),
    ),
    UnitDef::new(PressureUnit::InchOfMercury, "inHg", Imperial, Factor(decimal(3_386_389, 3))),
];

impl_base_unit!(PressureUnit, Pressure, PRESSURE_UNITS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::unit::check_definitions;
    use crate::types::ScientificUnit;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_definitions() {
        check_definitions::<PressureUnit>();
    }

    #[test]
    fn test_atmosphere() {
        let atm = PressureUnit::Atmosphere.of(1);
        assert_eq!(atm.convert(PressureUnit::Torr).unwrap().value(), Decimal::from(760));
        assert_eq!(atm.convert(PressureUnit::Millibar).unwrap().value(), Decimal::new(101_325, 2));
        assert_eq!(PressureUnit::Hectopascal.of(1).convert(PressureUnit::Millibar).unwrap().value(), Decimal::ONE);
    }
}
