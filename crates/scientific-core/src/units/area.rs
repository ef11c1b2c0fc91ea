//! Area (SI unit: square meter)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Area;
use crate::types::system::MeasurementSystem::{Imperial, Metric};
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMillimeter,
    SquareCentimeter,
    SquareMeter,
    Hectare,
    SquareKilometer,
    SquareInch,
    SquareFoot,
    SquareYard,
    Acre,
    SquareMile,
}

// Squared prefixes do not scale by the prefix itself, so every row is a factor
pub static AREA_UNITS: &[UnitDef<AreaUnit>] = &[
    UnitDef::new(AreaUnit::SquareMillimeter, "mm²", Metric, Factor(decimal(1, 6))),
    UnitDef::new(AreaUnit::SquareCentimeter, "cm²", Metric, Factor(decimal(1, 4))),
    UnitDef::new(AreaUnit::SquareMeter, "m²", Metric, Factor(Decimal::ONE)),
    UnitDef::new(AreaUnit::Hectare, "ha", Metric, Factor(decimal(10_000, 0))),
    UnitDef::new(AreaUnit::SquareKilometer, "km²", Metric, Factor(decimal(1_000_000, 0))),
    UnitDef::new(AreaUnit::SquareInch, "in²", Imperial, Factor(decimal(64_516, 8))),
    UnitDef::new(AreaUnit::SquareFoot, "ft²", Imperial, Factor(decimal(9_290_304, 8))),
    UnitDef::new(AreaUnit::SquareYard, "yd²", Imperial, Factor(decimal(83_612_736, 8))),
    UnitDef::new(AreaUnit::Acre, "ac", Imperial, Factor(decimal(40_468_564_224, 7))),
    UnitDef::new(AreaUnit::SquareMile, "mi²", Imperial, Factor(decimal(2_589_988_110_336, 6))),
];

impl_base_unit!(AreaUnit, Area, AREA_UNITS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::unit::check_definitions;
    use crate::types::ScientificUnit;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_definitions() {
        check_definitions::<AreaUnit>();
    }

    #[test]
    fn test_land_areas() {
        let square_mile = AreaUnit::SquareMile.of(1);
        assert_eq!(square_mile.convert(AreaUnit::Acre).unwrap().value(), Decimal::from(640));
        assert_eq!(AreaUnit::Acre.of(1).convert(AreaUnit::SquareFoot).unwrap().value(), Decimal::from(43_560));
    }
}
