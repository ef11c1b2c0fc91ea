//! Volume (SI unit: cubic meter)
//!
//! US customary and UK imperial liquid measures share names but not sizes,
//! so each belongs to its own measurement system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::quantity::Volume;
use crate::types::system::MeasurementSystem::{Imperial, Metric, UKImperial, USCustomary};
use crate::types::unit::{decimal, impl_base_unit, Conversion::Factor, Conversion::Scaled, MetricMultiple, UnitDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Centiliter,
    Deciliter,
    Liter,
    CubicCentimeter,
    CubicMeter,
    CubicInch,
    CubicFoot,
    CubicYard,
    USGallon,
    USQuart,
    USPint,
    USCup,
    USFluidOunce,
    ImperialGallon,
    ImperialQuart,
    ImperialPint,
    ImperialFluidOunce,
}

pub static VOLUME_UNITS: &[UnitDef<VolumeUnit>] = &[
    UnitDef::new(VolumeUnit::Milliliter, "ml", Metric, Scaled(MetricMultiple::Milli, VolumeUnit::Liter)),
    UnitDef::new(VolumeUnit::Centiliter, "cl", Metric, Scaled(MetricMultiple::Centi, VolumeUnit::Liter)),
    UnitDef::new(VolumeUnit::Deciliter, "dl", Metric, Scaled(MetricMultiple::Deci, VolumeUnit::Liter)),
    UnitDef::new(VolumeUnit::Liter, "l", Metric, Factor(decimal(1, 3))),
    UnitDef::new(VolumeUnit::CubicCentimeter, "cm³", Metric, Factor(decimal(1, 6))),
    UnitDef::new(VolumeUnit::CubicMeter, "m³", Metric, Factor(Decimal::ONE)),
    UnitDef::new(VolumeUnit::CubicInch, "in³", Imperial, Factor(decimal(16_387_064, 12))),
    UnitDef::new(VolumeUnit::CubicFoot, "ft³", Imperial, Factor(decimal(28_316_846_592, 12))),
    UnitDef::new(VolumeUnit::CubicYard, "yd³", Imperial, Factor(decimal(764_554_857_984, 12))),
    // US liquid measures, defined from 231 in³ to the gallon
    UnitDef::new(VolumeUnit::USGallon, "gal (US)", USCustomary, Factor(decimal(3_785_411_784, 12))),
    UnitDef::new(VolumeUnit::USQuart, "qt (US)", USCustomary, Factor(decimal(946_352_946, 12))),
    UnitDef::new(VolumeUnit::USPint, "pt (US)", USCustomary, Factor(decimal(473_176_473, 12))),
    UnitDef::new(VolumeUnit::USCup, "cup (US)", USCustomary, Factor(decimal(2_365_882_365, 13))),
    UnitDef::new(VolumeUnit::USFluidOunce, "fl oz (US)", USCustomary, Factor(decimal(295_735_295_625, 16))),
    // Weights and Measures Act 1985
    UnitDef::new(VolumeUnit::ImperialGallon, "gal (UK)", UKImperial, Factor(decimal(454_609, 8))),
    UnitDef::new(VolumeUnit::ImperialQuart, "qt (UK)", UKImperial, Factor(decimal(11_365_225, 10))),
    UnitDef::new(VolumeUnit::ImperialPint, "pt (UK)", UKImperial, Factor(decimal(56_826_125, 11))),
    UnitDef::new(VolumeUnit::ImperialFluidOunce, "fl oz (UK)", UKImperial, Factor(decimal(284_130_625, 13))),
];

impl_base_unit!(VolumeUnit, Volume, VOLUME_UNITS);
