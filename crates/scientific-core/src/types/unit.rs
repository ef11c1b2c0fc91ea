//! The unit contract and base-unit definitions
//!
//! Every unit pivots through the SI unit of its quantity with two functions,
//! [`ScientificUnit::to_si`] and [`ScientificUnit::from_si`].
//!
//! Base units are plain enums, one per quantity, backed by a static table of
//! [`UnitDef`] rows. To add a new unit, add the enum variant and its row; the
//! row order must follow the variant order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::quantity::{PhysicalQuantity, Quantity};
use super::system::MeasurementSystem;
use super::value::ScientificValue;
use crate::arith;
use crate::error::Result;

/// A unit of one physical quantity
pub trait ScientificUnit: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The quantity this unit measures
    type Quantity: Quantity;

    /// Display symbol (e.g. "ft", "J/K")
    fn symbol(&self) -> Cow<'static, str>;

    fn system(&self) -> MeasurementSystem;

    /// Convert an amount in this unit to the SI unit of its quantity
    fn to_si(&self, value: Decimal) -> Result<Decimal>;

    /// Convert an amount in the SI unit of its quantity to this unit
    fn from_si(&self, value: Decimal) -> Result<Decimal>;

    /// Like [`to_si`](Self::to_si) for a difference between two amounts, so
    /// any offset of the unit cancels out (a 1 °C step is a 1 K step).
    fn delta_to_si(&self, value: Decimal) -> Result<Decimal> {
        arith::sub(self.to_si(value)?, self.to_si(Decimal::ZERO)?)
    }

    /// Inverse of [`delta_to_si`](Self::delta_to_si)
    fn delta_from_si(&self, value: Decimal) -> Result<Decimal> {
        arith::sub(self.from_si(value)?, self.from_si(Decimal::ZERO)?)
    }

    fn quantity(&self) -> PhysicalQuantity {
        <Self::Quantity as Quantity>::KIND
    }

    /// An amount of this unit
    fn of(self, value: impl Into<Decimal>) -> ScientificValue<Self> {
        ScientificValue::new(value.into(), self)
    }
}

/// Units that can enumerate every variant they have
pub trait Catalogue: ScientificUnit {
    fn catalogue() -> Vec<Self>;
}

/// Metric multiples applied to a base unit (kilo-meter, milli-liter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricMultiple {
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
}

/// `mantissa × 10^-scale` in const context, for the static unit tables
pub(crate) const fn decimal(mantissa: i64, scale: u32) -> Decimal {
    let magnitude = mantissa.unsigned_abs();
    Decimal::from_parts(magnitude as u32, (magnitude >> 32) as u32, 0, mantissa < 0, scale)
}

impl MetricMultiple {
    /// The multiplier this prefix stands for
    pub const fn factor(self) -> Decimal {
        match self {
            MetricMultiple::Pico => decimal(1, 12),
            MetricMultiple::Nano => decimal(1, 9),
            MetricMultiple::Micro => decimal(1, 6),
            MetricMultiple::Milli => decimal(1, 3),
            MetricMultiple::Centi => decimal(1, 2),
            MetricMultiple::Deci => decimal(1, 1),
            MetricMultiple::Deca => decimal(10, 0),
            MetricMultiple::Hecto => decimal(100, 0),
            MetricMultiple::Kilo => decimal(1_000, 0),
            MetricMultiple::Mega => decimal(1_000_000, 0),
            MetricMultiple::Giga => decimal(1_000_000_000, 0),
            MetricMultiple::Tera => decimal(1_000_000_000_000, 0),
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            MetricMultiple::Pico => "p",
            MetricMultiple::Nano => "n",
            MetricMultiple::Micro => "µ",
            MetricMultiple::Milli => "m",
            MetricMultiple::Centi => "c",
            MetricMultiple::Deci => "d",
            MetricMultiple::Deca => "da",
            MetricMultiple::Hecto => "h",
            MetricMultiple::Kilo => "k",
            MetricMultiple::Mega => "M",
            MetricMultiple::Giga => "G",
            MetricMultiple::Tera => "T",
        }
    }
}

/// How a base unit relates to the SI unit of its quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion<U: 'static> {
    /// `si = value × factor`
    Factor(Decimal),
    /// `si = (value + offset) × numerator / denominator`
    Affine {
        offset: Decimal,
        numerator: Decimal,
        denominator: Decimal,
    },
    /// A metric multiple of another unit of the same quantity. Conversions
    /// delegate to the base unit after applying the multiple.
    Scaled(MetricMultiple, U),
}

impl<U: 'static> Conversion<U> {
    /// `si = value × numerator / denominator`, for factors that are not
    /// finite decimals (1/60, 101325/760)
    pub const fn ratio(numerator: Decimal, denominator: Decimal) -> Self {
        Conversion::Affine {
            offset: Decimal::ZERO,
            numerator,
            denominator,
        }
    }
}

impl<U: BaseUnit> Conversion<U> {
    pub fn to_si(&self, value: Decimal) -> Result<Decimal> {
        match *self {
            Conversion::Factor(factor) => arith::mul(value, factor),
            Conversion::Affine {
                offset,
                numerator,
                denominator,
            } => arith::div(
                arith::mul(arith::add(value, offset)?, numerator)?,
                denominator,
            ),
            Conversion::Scaled(multiple, base) => base
                .def()
                .conversion
                .to_si(arith::mul(value, multiple.factor())?),
        }
    }

    pub fn from_si(&self, value: Decimal) -> Result<Decimal> {
        match *self {
            Conversion::Factor(factor) => arith::div(value, factor),
            Conversion::Affine {
                offset,
                numerator,
                denominator,
            } => arith::sub(
                arith::div(arith::mul(value, denominator)?, numerator)?,
                offset,
            ),
            Conversion::Scaled(multiple, base) => {
                arith::div(base.def().conversion.from_si(value)?, multiple.factor())
            }
        }
    }

    pub fn delta_to_si(&self, value: Decimal) -> Result<Decimal> {
        match *self {
            Conversion::Affine {
                numerator,
                denominator,
                ..
            } => arith::div(arith::mul(value, numerator)?, denominator),
            Conversion::Scaled(multiple, base) => base
                .def()
                .conversion
                .delta_to_si(arith::mul(value, multiple.factor())?),
            Conversion::Factor(_) => self.to_si(value),
        }
    }

    pub fn delta_from_si(&self, value: Decimal) -> Result<Decimal> {
        match *self {
            Conversion::Affine {
                numerator,
                denominator,
                ..
            } => arith::div(arith::mul(value, denominator)?, numerator),
            Conversion::Scaled(multiple, base) => arith::div(
                base.def().conversion.delta_from_si(value)?,
                multiple.factor(),
            ),
            Conversion::Factor(_) => self.from_si(value),
        }
    }
}

/// Unit metadata - single source of truth for each base unit
#[derive(Debug)]
pub struct UnitDef<U: 'static> {
    /// The unit enum variant
    pub unit: U,
    /// Short display symbol (e.g., "km", "lb")
    pub symbol: &'static str,
    pub system: MeasurementSystem,
    pub conversion: Conversion<U>,
}

impl<U: 'static> UnitDef<U> {
    pub const fn new(unit: U, symbol: &'static str, system: MeasurementSystem, conversion: Conversion<U>) -> Self {
        Self {
            unit,
            symbol,
            system,
            conversion,
        }
    }
}

/// A unit enum backed by a static [`UnitDef`] table
pub trait BaseUnit: Copy + PartialEq + 'static {
    /// Every definition, in variant order
    fn definitions() -> &'static [UnitDef<Self>];

    /// Get the unit definition
    fn def(self) -> &'static UnitDef<Self>;

    /// Iterator over all units
    fn all() -> impl Iterator<Item = Self> {
        Self::definitions().iter().map(|d| d.unit)
    }

    /// Find a unit by its symbol
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::definitions()
            .iter()
            .find(|d| d.symbol == symbol)
            .map(|d| d.unit)
    }
}

/// Implements [`BaseUnit`], [`ScientificUnit`], [`Catalogue`] and `Display` for
/// a fieldless unit enum and its definition table.
macro_rules! impl_base_unit {
    ($unit:ident, $quantity:ty, $defs:ident) => {
        impl $crate::types::unit::BaseUnit for $unit {
            fn definitions() -> &'static [$crate::types::unit::UnitDef<Self>] {
                $defs
            }

            fn def(self) -> &'static $crate::types::unit::UnitDef<Self> {
                &$defs[self as usize]
            }
        }

        impl $crate::types::unit::ScientificUnit for $unit {
            type Quantity = $quantity;

            fn symbol(&self) -> ::std::borrow::Cow<'static, str> {
                use $crate::types::unit::BaseUnit;
                ::std::borrow::Cow::Borrowed(self.def().symbol)
            }

            fn system(&self) -> $crate::types::system::MeasurementSystem {
                use $crate::types::unit::BaseUnit;
                self.def().system
            }

            fn to_si(&self, value: ::rust_decimal::Decimal) -> $crate::Result<::rust_decimal::Decimal> {
                use $crate::types::unit::BaseUnit;
                self.def().conversion.to_si(value)
            }

            fn from_si(&self, value: ::rust_decimal::Decimal) -> $crate::Result<::rust_decimal::Decimal> {
                use $crate::types::unit::BaseUnit;
                self.def().conversion.from_si(value)
            }

            fn delta_to_si(&self, value: ::rust_decimal::Decimal) -> $crate::Result<::rust_decimal::Decimal> {
                use $crate::types::unit::BaseUnit;
                self.def().conversion.delta_to_si(value)
            }

            fn delta_from_si(&self, value: ::rust_decimal::Decimal) -> $crate::Result<::rust_decimal::Decimal> {
                use $crate::types::unit::BaseUnit;
                self.def().conversion.delta_from_si(value)
            }
        }

        impl $crate::types::unit::Catalogue for $unit {
            fn catalogue() -> Vec<Self> {
                <Self as $crate::types::unit::BaseUnit>::all().collect()
            }
        }

        impl ::std::fmt::Display for $unit {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::types::unit::BaseUnit;
                write!(f, "{}", self.def().symbol)
            }
        }
    };
}

pub(crate) use impl_base_unit;

/// Checks that a definition table lists every variant in order and that each
/// unit survives a round trip through SI.
#[cfg(test)]
pub(crate) fn check_definitions<U>()
where
    U: BaseUnit + ScientificUnit,
{
    for (index, def) in U::definitions().iter().enumerate() {
        let unit = def.unit;
        assert!(
            std::ptr::eq(unit.def(), def),
            "definition {index} ({}) is out of variant order",
            def.symbol
        );
        assert!(!def.symbol.is_empty());
        assert_eq!(U::from_symbol(def.symbol), Some(unit), "duplicate symbol {}", def.symbol);

        for value in [Decimal::ZERO, Decimal::ONE, Decimal::new(-125, 1), Decimal::new(98765, 3)] {
            let si = unit.to_si(value).unwrap();
            let back = unit.from_si(si).unwrap();
            assert!(
                (back - value).abs() < Decimal::new(1, 20),
                "{} does not round trip {value}: got {back}",
                def.symbol
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_multiples() {
        assert_eq!(MetricMultiple::Kilo.factor(), Decimal::from(1000));
        assert_eq!(MetricMultiple::Milli.factor() * Decimal::from(1000), Decimal::ONE);
        assert_eq!(MetricMultiple::Micro.prefix(), "µ");
    }

    #[test]
    fn test_const_decimal_matches_runtime() {
        const MICRO: Decimal = MetricMultiple::Micro.factor();
        const NEGATIVE: Decimal = decimal(-45_967, 2);
        const WIDE: Decimal = decimal(295_735_295_625, 16);

        assert_eq!(MICRO, Decimal::new(1, 6));
        assert_eq!(NEGATIVE, Decimal::new(-45_967, 2));
        assert_eq!(WIDE, Decimal::new(295_735_295_625, 16));
        assert_eq!(decimal(i64::MAX, 0), Decimal::from(i64::MAX));
        assert_eq!(decimal(i64::MIN, 3), Decimal::new(i64::MIN, 3));
    }
}
