//! Composite units
//!
//! [`Per`] and [`Times`] build a unit out of two component units. Their SI
//! pivot is the composition of the components' pivots, using the delta form
//! of each component so offsets (°C, °F) act as intervals.
//!
//! For `N per D`, the denominator pivots in the opposite direction from the
//! numerator: converting `m/h` to SI converts the meters to SI, then turns the
//! "per hour" into "per second" by converting *from* SI seconds to hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

use super::quantity::{DividedBy, MultipliedBy};
use super::system::MeasurementSystem;
use super::unit::{Catalogue, ScientificUnit};
use crate::error::{Result, UnitsError};

fn common_system<L: ScientificUnit, R: ScientificUnit>(left: &L, right: &R) -> Result<MeasurementSystem> {
    left.system().common(right.system()).ok_or_else(|| {
        debug!(
            left = %left.symbol(),
            right = %right.symbol(),
            "rejecting composite of units without a shared measurement system"
        );
        UnitsError::IncompatibleMeasurementSystem {
            left_symbol: left.symbol().into_owned(),
            left: left.system(),
            right_symbol: right.symbol().into_owned(),
            right: right.system(),
        }
    })
}

const fn const_common_system(left: MeasurementSystem, right: MeasurementSystem) -> MeasurementSystem {
    match left.common(right) {
        Some(system) => system,
        None => panic!("composite units need a shared measurement system"),
    }
}

/// Serialized form of a composite: its two components
#[derive(Serialize, Deserialize)]
pub struct Components<A, B>(pub A, pub B);

/// `numerator / denominator` (e.g. `J/K`, `kg/s`)
///
/// Built with [`Per::new`], which reads both components' systems. The const
/// constructor behind the SI constants in [`derived`](crate::derived) is not
/// public:
///
/// ```compile_fail
/// use scientific_core::units::{LengthUnit, TimeUnit};
/// use scientific_core::{MeasurementSystem, Per};
///
/// let _ = Per::from_systems(
///     LengthUnit::Meter,
///     MeasurementSystem::Imperial,
///     TimeUnit::Second,
///     MeasurementSystem::MetricAndImperial,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Components<N, D>",
    into = "Components<N, D>",
    bound(
        serialize = "N: ScientificUnit + Serialize, D: ScientificUnit + Serialize",
        deserialize = "N: ScientificUnit + Deserialize<'de>, D: ScientificUnit + Deserialize<'de>"
    )
)]
pub struct Per<N, D> {
    numerator: N,
    denominator: D,
    system: MeasurementSystem,
}

impl<N: ScientificUnit, D: ScientificUnit> Per<N, D> {
    /// Fails when the components share no measurement system
    pub fn new(numerator: N, denominator: D) -> Result<Self> {
        let system = common_system(&numerator, &denominator)?;
        Ok(Self {
            numerator,
            denominator,
            system,
        })
    }

    /// Builds a composite in const context; a composite of incompatible
    /// systems fails to compile. `numerator_system` and
    /// `denominator_system` must be the components' systems, which
    /// `derived` checks against [`new`](Self::new) in its tests.
    pub(crate) const fn from_systems(
        numerator: N,
        numerator_system: MeasurementSystem,
        denominator: D,
        denominator_system: MeasurementSystem,
    ) -> Self {
        Self {
            numerator,
            denominator,
            system: const_common_system(numerator_system, denominator_system),
        }
    }

    /// The system stored at construction, readable in const context for
    /// nesting composites built with [`from_systems`](Self::from_systems)
    pub(crate) const fn shared_system(&self) -> MeasurementSystem {
        self.system
    }

    pub fn numerator(&self) -> N {
        self.numerator
    }

    pub fn denominator(&self) -> D {
        self.denominator
    }
}

impl<N: ScientificUnit, D: ScientificUnit> TryFrom<Components<N, D>> for Per<N, D> {
    type Error = UnitsError;

    fn try_from(Components(numerator, denominator): Components<N, D>) -> Result<Self> {
        Self::new(numerator, denominator)
    }
}

impl<N, D> From<Per<N, D>> for Components<N, D> {
    fn from(per: Per<N, D>) -> Self {
        Components(per.numerator, per.denominator)
    }
}

impl<N, D> ScientificUnit for Per<N, D>
where
    N: ScientificUnit,
    D: ScientificUnit,
    N::Quantity: DividedBy<D::Quantity>,
{
    type Quantity = <N::Quantity as DividedBy<D::Quantity>>::Output;

    fn symbol(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}/{}", self.numerator.symbol(), self.denominator.symbol()))
    }

    fn system(&self) -> MeasurementSystem {
        self.system
    }

    fn to_si(&self, value: Decimal) -> Result<Decimal> {
        self.denominator
            .delta_from_si(self.numerator.delta_to_si(value)?)
    }

    fn from_si(&self, value: Decimal) -> Result<Decimal> {
        self.denominator
            .delta_to_si(self.numerator.delta_from_si(value)?)
    }

    fn delta_to_si(&self, value: Decimal) -> Result<Decimal> {
        self.to_si(value)
    }

    fn delta_from_si(&self, value: Decimal) -> Result<Decimal> {
        self.from_si(value)
    }
}

impl<N, D> Catalogue for Per<N, D>
where
    N: Catalogue,
    D: Catalogue,
    N::Quantity: DividedBy<D::Quantity>,
{
    /// Every pairing of the components' catalogues that shares a system
    fn catalogue() -> Vec<Self> {
        let denominators = D::catalogue();
        let mut units: Vec<Self> = Vec::new();
        for numerator in N::catalogue() {
            for &denominator in &denominators {
                if let Ok(unit) = Self::new(numerator, denominator) {
                    if !units.contains(&unit) {
                        units.push(unit);
                    }
                }
            }
        }
        units
    }
}

impl<N, D> fmt::Display for Per<N, D>
where
    N: ScientificUnit,
    D: ScientificUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator.symbol(), self.denominator.symbol())
    }
}

/// `left × right` (e.g. `J⋅s`, `Pa⋅s`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Components<A, B>",
    into = "Components<A, B>",
    bound(
        serialize = "A: ScientificUnit + Serialize, B: ScientificUnit + Serialize",
        deserialize = "A: ScientificUnit + Deserialize<'de>, B: ScientificUnit + Deserialize<'de>"
    )
)]
pub struct Times<A, B> {
    left: A,
    right: B,
    system: MeasurementSystem,
}

impl<A: ScientificUnit, B: ScientificUnit> Times<A, B> {
    /// Fails when the components share no measurement system
    pub fn new(left: A, right: B) -> Result<Self> {
        let system = common_system(&left, &right)?;
        Ok(Self { left, right, system })
    }

    /// Const counterpart of [`new`](Self::new), see `Per::from_systems`
    pub(crate) const fn from_systems(
        left: A,
        left_system: MeasurementSystem,
        right: B,
        right_system: MeasurementSystem,
    ) -> Self {
        Self {
            left,
            right,
            system: const_common_system(left_system, right_system),
        }
    }

    /// See [`Per::shared_system`]
    pub(crate) const fn shared_system(&self) -> MeasurementSystem {
        self.system
    }

    pub fn left(&self) -> A {
        self.left
    }

    pub fn right(&self) -> B {
        self.right
    }
}

impl<A: ScientificUnit, B: ScientificUnit> TryFrom<Components<A, B>> for Times<A, B> {
    type Error = UnitsError;

    fn try_from(Components(left, right): Components<A, B>) -> Result<Self> {
        Self::new(left, right)
    }
}

impl<A, B> From<Times<A, B>> for Components<A, B> {
    fn from(times: Times<A, B>) -> Self {
        Components(times.left, times.right)
    }
}

impl<A, B> ScientificUnit for Times<A, B>
where
    A: ScientificUnit,
    B: ScientificUnit,
    A::Quantity: MultipliedBy<B::Quantity>,
{
    type Quantity = <A::Quantity as MultipliedBy<B::Quantity>>::Output;

    fn symbol(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}⋅{}", self.left.symbol(), self.right.symbol()))
    }

    fn system(&self) -> MeasurementSystem {
        self.system
    }

    fn to_si(&self, value: Decimal) -> Result<Decimal> {
        self.right.delta_to_si(self.left.delta_to_si(value)?)
    }

    fn from_si(&self, value: Decimal) -> Result<Decimal> {
        self.left.delta_from_si(self.right.delta_from_si(value)?)
    }

    fn delta_to_si(&self, value: Decimal) -> Result<Decimal> {
        self.to_si(value)
    }

    fn delta_from_si(&self, value: Decimal) -> Result<Decimal> {
        self.from_si(value)
    }
}

impl<A, B> Catalogue for Times<A, B>
where
    A: Catalogue,
    B: Catalogue,
    A::Quantity: MultipliedBy<B::Quantity>,
{
    fn catalogue() -> Vec<Self> {
        let rights = B::catalogue();
        let mut units: Vec<Self> = Vec::new();
        for left in A::catalogue() {
            for &right in &rights {
                if let Ok(unit) = Self::new(left, right) {
                    if !units.contains(&unit) {
                        units.push(unit);
                    }
                }
            }
        }
        units
    }
}

impl<A, B> fmt::Display for Times<A, B>
where
    A: ScientificUnit,
    B: ScientificUnit,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}⋅{}", self.left.symbol(), self.right.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{EnergyUnit, LengthUnit, TemperatureUnit, TimeUnit, VolumeUnit, WeightUnit};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_per_pivots_denominator_in_reverse() {
        let kilometer_per_hour = Per::new(LengthUnit::Kilometer, TimeUnit::Hour).unwrap();
        // 36 km/h = 10 m/s
        assert_eq!(kilometer_per_hour.to_si(Decimal::from(36)).unwrap(), Decimal::from(10));
        assert_eq!(kilometer_per_hour.from_si(Decimal::from(10)).unwrap(), Decimal::from(36));
    }

    #[test]
    fn test_times_pivots_both_components_forward() {
        let kilojoule_hour = Times::new(EnergyUnit::Kilojoule, TimeUnit::Hour).unwrap();
        assert_eq!(
            kilojoule_hour.to_si(Decimal::ONE).unwrap(),
            Decimal::from(3_600_000)
        );
        assert_eq!(
            kilojoule_hour.from_si(Decimal::from(3_600_000)).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_offset_components_act_as_intervals() {
        let per_celsius = Per::new(EnergyUnit::Joule, TemperatureUnit::Celsius).unwrap();
        let per_kelvin = Per::new(EnergyUnit::Joule, TemperatureUnit::Kelvin).unwrap();
        assert_eq!(
            per_celsius.to_si(Decimal::from(4)).unwrap(),
            per_kelvin.to_si(Decimal::from(4)).unwrap()
        );
    }

    #[test]
    fn test_symbols() {
        let heat_capacity = Per::new(EnergyUnit::Joule, TemperatureUnit::Kelvin).unwrap();
        assert_eq!(heat_capacity.symbol(), "J/K");
        let action = Times::new(EnergyUnit::Joule, TimeUnit::Second).unwrap();
        assert_eq!(action.symbol(), "J⋅s");
    }

    #[test]
    fn test_system_is_the_shared_family() {
        let metric = Per::new(WeightUnit::Kilogram, TimeUnit::Second).unwrap();
        assert_eq!(metric.system(), MeasurementSystem::Metric);

        let uk = Per::new(WeightUnit::Pound, VolumeUnit::ImperialGallon).unwrap();
        assert_eq!(uk.system(), MeasurementSystem::UKImperial);
    }

    #[test]
    fn test_incompatible_systems_rejected() {
        let result = Per::new(WeightUnit::Kilogram, VolumeUnit::USGallon);
        assert!(matches!(
            result,
            Err(UnitsError::IncompatibleMeasurementSystem { .. })
        ));
        assert!(Times::new(LengthUnit::Foot, LengthUnit::Meter).is_err());
    }

    #[test]
    fn test_catalogue_has_no_duplicates_or_mixed_systems() {
        let units = Per::<WeightUnit, TimeUnit>::catalogue();
        assert!(!units.is_empty());
        for (index, unit) in units.iter().enumerate() {
            assert!(!units[index + 1..].contains(unit));
            assert!(unit.numerator().system().is_compatible(unit.denominator().system()));
        }
        assert!(units.contains(&Per::new(WeightUnit::Pound, TimeUnit::Hour).unwrap()));
    }

    #[test]
    fn test_serde_validates_systems() {
        let unit = Per::new(WeightUnit::Kilogram, TimeUnit::Second).unwrap();
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, r#"["Kilogram","Second"]"#);
        let back: Per<WeightUnit, TimeUnit> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);

        let mixed = serde_json::from_str::<Per<WeightUnit, VolumeUnit>>(r#"["Kilogram","USGallon"]"#);
        assert!(mixed.is_err());
    }
}
