//! Core value representation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use super::composite::{Per, Times};
use super::quantity::{DividedBy, MultipliedBy, PhysicalQuantity};
use super::unit::ScientificUnit;
use crate::convert;
use crate::derivation;
use crate::error::Result;
use crate::rounding::{Rounding, SplitOptions};
use crate::split;

/// An amount in a unit
///
/// Values never change; every operation returns a new value. Two values of
/// the same quantity compare through their SI amounts, so `1 km == 1000 m`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScientificValue<U> {
    value: Decimal,
    unit: U,
}

impl<U: ScientificUnit> ScientificValue<U> {
    pub fn new(value: Decimal, unit: U) -> Self {
        Self { value, unit }
    }

    /// The amount, in [`unit`](Self::unit)
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn quantity(&self) -> PhysicalQuantity {
        self.unit.quantity()
    }

    /// The amount in the SI unit of the quantity
    pub fn to_si(&self) -> Result<Decimal> {
        self.unit.to_si(self.value)
    }

    /// Convert to another unit of the same quantity
    pub fn convert<T>(&self, target: T) -> Result<ScientificValue<T>>
    where
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        let value = convert::convert_value(self.value, self.unit, target)?;
        Ok(ScientificValue::new(value, target))
    }

    /// Convert, then round the amount
    pub fn convert_rounded<T>(&self, target: T, rounding: Rounding) -> Result<ScientificValue<T>>
    where
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        let value = convert::convert_value_rounded(self.value, self.unit, target, rounding)?;
        Ok(ScientificValue::new(value, target))
    }

    /// Round the amount without changing the unit
    pub fn rounded(&self, rounding: Rounding) -> Self {
        Self::new(rounding.apply(self.value), self.unit)
    }

    /// Sum of two values, in this value's unit
    pub fn plus<R>(&self, other: &ScientificValue<R>) -> Result<Self>
    where
        R: ScientificUnit<Quantity = U::Quantity>,
    {
        derivation::by_adding(self.unit, self, other)
    }

    /// Difference of two values, in this value's unit
    pub fn minus<R>(&self, other: &ScientificValue<R>) -> Result<Self>
    where
        R: ScientificUnit<Quantity = U::Quantity>,
    {
        derivation::by_subtracting(self.unit, self, other)
    }

    /// Product in the composite unit of both operands (`J × s → J⋅s`)
    pub fn times<R>(&self, other: &ScientificValue<R>) -> Result<ScientificValue<Times<U, R>>>
    where
        R: ScientificUnit,
        U::Quantity: MultipliedBy<R::Quantity>,
    {
        let target = Times::new(self.unit, other.unit)?;
        derivation::by_multiplying(target, self, other)
    }

    /// Quotient in the composite unit of both operands (`J / K → J/K`)
    pub fn per<R>(&self, other: &ScientificValue<R>) -> Result<ScientificValue<Per<U, R>>>
    where
        R: ScientificUnit,
        U::Quantity: DividedBy<R::Quantity>,
    {
        let target = Per::new(self.unit, other.unit)?;
        derivation::by_dividing(target, self, other)
    }

    /// Split into a whole amount of `left` and the remainder in `right`,
    /// with the default [`SplitOptions`]
    pub fn split<L, R>(&self, left: L, right: R) -> Result<(ScientificValue<L>, ScientificValue<R>)>
    where
        L: ScientificUnit<Quantity = U::Quantity>,
        R: ScientificUnit<Quantity = U::Quantity>,
    {
        split::split(self, left, right, &SplitOptions::default())
    }

    /// Decompose over `units`, largest first, with the default [`SplitOptions`]
    pub fn to_components<T, const N: usize>(&self, units: [T; N]) -> Result<[ScientificValue<T>; N]>
    where
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        split::to_components(self, units, &SplitOptions::default())
    }
}

impl<U, V> PartialEq<ScientificValue<V>> for ScientificValue<U>
where
    U: ScientificUnit,
    V: ScientificUnit<Quantity = U::Quantity>,
{
    fn eq(&self, other: &ScientificValue<V>) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<U, V> PartialOrd<ScientificValue<V>> for ScientificValue<U>
where
    U: ScientificUnit,
    V: ScientificUnit<Quantity = U::Quantity>,
{
    /// Values in the same unit compare their amounts directly. Otherwise
    /// `None` when either side overflows on its way to SI.
    fn partial_cmp(&self, other: &ScientificValue<V>) -> Option<Ordering> {
        if (&self.unit as &dyn Any).downcast_ref::<V>() == Some(&other.unit) {
            return Some(self.value.cmp(&other.value));
        }

        let left = self.to_si().ok()?;
        let right = other.to_si().ok()?;
        Some(left.cmp(&right))
    }
}

impl<U: ScientificUnit> fmt::Display for ScientificValue<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value.normalize(), self.unit.symbol())
    }
}
