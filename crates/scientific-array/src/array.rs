use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use scientific_core::derivation::{by_adding, by_dividing, by_multiplying, by_subtracting};
use scientific_core::{
    convert_value, convert_value_rounded, DividedBy, MultipliedBy, Per, Rounding, ScientificUnit,
    ScientificValue, Times,
};

use crate::error::{ArrayError, Result};

/// Amounts sharing one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScientificArray<U> {
    values: Vec<Decimal>,
    unit: U,
}

impl<U: ScientificUnit> ScientificArray<U> {
    /// An empty array in `unit`
    pub fn new(unit: U) -> Self {
        Self {
            values: Vec::new(),
            unit,
        }
    }

    pub fn from_values<I>(values: I, unit: U) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            unit,
        }
    }

    /// Collects values of one quantity, converting each to `unit`
    pub fn from_scientific_values<'a, V, I>(values: I, unit: U) -> Result<Self>
    where
        V: ScientificUnit<Quantity = U::Quantity>,
        I: IntoIterator<Item = &'a ScientificValue<V>>,
    {
        let values = values
            .into_iter()
            .map(|value| convert_value(value.value(), value.unit(), unit))
            .collect::<scientific_core::Result<Vec<_>>>()?;
        Ok(Self { values, unit })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<ScientificValue<U>> {
        self.values
            .get(index)
            .map(|&value| ScientificValue::new(value, self.unit))
    }

    pub fn iter(&self) -> impl Iterator<Item = ScientificValue<U>> + '_ {
        self.values
            .iter()
            .map(move |&value| ScientificValue::new(value, self.unit))
    }

    /// Appends a value of the same quantity, converted to this array's unit
    pub fn push<V>(&mut self, value: &ScientificValue<V>) -> Result<()>
    where
        V: ScientificUnit<Quantity = U::Quantity>,
    {
        self.values
            .push(convert_value(value.value(), value.unit(), self.unit)?);
        Ok(())
    }

    /// Every amount in SI
    pub fn to_si(&self) -> Result<Vec<Decimal>> {
        let si = self
            .values
            .iter()
            .map(|&value| self.unit.to_si(value))
            .collect::<scientific_core::Result<_>>()?;
        Ok(si)
    }

    pub fn convert<T>(&self, target: T) -> Result<ScientificArray<T>>
    where
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        let values = self
            .values
            .iter()
            .map(|&value| convert_value(value, self.unit, target))
            .collect::<scientific_core::Result<_>>()?;
        Ok(ScientificArray {
            values,
            unit: target,
        })
    }

    pub fn convert_rounded<T>(&self, target: T, rounding: Rounding) -> Result<ScientificArray<T>>
    where
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        let values = self
            .values
            .iter()
            .map(|&value| convert_value_rounded(value, self.unit, target, rounding))
            .collect::<scientific_core::Result<_>>()?;
        Ok(ScientificArray {
            values,
            unit: target,
        })
    }

    /// Applies `f` to every amount, keeping the unit
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Decimal) -> Decimal,
    {
        Self {
            values: self.values.iter().copied().map(f).collect(),
            unit: self.unit,
        }
    }

    /// Pairs up elements of both arrays and combines them into `target`.
    ///
    /// Both arrays must have the same length.
    pub fn combine<R, T, F>(&self, other: &ScientificArray<R>, target: T, mut f: F) -> Result<ScientificArray<T>>
    where
        R: ScientificUnit,
        T: ScientificUnit,
        F: FnMut(T, &ScientificValue<U>, &ScientificValue<R>) -> scientific_core::Result<ScientificValue<T>>,
    {
        if self.len() != other.len() {
            return Err(ArrayError::IndexMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let values = self
            .iter()
            .zip(other.iter())
            .map(|(left, right)| f(target, &left, &right).map(|value| value.value()))
            .collect::<scientific_core::Result<_>>()?;
        Ok(ScientificArray {
            values,
            unit: target,
        })
    }

    /// Element-wise product in the composite unit of both arrays
    pub fn times<R>(&self, other: &ScientificArray<R>) -> Result<ScientificArray<Times<U, R>>>
    where
        R: ScientificUnit,
        U::Quantity: MultipliedBy<R::Quantity>,
    {
        let target = Times::new(self.unit, other.unit)?;
        self.by_multiplying(target, other)
    }

    /// Element-wise quotient in the composite unit of both arrays
    pub fn per<R>(&self, other: &ScientificArray<R>) -> Result<ScientificArray<Per<U, R>>>
    where
        R: ScientificUnit,
        U::Quantity: DividedBy<R::Quantity>,
    {
        let target = Per::new(self.unit, other.unit)?;
        self.by_dividing(target, other)
    }

    pub fn by_multiplying<R, T>(&self, target: T, other: &ScientificArray<R>) -> Result<ScientificArray<T>>
    where
        R: ScientificUnit,
        T: ScientificUnit,
    {
        self.combine(other, target, |target, left, right| by_multiplying(target, left, right))
    }

    pub fn by_dividing<R, T>(&self, target: T, other: &ScientificArray<R>) -> Result<ScientificArray<T>>
    where
        R: ScientificUnit,
        T: ScientificUnit,
    {
        self.combine(other, target, |target, left, right| by_dividing(target, left, right))
    }

    pub fn by_adding<R, T>(&self, target: T, other: &ScientificArray<R>) -> Result<ScientificArray<T>>
    where
        R: ScientificUnit<Quantity = U::Quantity>,
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        self.combine(other, target, |target, left, right| by_adding(target, left, right))
    }

    pub fn by_subtracting<R, T>(&self, target: T, other: &ScientificArray<R>) -> Result<ScientificArray<T>>
    where
        R: ScientificUnit<Quantity = U::Quantity>,
        T: ScientificUnit<Quantity = U::Quantity>,
    {
        self.combine(other, target, |target, left, right| by_subtracting(target, left, right))
    }
}
