//! Undefined quantities
//!
//! [`Wrapped`] moves a defined unit into the [`Undefined`] quantity so it can
//! take part in intermediate products and quotients that have no named
//! quantity, e.g. `J⋅J/s` on the way to a result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::quantity::Undefined;
use super::system::MeasurementSystem;
use super::unit::ScientificUnit;
use super::value::ScientificValue;
use crate::error::Result;

/// A defined unit taking part in undefined-quantity arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wrapped<U>(U);

impl<U: ScientificUnit> Wrapped<U> {
    pub fn new(unit: U) -> Self {
        Self(unit)
    }

    /// The defined unit behind the wrapper
    pub fn inner(&self) -> U {
        self.0
    }
}

impl<U: ScientificUnit> ScientificUnit for Wrapped<U> {
    type Quantity = Undefined;

    fn symbol(&self) -> Cow<'static, str> {
        self.0.symbol()
    }

    fn system(&self) -> MeasurementSystem {
        self.0.system()
    }

    fn to_si(&self, value: Decimal) -> Result<Decimal> {
        self.0.to_si(value)
    }

    fn from_si(&self, value: Decimal) -> Result<Decimal> {
        self.0.from_si(value)
    }

    fn delta_to_si(&self, value: Decimal) -> Result<Decimal> {
        self.0.delta_to_si(value)
    }

    fn delta_from_si(&self, value: Decimal) -> Result<Decimal> {
        self.0.delta_from_si(value)
    }
}

impl<U: ScientificUnit> fmt::Display for Wrapped<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.symbol())
    }
}

impl<U: ScientificUnit> ScientificValue<U> {
    /// The same amount, moved into the undefined quantity
    pub fn as_undefined(&self) -> ScientificValue<Wrapped<U>> {
        ScientificValue::new(self.value(), Wrapped::new(self.unit()))
    }
}

impl<U: ScientificUnit<Quantity = Undefined>> ScientificValue<U> {
    /// Reads the SI amount of an undefined value as an amount of `target`.
    ///
    /// The caller vouches that the undefined value has the dimension of
    /// `target`'s quantity; nothing here can check it.
    pub fn to_defined<T: ScientificUnit>(&self, target: T) -> Result<ScientificValue<T>> {
        Ok(ScientificValue::new(target.from_si(self.to_si()?)?, target))
    }
}
