//! Derivation combinators
//!
//! Each combinator pivots its operands through SI, combines the SI amounts and
//! converts the result with the target's `from_si`. Only adding and
//! subtracting constrain quantities here; which quantity a product or quotient
//! has is decided by the named relation functions built on top of these (see
//! [`crate::derived`]).

use rust_decimal::Decimal;

use crate::arith;
use crate::error::Result;
use crate::types::{ScientificUnit, ScientificValue};

fn into_target<T: ScientificUnit>(target: T, si: Decimal) -> Result<ScientificValue<T>> {
    Ok(ScientificValue::new(target.from_si(si)?, target))
}

/// `target.from_si(left.to_si + right.to_si)`
pub fn by_adding<T, L, R>(
    target: T,
    left: &ScientificValue<L>,
    right: &ScientificValue<R>,
) -> Result<ScientificValue<T>>
where
    L: ScientificUnit,
    R: ScientificUnit<Quantity = L::Quantity>,
    T: ScientificUnit<Quantity = L::Quantity>,
{
    into_target(target, arith::add(left.to_si()?, right.to_si()?)?)
}

/// `target.from_si(left.to_si - right.to_si)`
pub fn by_subtracting<T, L, R>(
    target: T,
    left: &ScientificValue<L>,
    right: &ScientificValue<R>,
) -> Result<ScientificValue<T>>
where
    L: ScientificUnit,
    R: ScientificUnit<Quantity = L::Quantity>,
    T: ScientificUnit<Quantity = L::Quantity>,
{
    into_target(target, arith::sub(left.to_si()?, right.to_si()?)?)
}

/// `target.from_si(left.to_si × right.to_si)`
pub fn by_multiplying<T, L, R>(
    target: T,
    left: &ScientificValue<L>,
    right: &ScientificValue<R>,
) -> Result<ScientificValue<T>>
where
    T: ScientificUnit,
    L: ScientificUnit,
    R: ScientificUnit,
{
    into_target(target, arith::mul(left.to_si()?, right.to_si()?)?)
}

/// `target.from_si(left.to_si / right.to_si)`
///
/// A zero divisor is reported as
/// [`ArithmeticError::DivisionByZero`](crate::ArithmeticError::DivisionByZero).
pub fn by_dividing<T, L, R>(
    target: T,
    left: &ScientificValue<L>,
    right: &ScientificValue<R>,
) -> Result<ScientificValue<T>>
where
    T: ScientificUnit,
    L: ScientificUnit,
    R: ScientificUnit,
{
    into_target(target, arith::div(left.to_si()?, right.to_si()?)?)
}

/// `target.from_si(1 / value.to_si)`
pub fn by_inverting<T, V>(target: T, value: &ScientificValue<V>) -> Result<ScientificValue<T>>
where
    T: ScientificUnit,
    V: ScientificUnit,
{
    into_target(target, arith::div(Decimal::ONE, value.to_si()?)?)
}
