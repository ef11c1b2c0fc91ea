//! Checked decimal operations
//!
//! Every pivot goes through these so overflow and division by zero come back
//! as [`ArithmeticError`] instead of a panic inside `Decimal`'s operators.

use rust_decimal::Decimal;

use crate::error::{ArithmeticError, Result};

pub(crate) fn add(l: Decimal, r: Decimal) -> Result<Decimal> {
    l.checked_add(r).ok_or(ArithmeticError::Overflow.into())
}

pub(crate) fn sub(l: Decimal, r: Decimal) -> Result<Decimal> {
    l.checked_sub(r).ok_or(ArithmeticError::Overflow.into())
}

pub(crate) fn mul(l: Decimal, r: Decimal) -> Result<Decimal> {
    l.checked_mul(r).ok_or(ArithmeticError::Overflow.into())
}

pub(crate) fn div(l: Decimal, r: Decimal) -> Result<Decimal> {
    if r.is_zero() {
        return Err(ArithmeticError::DivisionByZero.into());
    }
    l.checked_div(r).ok_or(ArithmeticError::Overflow.into())
}
