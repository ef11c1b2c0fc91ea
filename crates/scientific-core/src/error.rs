//! Error types for the units engine

use thiserror::Error;

use crate::types::MeasurementSystem;

/// Failures of the underlying decimal arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("decimal overflow")]
    Overflow,
}

/// Errors surfaced by conversions, derivations and splitting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// Two units were combined or split together without sharing a measurement system
    #[error("cannot combine {left_symbol} ({left}) with {right_symbol} ({right}): no shared measurement system")]
    IncompatibleMeasurementSystem {
        left_symbol: String,
        left: MeasurementSystem,
        right_symbol: String,
        right: MeasurementSystem,
    },
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("splitting needs at least two component units, got {0}")]
    TooFewComponents(usize),
}

pub type Result<T> = std::result::Result<T, UnitsError>;
