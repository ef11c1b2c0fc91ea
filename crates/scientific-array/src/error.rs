//! Error types for the bulk layer

use scientific_core::UnitsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Element-wise operation over arrays of different lengths
    #[error("arrays differ in length: {left} and {right}")]
    IndexMismatch { left: usize, right: usize },
    #[error(transparent)]
    Units(#[from] UnitsError),
}

pub type Result<T> = std::result::Result<T, ArrayError>;
