//! scientific-array: sequences of amounts in one unit
//!
//! A [`ScientificArray`] stores plain decimals next to a single unit and runs
//! the core conversions and derivations element by element.
//!
//! ```
//! use rust_decimal::Decimal;
//! use scientific_array::ScientificArray;
//! use scientific_core::units::{LengthUnit, TimeUnit};
//!
//! let distances = ScientificArray::from_values([100, 250, 400], LengthUnit::Meter);
//! let times = ScientificArray::from_values([10, 25, 50], TimeUnit::Second);
//! let speeds = distances.per(&times)?;
//! assert_eq!(speeds.values(), &[Decimal::from(10), Decimal::from(10), Decimal::from(8)]);
//! # Ok::<(), scientific_array::ArrayError>(())
//! ```

mod array;
pub mod error;

pub use array::ScientificArray;
pub use error::{ArrayError, Result};
