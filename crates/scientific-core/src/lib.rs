//! scientific-core: typed physical quantities and units
//!
//! Every unit belongs to one physical quantity and converts through the SI
//! unit of that quantity. Values of different quantities do not mix: adding
//! a length to a time, or converting joules to meters, does not compile.
//! Products and quotients of quantities are declared relations
//! (`Force / Area = Pressure`) with named functions per direction in
//! [`derived`].
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use scientific_core::units::{LengthUnit, TimeUnit};
//! use scientific_core::{Per, ScientificUnit};
//!
//! // 90 km/h in m/s
//! let speed = LengthUnit::Kilometer.of(90).per(&TimeUnit::Hour.of(1))?;
//! let speed = speed.convert(Per::new(LengthUnit::Meter, TimeUnit::Second)?)?;
//! assert_eq!(speed.value(), Decimal::from(25));
//!
//! // 5.75 ft as feet and inches
//! let height = LengthUnit::Foot.of(Decimal::new(575, 2));
//! let (feet, inches) = height.split(LengthUnit::Foot, LengthUnit::Inch)?;
//! assert_eq!(feet.to_string(), "5 ft");
//! assert_eq!(inches.to_string(), "9 in");
//! # Ok::<(), scientific_core::UnitsError>(())
//! ```

mod arith;
pub mod convert;
pub mod derivation;
pub mod derived;
pub mod error;
pub mod rounding;
pub mod split;
pub mod types;
pub mod units;

pub use convert::{convert_value, convert_value_rounded};
pub use error::{ArithmeticError, Result, UnitsError};
pub use rounding::{Rounding, RoundingMode, SplitOptions};
pub use types::{
    BaseUnit, Catalogue, Components, DividedBy, MeasurementSystem, MetricMultiple, MultipliedBy, Per,
    PhysicalQuantity, Quantity, ScientificUnit, ScientificValue, Times, Wrapped,
};
