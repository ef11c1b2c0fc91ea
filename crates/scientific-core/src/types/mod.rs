//! Value and unit types

pub mod composite;
pub mod quantity;
pub mod system;
pub mod unit;
pub mod value;
pub mod wrapped;

pub use composite::{Components, Per, Times};
pub use quantity::{DividedBy, MultipliedBy, PhysicalQuantity, Quantity};
pub use system::MeasurementSystem;
pub use unit::{BaseUnit, Catalogue, Conversion, MetricMultiple, ScientificUnit, UnitDef};
pub use value::ScientificValue;
pub use wrapped::Wrapped;
