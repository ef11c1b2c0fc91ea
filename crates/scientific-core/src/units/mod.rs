//! Unit catalogue
//!
//! One enum per base quantity, each backed by a static definition table.
//! Composite quantities (speed, density, heat capacity, ...) have no enum of
//! their own; they are [`Per`](crate::Per) or [`Times`](crate::Times) of
//! these.

pub mod amount;
pub mod area;
pub mod electric;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod volume;
pub mod weight;

pub use amount::{AmountOfSubstanceUnit, AMOUNT_OF_SUBSTANCE_UNITS};
pub use area::{AreaUnit, AREA_UNITS};
pub use electric::{
    ElectricChargeUnit, ElectricConductanceUnit, ElectricCurrentUnit, ElectricResistanceUnit, VoltageUnit,
    ELECTRIC_CHARGE_UNITS, ELECTRIC_CONDUCTANCE_UNITS, ELECTRIC_CURRENT_UNITS, ELECTRIC_RESISTANCE_UNITS,
    VOLTAGE_UNITS,
};
pub use energy::{EnergyUnit, ENERGY_UNITS};
pub use force::{ForceUnit, FORCE_UNITS};
pub use frequency::{FrequencyUnit, FREQUENCY_UNITS};
pub use length::{LengthUnit, LENGTH_UNITS};
pub use power::{PowerUnit, POWER_UNITS};
pub use pressure::{PressureUnit, PRESSURE_UNITS};
pub use temperature::{TemperatureUnit, TEMPERATURE_UNITS};
pub use time::{TimeUnit, TIME_UNITS};
pub use volume::{VolumeUnit, VOLUME_UNITS};
pub use weight::{WeightUnit, WEIGHT_UNITS};
