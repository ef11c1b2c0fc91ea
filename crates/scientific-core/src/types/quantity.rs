//! Physical quantities
//!
//! Each quantity is an uninhabited marker type used only at the type level,
//! so a `Length` unit can never be converted into a `Weight` unit. The closed
//! [`PhysicalQuantity`] enum is the runtime name of every marker.
//!
//! Relations between quantities are declared one by one with [`MultipliedBy`]
//! and [`DividedBy`]. They decide which composite units exist (`J/K` is a
//! heat capacity because `Energy / Temperature = HeatCapacity` is declared), they
//! are not inferred from any dimensional rule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every physical quantity known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalQuantity {
    // Base and named derived quantities
    Length,
    Weight,
    Time,
    Temperature,
    AmountOfSubstance,
    ElectricCurrent,
    ElectricCharge,
    Voltage,
    ElectricResistance,
    ElectricConductance,
    Frequency,
    Area,
    Volume,
    Energy,
    Force,
    Power,
    Pressure,
    // Composite quantities
    Speed,
    Acceleration,
    Action,
    DynamicViscosity,
    HeatCapacity,
    SpecificHeatCapacity,
    Molality,
    MolarMass,
    Molarity,
    MolarVolume,
    Density,
    SpecificVolume,
    MassFlowRate,
    VolumetricFlow,
    Yank,
    Momentum,
    /// Intermediate results that have no named quantity
    Undefined,
}

impl PhysicalQuantity {
    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            PhysicalQuantity::Length => "length",
            PhysicalQuantity::Weight => "weight",
            PhysicalQuantity::Time => "time",
            PhysicalQuantity::Temperature => "temperature",
            PhysicalQuantity::AmountOfSubstance => "amount of substance",
            PhysicalQuantity::ElectricCurrent => "electric current",
            PhysicalQuantity::ElectricCharge => "electric charge",
            PhysicalQuantity::Voltage => "voltage",
            PhysicalQuantity::ElectricResistance => "electric resistance",
            PhysicalQuantity::ElectricConductance => "electric conductance",
            PhysicalQuantity::Frequency => "frequency",
            PhysicalQuantity::Area => "area",
            PhysicalQuantity::Volume => "volume",
            PhysicalQuantity::Energy => "energy",
            PhysicalQuantity::Force => "force",
            PhysicalQuantity::Power => "power",
            PhysicalQuantity::Pressure => "pressure",
            PhysicalQuantity::Speed => "speed",
            PhysicalQuantity::Acceleration => "acceleration",
            PhysicalQuantity::Action => "action",
            PhysicalQuantity::DynamicViscosity => "dynamic viscosity",
            PhysicalQuantity::HeatCapacity => "heat capacity",
            PhysicalQuantity::SpecificHeatCapacity => "specific heat capacity",
            PhysicalQuantity::Molality => "molality",
            PhysicalQuantity::MolarMass => "molar mass",
            PhysicalQuantity::Molarity => "molarity",
            PhysicalQuantity::MolarVolume => "molar volume",
            PhysicalQuantity::Density => "density",
            PhysicalQuantity::SpecificVolume => "specific volume",
            PhysicalQuantity::MassFlowRate => "mass flow rate",
            PhysicalQuantity::VolumetricFlow => "volumetric flow",
            PhysicalQuantity::Yank => "yank",
            PhysicalQuantity::Momentum => "momentum",
            PhysicalQuantity::Undefined => "undefined",
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Type-level tag of a physical quantity
pub trait Quantity: 'static {
    const KIND: PhysicalQuantity;
}

/// `Self × Rhs = Output`
pub trait MultipliedBy<Rhs: Quantity>: Quantity {
    type Output: Quantity;
}

/// `Self / Rhs = Output`
pub trait DividedBy<Rhs: Quantity>: Quantity {
    type Output: Quantity;
}

macro_rules! quantities {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Marker for [`PhysicalQuantity::", stringify!($name), "`]")]
            #[derive(Debug)]
            pub enum $name {}

            impl Quantity for $name {
                const KIND: PhysicalQuantity = PhysicalQuantity::$name;
            }
        )*
    };
}

quantities!(
    Length,
    Weight,
    Time,
    Temperature,
    AmountOfSubstance,
    ElectricCurrent,
    ElectricCharge,
    Voltage,
    ElectricResistance,
    ElectricConductance,
    Frequency,
    Area,
    Volume,
    Energy,
    Force,
    Power,
    Pressure,
    Speed,
    Acceleration,
    Action,
    DynamicViscosity,
    HeatCapacity,
    SpecificHeatCapacity,
    Molality,
    MolarMass,
    Molarity,
    MolarVolume,
    Density,
    SpecificVolume,
    MassFlowRate,
    VolumetricFlow,
    Yank,
    Momentum,
    Undefined,
);

macro_rules! relations {
    ($($left:ident $op:tt $right:ident = $output:ident;)*) => {
        $( relations!(@one $left $op $right = $output); )*
    };
    (@one $left:ident * $right:ident = $output:ident) => {
        impl MultipliedBy<$right> for $left {
            type Output = $output;
        }
    };
    (@one $left:ident / $right:ident = $output:ident) => {
        impl DividedBy<$right> for $left {
            type Output = $output;
        }
    };
}

relations! {
    // Mechanics
    Weight * Acceleration = Force;
    Acceleration * Weight = Force;
    Force * Length = Energy;
    Length * Force = Energy;
    Power * Time = Energy;
    Time * Power = Energy;
    Energy * Time = Action;
    Time * Energy = Action;
    Pressure * Time = DynamicViscosity;
    Time * Pressure = DynamicViscosity;
    Weight * Speed = Momentum;
    Speed * Weight = Momentum;
    Energy / Time = Power;
    Force / Time = Yank;
    Force / Area = Pressure;
    Momentum / Time = Force;

    // Kinematics and geometry
    Length / Time = Speed;
    Speed / Time = Acceleration;
    Length * Length = Area;
    Area * Length = Volume;
    Length * Area = Volume;

    // Electricity
    ElectricCurrent * ElectricResistance = Voltage;
    ElectricResistance * ElectricCurrent = Voltage;
    Voltage * ElectricCurrent = Power;
    ElectricCurrent * Voltage = Power;
    ElectricCurrent * Time = ElectricCharge;
    Time * ElectricCurrent = ElectricCharge;
    Voltage / ElectricCurrent = ElectricResistance;

    // Thermodynamics
    Energy / Temperature = HeatCapacity;
    HeatCapacity / Weight = SpecificHeatCapacity;

    // Chemistry
    AmountOfSubstance / Weight = Molality;
    Weight / AmountOfSubstance = MolarMass;
    AmountOfSubstance / Volume = Molarity;
    Volume / AmountOfSubstance = MolarVolume;

    // Flow
    Weight / Volume = Density;
    Volume / Weight = SpecificVolume;
    Weight / Time = MassFlowRate;
    Volume / Time = VolumetricFlow;
    Density * VolumetricFlow = MassFlowRate;
    VolumetricFlow * Density = MassFlowRate;

    // Intermediate results
    Undefined * Undefined = Undefined;
    Undefined / Undefined = Undefined;
}
