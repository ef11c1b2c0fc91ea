//! Heat capacity
//!
//! The combinators pivot temperatures through their absolute SI values, so
//! these relations expect kelvin-based amounts. A `J/°C` unit still reads
//! as `J/K`, since composites convert with deltas.

use crate::derivation::{by_dividing, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{Energy, HeatCapacity, SpecificHeatCapacity, Temperature, Weight};
use crate::types::{Per, ScientificUnit, ScientificValue};
use crate::units::{EnergyUnit, TemperatureUnit, WeightUnit};

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = HeatCapacity>,
{
    /// `C = E / T`
    pub fn heat_capacity<E, T>(
        self,
        energy: &ScientificValue<E>,
        temperature: &ScientificValue<T>,
    ) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        T: ScientificUnit<Quantity = Temperature>,
    {
        by_dividing(self, energy, temperature)
    }

    /// `C = c × m`
    pub fn heat_capacity_from_specific<S, M>(
        self,
        specific: &ScientificValue<S>,
        mass: &ScientificValue<M>,
    ) -> Result<ScientificValue<Self>>
    where
        S: ScientificUnit<Quantity = SpecificHeatCapacity>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_multiplying(self, specific, mass)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = SpecificHeatCapacity>,
{
    /// `c = C / m`
    pub fn specific_heat_capacity<C, M>(
        self,
        heat_capacity: &ScientificValue<C>,
        mass: &ScientificValue<M>,
    ) -> Result<ScientificValue<Self>>
    where
        C: ScientificUnit<Quantity = HeatCapacity>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_dividing(self, heat_capacity, mass)
    }
}

impl EnergyUnit {
    /// `E = C × T`
    pub fn energy_from_heat_capacity<C, T>(
        self,
        heat_capacity: &ScientificValue<C>,
        temperature: &ScientificValue<T>,
    ) -> Result<ScientificValue<Self>>
    where
        C: ScientificUnit<Quantity = HeatCapacity>,
        T: ScientificUnit<Quantity = Temperature>,
    {
        by_multiplying(self, heat_capacity, temperature)
    }
}

impl TemperatureUnit {
    /// `T = E / C`
    pub fn temperature_from_heat_capacity<E, C>(
        self,
        energy: &ScientificValue<E>,
        heat_capacity: &ScientificValue<C>,
    ) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        C: ScientificUnit<Quantity = HeatCapacity>,
    {
        by_dividing(self, energy, heat_capacity)
    }
}

impl WeightUnit {
    /// `m = C / c`
    pub fn mass_from_specific_heat_capacity<C, S>(
        self,
        heat_capacity: &ScientificValue<C>,
        specific: &ScientificValue<S>,
    ) -> Result<ScientificValue<Self>>
    where
        C: ScientificUnit<Quantity = HeatCapacity>,
        S: ScientificUnit<Quantity = SpecificHeatCapacity>,
    {
        by_dividing(self, heat_capacity, specific)
    }
}
