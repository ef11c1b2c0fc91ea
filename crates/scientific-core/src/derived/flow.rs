//! Density, specific volume and flow rates

use crate::derivation::{by_dividing, by_inverting, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{Density, MassFlowRate, SpecificVolume, Time, Volume, VolumetricFlow, Weight};
use crate::types::{Per, ScientificUnit, ScientificValue};
use crate::units::{TimeUnit, VolumeUnit, WeightUnit};

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Density>,
{
    /// `ρ = m / V`
    pub fn density<M, V>(self, mass: &ScientificValue<M>, volume: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        V: ScientificUnit<Quantity = Volume>,
    {
        by_dividing(self, mass, volume)
    }

    pub fn density_from_specific_volume<S>(self, specific_volume: &ScientificValue<S>) -> Result<ScientificValue<Self>>
    where
        S: ScientificUnit<Quantity = SpecificVolume>,
    {
        by_inverting(self, specific_volume)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = SpecificVolume>,
{
    /// `v = V / m`
    pub fn specific_volume<V, M>(self, volume: &ScientificValue<V>, mass: &ScientificValue<M>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Volume>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_dividing(self, volume, mass)
    }

    pub fn specific_volume_from_density<R>(self, density: &ScientificValue<R>) -> Result<ScientificValue<Self>>
    where
        R: ScientificUnit<Quantity = Density>,
    {
        by_inverting(self, density)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = MassFlowRate>,
{
    /// `ṁ = m / t`
    pub fn mass_flow_rate<M, T>(self, mass: &ScientificValue<M>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, mass, duration)
    }

    /// `ṁ = ρ × Q`
    pub fn mass_flow_rate_from_density<R, Q>(self, density: &ScientificValue<R>, flow: &ScientificValue<Q>) -> Result<ScientificValue<Self>>
    where
        R: ScientificUnit<Quantity = Density>,
        Q: ScientificUnit<Quantity = VolumetricFlow>,
    {
        by_multiplying(self, density, flow)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = VolumetricFlow>,
{
    /// `Q = V / t`
    pub fn volumetric_flow<V, T>(self, volume: &ScientificValue<V>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Volume>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, volume, duration)
    }
}

impl WeightUnit {
    /// `m = ρ × V`
    pub fn mass_from_density<R, V>(self, density: &ScientificValue<R>, volume: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        R: ScientificUnit<Quantity = Density>,
        V: ScientificUnit<Quantity = Volume>,
    {
        by_multiplying(self, density, volume)
    }

    /// `m = ṁ × t`
    pub fn mass_from_flow_rate<F, T>(self, rate: &ScientificValue<F>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = MassFlowRate>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, rate, duration)
    }
}

impl VolumeUnit {
    /// `V = m / ρ`
    pub fn volume_from_density<M, R>(self, mass: &ScientificValue<M>, density: &ScientificValue<R>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        R: ScientificUnit<Quantity = Density>,
    {
        by_dividing(self, mass, density)
    }

    /// `V = Q × t`
    pub fn volume_from_flow<Q, T>(self, flow: &ScientificValue<Q>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        Q: ScientificUnit<Quantity = VolumetricFlow>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, flow, duration)
    }
}

impl TimeUnit {
    /// `t = m / ṁ`
    pub fn duration_from_mass_flow<M, F>(self, mass: &ScientificValue<M>, rate: &ScientificValue<F>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        F: ScientificUnit<Quantity = MassFlowRate>,
    {
        by_dividing(self, mass, rate)
    }

    /// `t = V / Q`
    pub fn duration_from_volumetric_flow<V, Q>(self, volume: &ScientificValue<V>, flow: &ScientificValue<Q>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Volume>,
        Q: ScientificUnit<Quantity = VolumetricFlow>,
    {
        by_dividing(self, volume, flow)
    }
}
