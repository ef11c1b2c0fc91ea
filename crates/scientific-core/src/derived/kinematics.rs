//! Speed, acceleration and frequency

use crate::derivation::{by_dividing, by_inverting, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{Acceleration, Frequency, Length, Speed, Time};
use crate::types::{Per, ScientificUnit, ScientificValue};
use crate::units::{FrequencyUnit, LengthUnit, TimeUnit};

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Speed>,
{
    /// `v = d / t`
    pub fn speed<L, T>(self, distance: &ScientificValue<L>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        L: ScientificUnit<Quantity = Length>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, distance, duration)
    }

    /// `v = a × t`
    pub fn speed_from_acceleration<A, T>(
        self,
        acceleration: &ScientificValue<A>,
        duration: &ScientificValue<T>,
    ) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = Acceleration>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, acceleration, duration)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Acceleration>,
{
    /// `a = v / t`
    pub fn acceleration<V, T>(self, speed: &ScientificValue<V>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Speed>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, speed, duration)
    }
}

impl LengthUnit {
    /// `d = v × t`
    pub fn distance<V, T>(self, speed: &ScientificValue<V>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Speed>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, speed, duration)
    }
}

impl TimeUnit {
    /// `t = d / v`
    pub fn duration<L, V>(self, distance: &ScientificValue<L>, speed: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        L: ScientificUnit<Quantity = Length>,
        V: ScientificUnit<Quantity = Speed>,
    {
        by_dividing(self, distance, speed)
    }

    /// `t = v / a`
    pub fn duration_from_acceleration<V, A>(
        self,
        speed: &ScientificValue<V>,
        acceleration: &ScientificValue<A>,
    ) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Speed>,
        A: ScientificUnit<Quantity = Acceleration>,
    {
        by_dividing(self, speed, acceleration)
    }

    /// `T = 1 / f`
    pub fn period<F>(self, frequency: &ScientificValue<F>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Frequency>,
    {
        by_inverting(self, frequency)
    }
}

impl FrequencyUnit {
    /// `f = 1 / T`
    pub fn frequency<T>(self, period: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        T: ScientificUnit<Quantity = Time>,
    {
        by_inverting(self, period)
    }
}
