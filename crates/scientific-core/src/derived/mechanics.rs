//! Force, energy, power, pressure, momentum and friends

use crate::derivation::{by_dividing, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{
    Acceleration, Action, Area, DynamicViscosity, Energy, Force, Length, Momentum, Power, Pressure, Speed, Time,
    Weight, Yank,
};
use crate::types::{Per, ScientificUnit, ScientificValue, Times};
use crate::units::{AreaUnit, EnergyUnit, ForceUnit, LengthUnit, PowerUnit, PressureUnit, TimeUnit, WeightUnit};

impl ForceUnit {
    /// `F = m × a`
    pub fn force<M, A>(self, mass: &ScientificValue<M>, acceleration: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        A: ScientificUnit<Quantity = Acceleration>,
    {
        by_multiplying(self, mass, acceleration)
    }

    /// `F = p / t`
    pub fn force_from_momentum<P, T>(self, momentum: &ScientificValue<P>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Momentum>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, momentum, duration)
    }

    /// `F = E / d`
    pub fn force_from_energy<E, L>(self, energy: &ScientificValue<E>, distance: &ScientificValue<L>) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        L: ScientificUnit<Quantity = Length>,
    {
        by_dividing(self, energy, distance)
    }

    /// `F = P × A`
    pub fn force_from_pressure<P, A>(self, pressure: &ScientificValue<P>, area: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Pressure>,
        A: ScientificUnit<Quantity = Area>,
    {
        by_multiplying(self, pressure, area)
    }

    /// `F = yank × t`
    pub fn force_from_yank<Y, T>(self, yank: &ScientificValue<Y>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        Y: ScientificUnit<Quantity = Yank>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, yank, duration)
    }
}

impl WeightUnit {
    /// `m = F / a`
    pub fn mass<F, A>(self, force: &ScientificValue<F>, acceleration: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        A: ScientificUnit<Quantity = Acceleration>,
    {
        by_dividing(self, force, acceleration)
    }

    /// `m = p / v`
    pub fn mass_from_momentum<P, V>(self, momentum: &ScientificValue<P>, speed: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Momentum>,
        V: ScientificUnit<Quantity = Speed>,
    {
        by_dividing(self, momentum, speed)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Acceleration>,
{
    /// `a = F / m`
    pub fn acceleration_from_force<F, M>(self, force: &ScientificValue<F>, mass: &ScientificValue<M>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_dividing(self, force, mass)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Speed>,
{
    /// `v = p / m`
    pub fn speed_from_momentum<P, M>(self, momentum: &ScientificValue<P>, mass: &ScientificValue<M>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Momentum>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_dividing(self, momentum, mass)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Yank>,
{
    /// `yank = F / t`
    pub fn yank<F, T>(self, force: &ScientificValue<F>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, force, duration)
    }
}

impl EnergyUnit {
    /// `E = F × d`
    pub fn energy<F, L>(self, force: &ScientificValue<F>, distance: &ScientificValue<L>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        L: ScientificUnit<Quantity = Length>,
    {
        by_multiplying(self, force, distance)
    }

    /// `E = P × t`
    pub fn energy_from_power<P, T>(self, power: &ScientificValue<P>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Power>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, power, duration)
    }

    /// `E = action / t`
    pub fn energy_from_action<A, T>(self, action: &ScientificValue<A>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = Action>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, action, duration)
    }
}

impl LengthUnit {
    /// `d = E / F`
    pub fn distance_from_energy<E, F>(self, energy: &ScientificValue<E>, force: &ScientificValue<F>) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        F: ScientificUnit<Quantity = Force>,
    {
        by_dividing(self, energy, force)
    }
}

impl PowerUnit {
    /// `P = E / t`
    pub fn power_from_energy<E, T>(self, energy: &ScientificValue<E>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, energy, duration)
    }
}

impl PressureUnit {
    /// `P = F / A`
    pub fn pressure<F, A>(self, force: &ScientificValue<F>, area: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        A: ScientificUnit<Quantity = Area>,
    {
        by_dividing(self, force, area)
    }

    /// `P = μ / t`
    pub fn pressure_from_viscosity<V, T>(self, viscosity: &ScientificValue<V>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = DynamicViscosity>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, viscosity, duration)
    }
}

impl AreaUnit {
    /// `A = F / P`
    pub fn area_from_pressure<F, P>(self, force: &ScientificValue<F>, pressure: &ScientificValue<P>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        P: ScientificUnit<Quantity = Pressure>,
    {
        by_dividing(self, force, pressure)
    }
}

impl TimeUnit {
    /// `t = E / P`
    pub fn duration_from_power<E, P>(self, energy: &ScientificValue<E>, power: &ScientificValue<P>) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        P: ScientificUnit<Quantity = Power>,
    {
        by_dividing(self, energy, power)
    }

    /// `t = action / E`
    pub fn duration_from_action<A, E>(self, action: &ScientificValue<A>, energy: &ScientificValue<E>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = Action>,
        E: ScientificUnit<Quantity = Energy>,
    {
        by_dividing(self, action, energy)
    }

    /// `t = μ / P`
    pub fn duration_from_viscosity<V, P>(self, viscosity: &ScientificValue<V>, pressure: &ScientificValue<P>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = DynamicViscosity>,
        P: ScientificUnit<Quantity = Pressure>,
    {
        by_dividing(self, viscosity, pressure)
    }

    /// `t = F / yank`
    pub fn duration_from_yank<F, Y>(self, force: &ScientificValue<F>, yank: &ScientificValue<Y>) -> Result<ScientificValue<Self>>
    where
        F: ScientificUnit<Quantity = Force>,
        Y: ScientificUnit<Quantity = Yank>,
    {
        by_dividing(self, force, yank)
    }
}

impl<A, B> Times<A, B>
where
    Self: ScientificUnit<Quantity = Action>,
{
    /// `action = E × t`
    pub fn action<E, T>(self, energy: &ScientificValue<E>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        E: ScientificUnit<Quantity = Energy>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, energy, duration)
    }
}

impl<A, B> Times<A, B>
where
    Self: ScientificUnit<Quantity = DynamicViscosity>,
{
    /// `μ = P × t`
    pub fn dynamic_viscosity<P, T>(self, pressure: &ScientificValue<P>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Pressure>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, pressure, duration)
    }
}

impl<A, B> Times<A, B>
where
    Self: ScientificUnit<Quantity = Momentum>,
{
    /// `p = m × v`
    pub fn momentum<M, V>(self, mass: &ScientificValue<M>, speed: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        V: ScientificUnit<Quantity = Speed>,
    {
        by_multiplying(self, mass, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::{
        JOULE_SECOND, KILOGRAM_METER_PER_SECOND, METER_PER_SECOND, METER_PER_SECOND_SQUARED, NEWTON_PER_SECOND,
        PASCAL_SECOND,
    };
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_newtons_second_law_both_ways() {
        let acceleration = METER_PER_SECOND_SQUARED.of(2);
        let force = ForceUnit::Newton.force(&WeightUnit::Kilogram.of(5), &acceleration).unwrap();
        assert_eq!(force.value(), Decimal::from(10));

        let mass = WeightUnit::Kilogram.mass(&force, &acceleration).unwrap();
        assert_eq!(mass.value(), Decimal::from(5));

        let back = METER_PER_SECOND_SQUARED.acceleration_from_force(&force, &mass).unwrap();
        assert_eq!(back, acceleration);
    }

    #[test]
    fn test_work_and_power() {
        let work = EnergyUnit::Joule
            .energy(&ForceUnit::Newton.of(10), &LengthUnit::Meter.of(3))
            .unwrap();
        assert_eq!(work.value(), Decimal::from(30));

        let distance = LengthUnit::Centimeter
            .distance_from_energy(&work, &ForceUnit::Newton.of(10))
            .unwrap();
        assert_eq!(distance.value(), Decimal::from(300));

        let stored = EnergyUnit::KilowattHour
            .energy_from_power(&PowerUnit::Kilowatt.of(2), &TimeUnit::Hour.of(3))
            .unwrap();
        assert_eq!(stored.value(), Decimal::from(6));

        let seconds = TimeUnit::Second
            .duration_from_power(&EnergyUnit::Joule.of(3_600), &PowerUnit::Kilowatt.of(1))
            .unwrap();
        assert_eq!(seconds.value(), Decimal::new(36, 1));

        let power = PowerUnit::Watt
            .power_from_energy(&EnergyUnit::Kilojoule.of(9), &TimeUnit::Minute.of(1))
            .unwrap();
        assert_eq!(power.value(), Decimal::from(150));
    }

    #[test]
    fn test_pressure_relations() {
        let pressure = PressureUnit::Kilopascal
            .pressure(&ForceUnit::Kilonewton.of(5), &AreaUnit::SquareMeter.of(2))
            .unwrap();
        assert_eq!(pressure.value(), Decimal::new(25, 1));

        let force = ForceUnit::Newton
            .force_from_pressure(&pressure, &AreaUnit::SquareMeter.of(2))
            .unwrap();
        assert_eq!(force.value(), Decimal::from(5_000));

        let area = AreaUnit::SquareCentimeter
            .area_from_pressure(&ForceUnit::Newton.of(1), &PressureUnit::Pascal.of(100))
            .unwrap();
        assert_eq!(area.value(), Decimal::from(100));
    }

    #[test]
    fn test_momentum_relations() {
        let speed = METER_PER_SECOND.of(3);
        let mass = WeightUnit::Kilogram.of(2);
        let momentum = KILOGRAM_METER_PER_SECOND.momentum(&mass, &speed).unwrap();
        assert_eq!(momentum.value(), Decimal::from(6));

        assert_eq!(WeightUnit::Gram.mass_from_momentum(&momentum, &speed).unwrap().value(), Decimal::from(2_000));
        assert_eq!(METER_PER_SECOND.speed_from_momentum(&momentum, &mass).unwrap(), speed);

        let force = ForceUnit::Newton
            .force_from_momentum(&momentum, &TimeUnit::Second.of(2))
            .unwrap();
        assert_eq!(force.value(), Decimal::from(3));
    }

    #[test]
    fn test_product_commutes_through_si() {
        let mass = WeightUnit::Kilogram.of(2);
        let speed = METER_PER_SECOND.of(3);
        assert_eq!(mass.times(&speed).unwrap(), speed.times(&mass).unwrap());
    }

    #[test]
    fn test_action_viscosity_and_yank() {
        let action = JOULE_SECOND
            .action(&EnergyUnit::Joule.of(4), &TimeUnit::Millisecond.of(500))
            .unwrap();
        assert_eq!(action.value(), Decimal::from(2));
        assert_eq!(
            EnergyUnit::Joule.energy_from_action(&action, &TimeUnit::Second.of(1)).unwrap().value(),
            Decimal::from(2)
        );
        assert_eq!(
            TimeUnit::Second.duration_from_action(&action, &EnergyUnit::Joule.of(4)).unwrap().value(),
            Decimal::new(5, 1)
        );

        let viscosity = PASCAL_SECOND
            .dynamic_viscosity(&PressureUnit::Pascal.of(3), &TimeUnit::Second.of(2))
            .unwrap();
        assert_eq!(viscosity.value(), Decimal::from(6));
        assert_eq!(
            PressureUnit::Pascal.pressure_from_viscosity(&viscosity, &TimeUnit::Second.of(3)).unwrap().value(),
            Decimal::TWO
        );
        assert_eq!(
            TimeUnit::Second.duration_from_viscosity(&viscosity, &PressureUnit::Pascal.of(6)).unwrap().value(),
            Decimal::ONE
        );

        let yank = NEWTON_PER_SECOND.yank(&ForceUnit::Newton.of(10), &TimeUnit::Second.of(4)).unwrap();
        assert_eq!(yank.value(), Decimal::new(25, 1));
        assert_eq!(
            ForceUnit::Newton.force_from_yank(&yank, &TimeUnit::Second.of(4)).unwrap().value(),
            Decimal::from(10)
        );
        assert_eq!(
            TimeUnit::Second.duration_from_yank(&ForceUnit::Newton.of(10), &yank).unwrap().value(),
            Decimal::from(4)
        );
    }
}
