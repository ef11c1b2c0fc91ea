//! Ohm's law, electric power, charge and conductance

use crate::derivation::{by_dividing, by_inverting, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{
    ElectricCharge, ElectricConductance, ElectricCurrent, ElectricResistance, Power, Time, Voltage,
};
use crate::types::{ScientificUnit, ScientificValue};
use crate::units::{
    ElectricChargeUnit, ElectricConductanceUnit, ElectricCurrentUnit, ElectricResistanceUnit, PowerUnit, TimeUnit,
    VoltageUnit,
};

impl VoltageUnit {
    /// `V = I × R`
    pub fn voltage<I, R>(self, current: &ScientificValue<I>, resistance: &ScientificValue<R>) -> Result<ScientificValue<Self>>
    where
        I: ScientificUnit<Quantity = ElectricCurrent>,
        R: ScientificUnit<Quantity = ElectricResistance>,
    {
        by_multiplying(self, current, resistance)
    }

    /// `V = P / I`
    pub fn voltage_from_power<P, I>(self, power: &ScientificValue<P>, current: &ScientificValue<I>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Power>,
        I: ScientificUnit<Quantity = ElectricCurrent>,
    {
        by_dividing(self, power, current)
    }
}

impl ElectricCurrentUnit {
    /// `I = V / R`
    pub fn current<V, R>(self, voltage: &ScientificValue<V>, resistance: &ScientificValue<R>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Voltage>,
        R: ScientificUnit<Quantity = ElectricResistance>,
    {
        by_dividing(self, voltage, resistance)
    }

    /// `I = P / V`
    pub fn current_from_power<P, V>(self, power: &ScientificValue<P>, voltage: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        P: ScientificUnit<Quantity = Power>,
        V: ScientificUnit<Quantity = Voltage>,
    {
        by_dividing(self, power, voltage)
    }

    /// `I = Q / t`
    pub fn current_from_charge<Q, T>(self, charge: &ScientificValue<Q>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        Q: ScientificUnit<Quantity = ElectricCharge>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_dividing(self, charge, duration)
    }
}

impl ElectricResistanceUnit {
    /// `R = V / I`
    pub fn resistance<V, I>(self, voltage: &ScientificValue<V>, current: &ScientificValue<I>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Voltage>,
        I: ScientificUnit<Quantity = ElectricCurrent>,
    {
        by_dividing(self, voltage, current)
    }

    /// `R = 1 / G`
    pub fn resistance_from_conductance<G>(self, conductance: &ScientificValue<G>) -> Result<ScientificValue<Self>>
    where
        G: ScientificUnit<Quantity = ElectricConductance>,
    {
        by_inverting(self, conductance)
    }
}

impl ElectricConductanceUnit {
    /// `G = 1 / R`
    pub fn conductance<R>(self, resistance: &ScientificValue<R>) -> Result<ScientificValue<Self>>
    where
        R: ScientificUnit<Quantity = ElectricResistance>,
    {
        by_inverting(self, resistance)
    }
}

impl PowerUnit {
    /// `P = V × I`
    pub fn power<V, I>(self, voltage: &ScientificValue<V>, current: &ScientificValue<I>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Voltage>,
        I: ScientificUnit<Quantity = ElectricCurrent>,
    {
        by_multiplying(self, voltage, current)
    }
}

impl ElectricChargeUnit {
    /// `Q = I × t`
    pub fn charge<I, T>(self, current: &ScientificValue<I>, duration: &ScientificValue<T>) -> Result<ScientificValue<Self>>
    where
        I: ScientificUnit<Quantity = ElectricCurrent>,
        T: ScientificUnit<Quantity = Time>,
    {
        by_multiplying(self, current, duration)
    }
}

impl TimeUnit {
    /// `t = Q / I`
    pub fn duration_from_charge<Q, I>(self, charge: &ScientificValue<Q>, current: &ScientificValue<I>) -> Result<ScientificValue<Self>>
    where
        Q: ScientificUnit<Quantity = ElectricCharge>,
        I: ScientificUnit<Quantity = ElectricCurrent>,
    {
        by_dividing(self, charge, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticError, UnitsError};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_ohms_law_every_direction() {
        let current = ElectricCurrentUnit::Ampere.of(2);
        let resistance = ElectricResistanceUnit::Ohm.of(5);

        let voltage = VoltageUnit::Volt.voltage(&current, &resistance).unwrap();
        assert_eq!(voltage.value(), Decimal::from(10));
        assert_eq!(ElectricCurrentUnit::Milliampere.current(&voltage, &resistance).unwrap().value(), Decimal::from(2_000));
        assert_eq!(ElectricResistanceUnit::Ohm.resistance(&voltage, &current).unwrap(), resistance);
    }

    #[test]
    fn test_electric_power() {
        let power = PowerUnit::Watt
            .power(&VoltageUnit::Volt.of(12), &ElectricCurrentUnit::Ampere.of(2))
            .unwrap();
        assert_eq!(power.value(), Decimal::from(24));
        assert_eq!(
            VoltageUnit::Volt.voltage_from_power(&power, &ElectricCurrentUnit::Ampere.of(2)).unwrap().value(),
            Decimal::from(12)
        );
        assert_eq!(
            ElectricCurrentUnit::Ampere.current_from_power(&power, &VoltageUnit::Volt.of(12)).unwrap().value(),
            Decimal::TWO
        );
    }

    #[test]
    fn test_charge() {
        let charge = ElectricChargeUnit::AmpereHour
            .charge(&ElectricCurrentUnit::Ampere.of(2), &TimeUnit::Hour.of(1))
            .unwrap();
        assert_eq!(charge.value(), Decimal::TWO);
        assert_eq!(charge.to_si(), Ok(Decimal::from(7_200)));

        let duration = TimeUnit::Minute
            .duration_from_charge(&charge, &ElectricCurrentUnit::Ampere.of(4))
            .unwrap();
        assert_eq!(duration.value(), Decimal::from(30));

        let current = ElectricCurrentUnit::Ampere
            .current_from_charge(&ElectricChargeUnit::Coulomb.of(10), &TimeUnit::Second.of(4))
            .unwrap();
        assert_eq!(current.value(), Decimal::new(25, 1));
    }

    #[test]
    fn test_conductance_inverts_resistance() {
        let conductance = ElectricConductanceUnit::Siemens
            .conductance(&ElectricResistanceUnit::Ohm.of(8))
            .unwrap();
        assert_eq!(conductance.value(), Decimal::new(125, 3));

        let resistance = ElectricResistanceUnit::Ohm.resistance_from_conductance(&conductance).unwrap();
        assert_eq!(resistance.value(), Decimal::from(8));

        let open_circuit = ElectricConductanceUnit::Siemens.conductance(&ElectricResistanceUnit::Ohm.of(0));
        assert_eq!(
            open_circuit.unwrap_err(),
            UnitsError::Arithmetic(ArithmeticError::DivisionByZero)
        );
    }
}
