//! Molality, molar mass, molarity and molar volume

use crate::derivation::{by_dividing, by_inverting, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{AmountOfSubstance, Molality, MolarMass, MolarVolume, Molarity, Volume, Weight};
use crate::types::{Per, ScientificUnit, ScientificValue};
use crate::units::{AmountOfSubstanceUnit, VolumeUnit, WeightUnit};

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Molality>,
{
    /// `b = n / m`
    pub fn molality<A, M>(self, amount: &ScientificValue<A>, mass: &ScientificValue<M>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = AmountOfSubstance>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_dividing(self, amount, mass)
    }

    pub fn molality_from_molar_mass<M>(self, molar_mass: &ScientificValue<M>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = MolarMass>,
    {
        by_inverting(self, molar_mass)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = MolarMass>,
{
    /// `M = m / n`
    pub fn molar_mass<M, A>(self, mass: &ScientificValue<M>, amount: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        A: ScientificUnit<Quantity = AmountOfSubstance>,
    {
        by_dividing(self, mass, amount)
    }

    pub fn molar_mass_from_molality<B>(self, molality: &ScientificValue<B>) -> Result<ScientificValue<Self>>
    where
        B: ScientificUnit<Quantity = Molality>,
    {
        by_inverting(self, molality)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = Molarity>,
{
    /// `c = n / V`
    pub fn molarity<A, V>(self, amount: &ScientificValue<A>, volume: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = AmountOfSubstance>,
        V: ScientificUnit<Quantity = Volume>,
    {
        by_dividing(self, amount, volume)
    }

    pub fn molarity_from_molar_volume<V>(self, molar_volume: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = MolarVolume>,
    {
        by_inverting(self, molar_volume)
    }
}

impl<N, D> Per<N, D>
where
    Self: ScientificUnit<Quantity = MolarVolume>,
{
    /// `Vm = V / n`
    pub fn molar_volume<V, A>(self, volume: &ScientificValue<V>, amount: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Volume>,
        A: ScientificUnit<Quantity = AmountOfSubstance>,
    {
        by_dividing(self, volume, amount)
    }

    pub fn molar_volume_from_molarity<C>(self, molarity: &ScientificValue<C>) -> Result<ScientificValue<Self>>
    where
        C: ScientificUnit<Quantity = Molarity>,
    {
        by_inverting(self, molarity)
    }
}

impl AmountOfSubstanceUnit {
    /// `n = b × m`
    pub fn amount_from_molality<B, M>(self, molality: &ScientificValue<B>, mass: &ScientificValue<M>) -> Result<ScientificValue<Self>>
    where
        B: ScientificUnit<Quantity = Molality>,
        M: ScientificUnit<Quantity = Weight>,
    {
        by_multiplying(self, molality, mass)
    }

    /// `n = m / M`
    pub fn amount_from_molar_mass<M, Mm>(self, mass: &ScientificValue<M>, molar_mass: &ScientificValue<Mm>) -> Result<ScientificValue<Self>>
    where
        M: ScientificUnit<Quantity = Weight>,
        Mm: ScientificUnit<Quantity = MolarMass>,
    {
        by_dividing(self, mass, molar_mass)
    }

    /// `n = c × V`
    pub fn amount_from_molarity<C, V>(self, molarity: &ScientificValue<C>, volume: &ScientificValue<V>) -> Result<ScientificValue<Self>>
    where
        C: ScientificUnit<Quantity = Molarity>,
        V: ScientificUnit<Quantity = Volume>,
    {
        by_multiplying(self, molarity, volume)
    }
}

impl WeightUnit {
    /// `m = n / b`
    pub fn mass_from_molality<A, B>(self, amount: &ScientificValue<A>, molality: &ScientificValue<B>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = AmountOfSubstance>,
        B: ScientificUnit<Quantity = Molality>,
    {
        by_dividing(self, amount, molality)
    }

    /// `m = M × n`
    pub fn mass_from_molar_mass<Mm, A>(self, molar_mass: &ScientificValue<Mm>, amount: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        Mm: ScientificUnit<Quantity = MolarMass>,
        A: ScientificUnit<Quantity = AmountOfSubstance>,
    {
        by_multiplying(self, molar_mass, amount)
    }
}

impl VolumeUnit {
    /// `V = n / c`
    pub fn volume_from_molarity<A, C>(self, amount: &ScientificValue<A>, molarity: &ScientificValue<C>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = AmountOfSubstance>,
        C: ScientificUnit<Quantity = Molarity>,
    {
        by_dividing(self, amount, molarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::{CUBIC_METER_PER_MOLE, GRAM_PER_MOLE, KILOGRAM_PER_MOLE, MOLE_PER_KILOGRAM, MOLE_PER_LITER};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_molar_mass_of_water() {
        let molar_mass = GRAM_PER_MOLE
            .molar_mass(&WeightUnit::Gram.of(36), &AmountOfSubstanceUnit::Mole.of(2))
            .unwrap();
        assert_eq!(molar_mass.value(), Decimal::from(18));

        let mass = WeightUnit::Gram
            .mass_from_molar_mass(&molar_mass, &AmountOfSubstanceUnit::Mole.of(3))
            .unwrap();
        assert_eq!(mass.value(), Decimal::from(54));

        let amount = AmountOfSubstanceUnit::Millimole
            .amount_from_molar_mass(&WeightUnit::Gram.of(9), &molar_mass)
            .unwrap();
        assert_eq!(amount.value(), Decimal::from(500));
    }

    #[test]
    fn test_molality() {
        let molality = MOLE_PER_KILOGRAM
            .molality(&AmountOfSubstanceUnit::Mole.of(6), &WeightUnit::Kilogram.of(3))
            .unwrap();
        assert_eq!(molality.value(), Decimal::TWO);
        assert_eq!(
            AmountOfSubstanceUnit::Mole.amount_from_molality(&molality, &WeightUnit::Kilogram.of(3)).unwrap().value(),
            Decimal::from(6)
        );
        assert_eq!(
            WeightUnit::Kilogram.mass_from_molality(&AmountOfSubstanceUnit::Mole.of(6), &molality).unwrap().value(),
            Decimal::from(3)
        );

        let inverse = KILOGRAM_PER_MOLE.molar_mass_from_molality(&molality).unwrap();
        assert_eq!(inverse.value(), Decimal::new(5, 1));
        assert_eq!(MOLE_PER_KILOGRAM.molality_from_molar_mass(&inverse).unwrap(), molality);
    }

    #[test]
    fn test_molarity_and_molar_volume() {
        let molarity = MOLE_PER_LITER
            .molarity(&AmountOfSubstanceUnit::Millimole.of(250), &VolumeUnit::Milliliter.of(500))
            .unwrap();
        assert_eq!(molarity.value(), Decimal::new(5, 1));

        assert_eq!(
            AmountOfSubstanceUnit::Mole.amount_from_molarity(&molarity, &VolumeUnit::Liter.of(4)).unwrap().value(),
            Decimal::TWO
        );
        assert_eq!(
            VolumeUnit::Liter.volume_from_molarity(&AmountOfSubstanceUnit::Mole.of(1), &molarity).unwrap().value(),
            Decimal::TWO
        );

        let molar_volume = CUBIC_METER_PER_MOLE.molar_volume_from_molarity(&MOLE_PER_LITER.of(2)).unwrap();
        assert_eq!(molar_volume.value(), Decimal::new(5, 4));
        assert_eq!(MOLE_PER_LITER.molarity_from_molar_volume(&molar_volume).unwrap().value(), Decimal::TWO);

        let direct = CUBIC_METER_PER_MOLE
            .molar_volume(&VolumeUnit::Liter.of(1), &AmountOfSubstanceUnit::Mole.of(2))
            .unwrap();
        assert_eq!(direct, molar_volume);
    }
}
