//! Area and volume

use crate::derivation::{by_dividing, by_multiplying};
use crate::error::Result;
use crate::types::quantity::{Area, Length, Volume};
use crate::types::{ScientificUnit, ScientificValue};
use crate::units::{AreaUnit, LengthUnit, VolumeUnit};

impl AreaUnit {
    /// `A = l × w`
    pub fn area<L, W>(self, length: &ScientificValue<L>, width: &ScientificValue<W>) -> Result<ScientificValue<Self>>
    where
        L: ScientificUnit<Quantity = Length>,
        W: ScientificUnit<Quantity = Length>,
    {
        by_multiplying(self, length, width)
    }

    /// `A = V / h`
    pub fn area_from_volume<V, H>(self, volume: &ScientificValue<V>, height: &ScientificValue<H>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Volume>,
        H: ScientificUnit<Quantity = Length>,
    {
        by_dividing(self, volume, height)
    }
}

impl LengthUnit {
    /// `l = A / w`
    pub fn length_from_area<A, W>(self, area: &ScientificValue<A>, width: &ScientificValue<W>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = Area>,
        W: ScientificUnit<Quantity = Length>,
    {
        by_dividing(self, area, width)
    }

    /// `h = V / A`
    pub fn length_from_volume<V, A>(self, volume: &ScientificValue<V>, area: &ScientificValue<A>) -> Result<ScientificValue<Self>>
    where
        V: ScientificUnit<Quantity = Volume>,
        A: ScientificUnit<Quantity = Area>,
    {
        by_dividing(self, volume, area)
    }
}

impl VolumeUnit {
    /// `V = A × h`
    pub fn volume<A, H>(self, area: &ScientificValue<A>, height: &ScientificValue<H>) -> Result<ScientificValue<Self>>
    where
        A: ScientificUnit<Quantity = Area>,
        H: ScientificUnit<Quantity = Length>,
    {
        by_multiplying(self, area, height)
    }
}
