//! Measurement systems
//!
//! A unit belongs to one or more of three families: metric, UK imperial and
//! US customary. Imperial units (foot, pound) are shared by the UK and the US,
//! while the gallon or the ton differ between them.

use serde::{Deserialize, Serialize};
use std::fmt;

const METRIC: u8 = 0b001;
const UK_IMPERIAL: u8 = 0b010;
const US_CUSTOMARY: u8 = 0b100;

/// The measurement system (or combination of systems) a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementSystem {
    Metric,
    /// Shared by UK imperial and US customary
    Imperial,
    UKImperial,
    USCustomary,
    /// System-neutral units such as the second or the mole
    MetricAndImperial,
    MetricAndUKImperial,
    MetricAndUSCustomary,
}

impl MeasurementSystem {
    const fn families(self) -> u8 {
        match self {
            MeasurementSystem::Metric => METRIC,
            MeasurementSystem::Imperial => UK_IMPERIAL | US_CUSTOMARY,
            MeasurementSystem::UKImperial => UK_IMPERIAL,
            MeasurementSystem::USCustomary => US_CUSTOMARY,
            MeasurementSystem::MetricAndImperial => METRIC | UK_IMPERIAL | US_CUSTOMARY,
            MeasurementSystem::MetricAndUKImperial => METRIC | UK_IMPERIAL,
            MeasurementSystem::MetricAndUSCustomary => METRIC | US_CUSTOMARY,
        }
    }

    const fn from_families(families: u8) -> Option<Self> {
        match families {
            METRIC => Some(MeasurementSystem::Metric),
            0b110 => Some(MeasurementSystem::Imperial),
            UK_IMPERIAL => Some(MeasurementSystem::UKImperial),
            US_CUSTOMARY => Some(MeasurementSystem::USCustomary),
            0b111 => Some(MeasurementSystem::MetricAndImperial),
            0b011 => Some(MeasurementSystem::MetricAndUKImperial),
            0b101 => Some(MeasurementSystem::MetricAndUSCustomary),
            _ => None,
        }
    }

    /// The system shared by both, if any.
    ///
    /// `Metric` and `MetricAndImperial` share `Metric`, `Imperial` and
    /// `UKImperial` share `UKImperial`, `Metric` and `Imperial` share nothing.
    pub const fn common(self, other: Self) -> Option<Self> {
        Self::from_families(self.families() & other.families())
    }

    /// Whether units of both systems may be combined or split together
    pub const fn is_compatible(self, other: Self) -> bool {
        self.families() & other.families() != 0
    }

    pub const fn includes_metric(self) -> bool {
        self.families() & METRIC != 0
    }

    pub const fn includes_uk_imperial(self) -> bool {
        self.families() & UK_IMPERIAL != 0
    }

    pub const fn includes_us_customary(self) -> bool {
        self.families() & US_CUSTOMARY != 0
    }

    pub fn name(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
            MeasurementSystem::UKImperial => "UK imperial",
            MeasurementSystem::USCustomary => "US customary",
            MeasurementSystem::MetricAndImperial => "metric and imperial",
            MeasurementSystem::MetricAndUKImperial => "metric and UK imperial",
            MeasurementSystem::MetricAndUSCustomary => "metric and US customary",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
