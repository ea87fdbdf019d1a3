//! Equal House cusps.
//!
//! Each cusp sits a whole multiple of 30° past the Ascendant, so house 1
//! coincides with the Ascendant and the twelve houses tile the ecliptic.

use crate::error::EngineError;
use crate::sidereal::normalize_degrees;
use crate::zodiac::{map_to_sign, SignPosition, SIGN_WIDTH_DEG};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const HOUSE_COUNT: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseCusp {
    /// House number, 1..=12.
    pub number: u8,
    pub position: SignPosition,
}

impl HouseCusp {
    pub fn sign_name(&self) -> &'static str {
        self.position.sign_name()
    }
}

impl Serialize for HouseCusp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.position.serialize(serializer)
    }
}

/// The twelve cusps of a chart, in house order.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseCusps {
    cusps: [HouseCusp; HOUSE_COUNT as usize],
}

impl HouseCusps {
    pub fn get(&self, number: u8) -> Option<&HouseCusp> {
        match number {
            1..=HOUSE_COUNT => Some(&self.cusps[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Like [`HouseCusps::get`], but reports the bad number.
    pub fn house(&self, number: u8) -> Result<&HouseCusp, EngineError> {
        self.get(number).ok_or(EngineError::InvalidHouseNumber(number))
    }

    pub fn first(&self) -> &HouseCusp {
        &self.cusps[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &HouseCusp> {
        self.cusps.iter()
    }
}

impl<'a> IntoIterator for &'a HouseCusps {
    type Item = &'a HouseCusp;
    type IntoIter = std::slice::Iter<'a, HouseCusp>;

    fn into_iter(self) -> Self::IntoIter {
        self.cusps.iter()
    }
}

// Serialized as {"1": {...}, ..., "12": {...}}.
impl Serialize for HouseCusps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cusps.len()))?;
        for cusp in &self.cusps {
            map.serialize_entry(&cusp.number.to_string(), cusp)?;
        }
        map.end()
    }
}

/// Equal House cusps for an Ascendant longitude in [0, 360).
pub fn equal_houses(ascendant_degree: f64) -> HouseCusps {
    let cusps = std::array::from_fn(|i| {
        let number = i as u8 + 1;
        let degree = normalize_degrees(ascendant_degree + f64::from(number - 1) * SIGN_WIDTH_DEG);
        HouseCusp {
            number,
            position: map_to_sign(degree),
        }
    });
    HouseCusps { cusps }
}
