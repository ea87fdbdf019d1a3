use crate::sidereal::normalize_degrees;
use crate::zodiac::catalog::{sign_at, Element, Quality, ZodiacSign, SIGN_WIDTH_DEG};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An ecliptic longitude resolved to its zodiac sign.
///
/// Degrees are held at full precision; rounding to two decimals happens
/// only when the position is serialized or displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: &'static ZodiacSign,
    /// Degrees into the sign, in [0, 30).
    pub degree_in_sign: f64,
    /// Ecliptic longitude, in [0, 360).
    pub full_degree: f64,
}

impl SignPosition {
    pub fn sign_name(&self) -> &'static str {
        self.sign.name
    }

    pub fn sign_index(&self) -> usize {
        usize::from(self.sign.index)
    }

    pub fn element(&self) -> Element {
        self.sign.element
    }

    pub fn quality(&self) -> Quality {
        self.sign.quality
    }

    pub fn rounded_degree(&self) -> f64 {
        round_to_hundredths(self.degree_in_sign)
    }

    pub fn rounded_full_degree(&self) -> f64 {
        round_to_hundredths(self.full_degree)
    }
}

impl Serialize for SignPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SignPosition", 5)?;
        state.serialize_field("sign", self.sign.name)?;
        state.serialize_field("degree", &self.rounded_degree())?;
        state.serialize_field("element", &self.sign.element)?;
        state.serialize_field("quality", &self.sign.quality)?;
        state.serialize_field("full_degree", &self.rounded_full_degree())?;
        state.end()
    }
}

/// Resolve an ecliptic longitude to its sign. Any longitude is first
/// reduced to [0, 360).
pub fn map_to_sign(ecliptic_degree: f64) -> SignPosition {
    let ecliptic_degree = normalize_degrees(ecliptic_degree);
    let mut sign_index = (ecliptic_degree / SIGN_WIDTH_DEG).floor() as usize;
    if sign_index >= 12 {
        sign_index = 0;
    }

    SignPosition {
        sign: sign_at(sign_index),
        degree_in_sign: ecliptic_degree % SIGN_WIDTH_DEG,
        full_degree: ecliptic_degree,
    }
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
