//! Static catalog of the twelve tropical zodiac signs.
//!
//! Sign names are the Thai names used as lookup keys by the interpretation
//! store. Elements render in Thai, qualities in English, matching the text
//! stored alongside them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Width of one sign along the ecliptic, in degrees.
pub const SIGN_WIDTH_DEG: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "ไฟ")]
    Fire,
    #[serde(rename = "ดิน")]
    Earth,
    #[serde(rename = "ลม")]
    Air,
    #[serde(rename = "น้ำ")]
    Water,
}

impl Element {
    pub const fn thai_name(self) -> &'static str {
        match self {
            Self::Fire => "ไฟ",
            Self::Earth => "ดิน",
            Self::Air => "ลม",
            Self::Water => "น้ำ",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.thai_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ZodiacSign {
    /// Position in the zodiac, 0 = Aries.
    pub index: u8,
    /// Thai name, also the interpretation lookup key.
    pub name: &'static str,
    pub english_name: &'static str,
    pub element: Element,
    pub quality: Quality,
}

impl ZodiacSign {
    /// Ecliptic longitude where the sign begins.
    pub fn start_degree(&self) -> f64 {
        f64::from(self.index) * SIGN_WIDTH_DEG
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn sign(
    index: u8,
    name: &'static str,
    english_name: &'static str,
    element: Element,
    quality: Quality,
) -> ZodiacSign {
    ZodiacSign {
        index,
        name,
        english_name,
        element,
        quality,
    }
}

pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    sign(0, "เมษ", "Aries", Element::Fire, Quality::Cardinal),
    sign(1, "พฤษภ", "Taurus", Element::Earth, Quality::Fixed),
    sign(2, "เมถุน", "Gemini", Element::Air, Quality::Mutable),
    sign(3, "กรกฎ", "Cancer", Element::Water, Quality::Cardinal),
    sign(4, "สิงห์", "Leo", Element::Fire, Quality::Fixed),
    sign(5, "กันย์", "Virgo", Element::Earth, Quality::Mutable),
    sign(6, "ตุล", "Libra", Element::Air, Quality::Cardinal),
    sign(7, "พิจิก", "Scorpio", Element::Water, Quality::Fixed),
    sign(8, "ธนู", "Sagittarius", Element::Fire, Quality::Mutable),
    sign(9, "มังกร", "Capricorn", Element::Earth, Quality::Cardinal),
    sign(10, "กุมภ์", "Aquarius", Element::Air, Quality::Fixed),
    sign(11, "มีน", "Pisces", Element::Water, Quality::Mutable),
];

// Thai names as-is, English names lowercased.
lazy_static::lazy_static! {
    static ref SIGNS_BY_NAME: HashMap<String, &'static ZodiacSign> = {
        let mut map = HashMap::new();
        for sign in ZODIAC_SIGNS.iter() {
            map.insert(sign.name.to_string(), sign);
            map.insert(sign.english_name.to_lowercase(), sign);
        }
        map
    };
}

/// Sign at a zodiac index; indices wrap modulo 12.
pub fn sign_at(index: usize) -> &'static ZodiacSign {
    &ZODIAC_SIGNS[index % ZODIAC_SIGNS.len()]
}

/// Look up a sign by Thai name or (case-insensitive) English name.
pub fn sign_by_name(name: &str) -> Option<&'static ZodiacSign> {
    let name = name.trim();
    SIGNS_BY_NAME
        .get(name)
        .or_else(|| SIGNS_BY_NAME.get(&name.to_lowercase()))
        .copied()
}
