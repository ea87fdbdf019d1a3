//! Ascendant from local sidereal time and latitude.
//!
//! Uses the single-term horizon identity
//! `tan(ASC) = cos(LST) / (sin(LST)·cos(φ) + tan(φ)·sin(ε))`.
//! This is a simplification of the full equatorial-to-ecliptic rotation and
//! is only sign-level accurate. Stored interpretation data was produced with
//! exactly this formula, so it must stay as written.

use crate::sidereal::normalize_degrees;
use crate::zodiac::{map_to_sign, SignPosition};
use serde::{Serialize, Serializer};

/// Mean obliquity of the ecliptic used by the solver, in degrees.
pub const DEFAULT_OBLIQUITY_DEG: f64 = 23.44;

/// Denominators smaller than this are treated as singular.
pub const SINGULAR_DENOMINATOR: f64 = 1e-10;

/// Ecliptic longitude of the Ascendant, in [0, 360).
///
/// All angles are in degrees. A singular denominator resolves to 0.
pub fn ascendant_degree(lst: f64, latitude: f64, obliquity: f64) -> f64 {
    let lst_rad = lst.to_radians();
    let lat_rad = latitude.to_radians();
    let obliquity_rad = obliquity.to_radians();

    let numerator = lst_rad.cos();
    let denominator = lst_rad.sin() * lat_rad.cos() + lat_rad.tan() * obliquity_rad.sin();

    if denominator.abs() < SINGULAR_DENOMINATOR {
        return 0.0;
    }

    normalize_degrees(numerator.atan2(denominator).to_degrees())
}

/// The rising sign of a birth chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscendantResult {
    pub position: SignPosition,
    /// Julian Day the Ascendant was computed for.
    pub julian_day: f64,
    /// Local sidereal time used, in degrees.
    pub local_sidereal_time: f64,
}

impl AscendantResult {
    pub fn new(degree: f64, julian_day: f64, local_sidereal_time: f64) -> Self {
        Self {
            position: map_to_sign(degree),
            julian_day,
            local_sidereal_time,
        }
    }

    pub fn sign_name(&self) -> &'static str {
        self.position.sign_name()
    }

    pub fn degree_in_sign(&self) -> f64 {
        self.position.degree_in_sign
    }

    pub fn full_degree(&self) -> f64 {
        self.position.full_degree
    }
}

// Wire shape is the bare sign position.
impl Serialize for AscendantResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.position.serialize(serializer)
    }
}
