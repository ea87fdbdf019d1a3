//! Birth chart calculation: time → sidereal time → Ascendant → houses.

use crate::ascendant::{ascendant_degree, AscendantResult, DEFAULT_OBLIQUITY_DEG};
use crate::error::{ensure_finite, EngineError};
use crate::houses::{equal_houses, HouseCusps};
use crate::sidereal::local_sidereal_time_from_jd;
use crate::time::{to_julian_day, BirthMoment};
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// Observer location in degrees, north and east positive.
///
/// Ranges are not validated; out-of-range values pass through the
/// trigonometry unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Bangkok, used when a birth place is not given.
    pub const BANGKOK: GeoCoordinate = GeoCoordinate::new(13.7563, 100.5018);

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::BANGKOK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Obliquity of the ecliptic, in degrees.
    pub obliquity_deg: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            obliquity_deg: DEFAULT_OBLIQUITY_DEG,
        }
    }
}

/// Ascendant and Equal House cusps derived from the same Ascendant value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    pub ascendant: AscendantResult,
    pub houses: HouseCusps,
}

/// Stateless chart calculator. Cheap to clone and safe to share.
#[derive(Debug, Clone, Default)]
pub struct HoroscopeCalculator {
    settings: EngineSettings,
}

impl HoroscopeCalculator {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Rising sign for a birth moment and place.
    pub fn calculate_ascendant(
        &self,
        moment: &BirthMoment,
        location: GeoCoordinate,
    ) -> Result<AscendantResult, EngineError> {
        self.solve(moment, location).map_err(|e| {
            error!(
                "Ascendant calculation failed for {:?} at ({}, {}): {}",
                moment, location.latitude, location.longitude, e
            );
            e
        })
    }

    /// The twelve Equal House cusps for a birth moment and place.
    pub fn calculate_house_cusps(
        &self,
        moment: &BirthMoment,
        location: GeoCoordinate,
    ) -> Result<HouseCusps, EngineError> {
        let ascendant = self.calculate_ascendant(moment, location)?;
        Ok(equal_houses(ascendant.full_degree()))
    }

    /// Ascendant and houses in one pass.
    pub fn calculate_chart(
        &self,
        moment: &BirthMoment,
        location: GeoCoordinate,
    ) -> Result<BirthChart, EngineError> {
        let ascendant = self.calculate_ascendant(moment, location)?;
        let houses = equal_houses(ascendant.full_degree());
        Ok(BirthChart { ascendant, houses })
    }

    fn solve(
        &self,
        moment: &BirthMoment,
        location: GeoCoordinate,
    ) -> Result<AscendantResult, EngineError> {
        let jd = ensure_finite("julian day", to_julian_day(moment))?;
        let lst = ensure_finite(
            "local sidereal time",
            local_sidereal_time_from_jd(jd, location.longitude),
        )?;
        let degree = ensure_finite(
            "ascendant",
            ascendant_degree(lst, location.latitude, self.settings.obliquity_deg),
        )?;

        let result = AscendantResult::new(degree, jd, lst);
        debug!(
            "jd={:.6} lst={:.6} asc={:.6} ({} {:.2}°)",
            jd,
            lst,
            degree,
            result.sign_name(),
            result.degree_in_sign()
        );
        Ok(result)
    }
}
