//! Greenwich and local sidereal time, in degrees.

use crate::time::{julian_centuries, to_julian_day, BirthMoment, J2000_JD};

/// Reduce an angle to [0, 360).
///
/// A tiny negative input can round up to exactly 360 after the shift; that
/// case wraps to 0.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Greenwich mean sidereal time for a Julian Day, in [0, 360).
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let gst = 280.46061837 + 360.98564736629 * (jd - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_degrees(gst)
}

/// Local sidereal time for a Julian Day and east-positive longitude.
pub fn local_sidereal_time_from_jd(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_time(jd) + longitude)
}

/// Local sidereal time of a birth moment at an east-positive longitude.
pub fn local_sidereal_time(moment: &BirthMoment, longitude: f64) -> f64 {
    local_sidereal_time_from_jd(to_julian_day(moment), longitude)
}
