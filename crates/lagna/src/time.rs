//! Civil birth time to Julian Day conversion.
//!
//! A birth moment without a UTC offset is taken to already be UTC. With an
//! offset, the civil time is shifted to UTC before conversion.

use crate::error::EngineError;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2451545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Civil date-time of a birth plus its optional UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthMoment {
    civil: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl BirthMoment {
    /// Civil time with no offset, treated as UTC.
    pub fn from_naive(civil: NaiveDateTime) -> Self {
        Self { civil, offset: None }
    }

    /// Civil time observed at the given UTC offset.
    pub fn with_offset(civil: NaiveDateTime, offset: FixedOffset) -> Self {
        Self {
            civil,
            offset: Some(offset),
        }
    }

    /// Build from calendar components, treated as UTC.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, EngineError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(Self::from_naive)
            .ok_or(EngineError::InvalidCivilTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })
    }

    /// Reinterpret the same civil reading at a UTC offset.
    pub fn at_offset(self, offset: FixedOffset) -> Self {
        Self::with_offset(self.civil, offset)
    }

    pub fn civil(&self) -> NaiveDateTime {
        self.civil
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// The moment expressed as UTC civil time.
    pub fn to_utc(&self) -> NaiveDateTime {
        match self.offset {
            None => self.civil,
            Some(offset) => {
                self.civil - chrono::Duration::seconds(i64::from(offset.local_minus_utc()))
            }
        }
    }
}

impl From<NaiveDateTime> for BirthMoment {
    fn from(civil: NaiveDateTime) -> Self {
        Self::from_naive(civil)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for BirthMoment {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::with_offset(dt.naive_local(), dt.offset().fix())
    }
}

/// Gregorian calendar components to Julian Day.
///
/// No calendar validation is done here; any component values produce a
/// finite day number.
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let (mut y, mut m) = (f64::from(year), f64::from(month));
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) + b
        - 1524.5;
    let hours = f64::from(hour) + f64::from(minute) / 60.0 + f64::from(second) / 3600.0;
    jd + hours / 24.0
}

/// Julian Day of a birth moment. Sub-second precision is ignored.
pub fn to_julian_day(moment: &BirthMoment) -> f64 {
    let utc = moment.to_utc();
    julian_day(
        utc.year(),
        utc.month(),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
    )
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
