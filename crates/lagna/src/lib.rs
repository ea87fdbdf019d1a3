//! Ascendant and Equal House engine for Thai birth charts.
//!
//! ```no_run
//! use lagna::{BirthMoment, GeoCoordinate, HoroscopeCalculator};
//!
//! let moment = BirthMoment::from_ymd_hms(1990, 3, 15, 14, 30, 0)?;
//! let chart = HoroscopeCalculator::default().calculate_chart(&moment, GeoCoordinate::BANGKOK)?;
//! println!("{} {:.2}°", chart.ascendant.sign_name(), chart.ascendant.degree_in_sign());
//! # Ok::<(), lagna::EngineError>(())
//! ```

pub mod ascendant;
pub mod chart;
pub mod error;
pub mod houses;
pub mod interpretation;
pub mod sidereal;
pub mod time;
pub mod zodiac;

pub use ascendant::{ascendant_degree, AscendantResult, DEFAULT_OBLIQUITY_DEG};
pub use chart::{BirthChart, EngineSettings, GeoCoordinate, HoroscopeCalculator};
pub use error::{EngineError, StoreError};
pub use houses::{equal_houses, HouseCusp, HouseCusps};
pub use interpretation::{
    ChartReading, DocumentStore, InterpretationLookup, InterpretationRecord, InterpretationStore,
    NullStore,
};
pub use sidereal::{greenwich_sidereal_time, local_sidereal_time, normalize_degrees};
pub use time::{julian_day, to_julian_day, BirthMoment};
pub use zodiac::{map_to_sign, Element, Quality, SignPosition, ZodiacSign, ZODIAC_SIGNS};
