use lagna::{EngineSettings, GeoCoordinate, DEFAULT_OBLIQUITY_DEG};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides `store_path` from the config file.
pub const STORE_PATH_ENV: &str = "LAGNA_STORE_PATH";

const CONFIG_PATHS: [&str; 2] = ["configs/lagna.toml", "../../configs/lagna.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct LagnaSettings {
    pub obliquity_deg: f64,
    pub lookup_timeout: Duration,
    /// JSON export of the interpretation collections. None runs offline.
    pub store_path: Option<PathBuf>,
    pub default_location: GeoCoordinate,
}

impl Default for LagnaSettings {
    fn default() -> Self {
        Self::from(LagnaToml::default())
    }
}

impl LagnaSettings {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            obliquity_deg: self.obliquity_deg,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct LagnaToml {
    obliquity_deg: f64,
    lookup_timeout_ms: u64,
    store_path: Option<PathBuf>,
    default_location: LocationToml,
}

impl Default for LagnaToml {
    fn default() -> Self {
        Self {
            obliquity_deg: DEFAULT_OBLIQUITY_DEG,
            lookup_timeout_ms: default_lookup_timeout_ms(),
            store_path: None,
            default_location: LocationToml::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    #[serde(default = "default_latitude")]
    latitude: f64,
    #[serde(default = "default_longitude")]
    longitude: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}

fn default_latitude() -> f64 {
    GeoCoordinate::BANGKOK.latitude
}

fn default_longitude() -> f64 {
    GeoCoordinate::BANGKOK.longitude
}

impl From<LagnaToml> for LagnaSettings {
    fn from(cfg: LagnaToml) -> Self {
        Self {
            obliquity_deg: cfg.obliquity_deg,
            lookup_timeout: Duration::from_millis(cfg.lookup_timeout_ms),
            store_path: cfg.store_path,
            default_location: GeoCoordinate::new(
                cfg.default_location.latitude,
                cfg.default_location.longitude,
            ),
        }
    }
}

/// Try the usual relative locations of `configs/lagna.toml`.
pub fn read_config_text() -> Option<(PathBuf, String)> {
    CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

pub fn parse_settings(text: &str) -> anyhow::Result<LagnaSettings> {
    let cfg: LagnaToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse lagna.toml: {e}"))?;
    let settings = LagnaSettings::from(cfg);
    validate(&settings)?;
    Ok(settings)
}

/// Load settings from disk, falling back to defaults when no file exists,
/// then apply the `LAGNA_STORE_PATH` override.
pub fn load_settings() -> anyhow::Result<LagnaSettings> {
    let mut settings = match read_config_text() {
        Some((path, text)) => {
            log::info!("Loading settings from {}", path.display());
            parse_settings(&text)?
        }
        None => {
            log::info!("No lagna.toml found in {:?}, using defaults", CONFIG_PATHS);
            LagnaSettings::default()
        }
    };
    apply_store_override(&mut settings, env::var_os(STORE_PATH_ENV).map(PathBuf::from));
    Ok(settings)
}

fn apply_store_override(settings: &mut LagnaSettings, store_path: Option<PathBuf>) {
    if let Some(path) = store_path.filter(|p| !p.as_os_str().is_empty()) {
        log::info!("{} overrides store path: {}", STORE_PATH_ENV, path.display());
        settings.store_path = Some(path);
    }
}

fn validate(settings: &LagnaSettings) -> anyhow::Result<()> {
    if !settings.obliquity_deg.is_finite() {
        anyhow::bail!("obliquity_deg must be finite, got {}", settings.obliquity_deg);
    }
    if settings.lookup_timeout.is_zero() {
        anyhow::bail!("lookup_timeout_ms must be greater than zero");
    }
    let GeoCoordinate {
        latitude,
        longitude,
    } = settings.default_location;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        anyhow::bail!(
            "default_location out of range: latitude {latitude}, longitude {longitude}"
        );
    }
    Ok(())
}
