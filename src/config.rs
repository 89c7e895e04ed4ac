use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::locations::{clock_label_to_minutes, day_length_between, LocationTable};
use crate::types::{LocationRecord, TimeFormat, Weather};

pub const CONFIG_PATH_ENV: &str = "SUN_CARD_CONFIG";

/// Resolve the config file path:
/// 1. Explicit path
/// 2. SUN_CARD_CONFIG environment variable
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
}

/// An extra `[[cities]]` entry. `day_length` is derived from sunrise and
/// sunset when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityConfig {
    pub name: String,
    pub sunrise: String,
    pub sunset: String,
    #[serde(default)]
    pub day_length: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    pub weather: Weather,
    pub temperature: i32,
    pub moon_phase: String,
}

impl CityConfig {
    pub fn to_record(&self) -> Result<LocationRecord> {
        clock_label_to_minutes(&self.sunrise)?;
        clock_label_to_minutes(&self.sunset)?;
        let day_length = match &self.day_length {
            Some(day_length) => day_length.clone(),
            None => day_length_between(&self.sunrise, &self.sunset)?,
        };
        Ok(LocationRecord {
            sunrise: self.sunrise.trim().to_string(),
            sunset: self.sunset.trim().to_string(),
            day_length,
            lat: self.lat,
            lng: self.lng,
            weather: self.weather,
            temperature: self.temperature,
            moon_phase: self.moon_phase.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub default_city: String,
    pub tick_interval_ms: u64,
    pub time_format: TimeFormat,
    pub cities: Vec<CityConfig>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            default_city: "New York".to_string(),
            tick_interval_ms: 1000,
            time_format: TimeFormat::TwelveHour,
            cities: Vec::new(),
        }
    }
}

impl CardConfig {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config(
                "tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.default_city.trim().is_empty() {
            return Err(Error::Config("default_city must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Built-in cities plus the configured ones.
    pub fn build_table(&self) -> Result<LocationTable> {
        let mut table = LocationTable::builtin();
        for city in &self.cities {
            table.insert(&city.name, city.to_record()?)?;
        }
        Ok(table)
    }
}
