use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};

use crate::error::{Error, Result};
use crate::types::{LocationRecord, Weather};

pub const MINUTES_PER_DAY: u32 = 1440;

const CLOCK_LABEL_FORMAT: &str = "%I:%M %p";
const LIGHT_OFFSET_MINUTES: i32 = 60;
const DEFAULT_MOON_PHASE: &str = "Waxing Crescent";

// name, sunrise, sunset, day length, lat, lng, weather, temperature
#[rustfmt::skip]
const BUILTIN_CITIES: [(&str, &str, &str, &str, f64, f64, Weather, i32); 5] = [
    ("new york", "06:32 AM", "07:45 PM", "13h 13m",  40.7128,  -74.006,   Weather::Clear,  72),
    ("london",   "05:58 AM", "08:12 PM", "14h 14m",  51.5074,  -0.1278,   Weather::Cloudy, 65),
    ("tokyo",    "05:12 AM", "06:32 PM", "13h 20m",  35.6762,  139.6503,  Weather::Rainy,  68),
    ("sydney",   "06:45 AM", "05:23 PM", "10h 38m", -33.8688,  151.2093,  Weather::Clear,  59),
    ("paris",    "06:22 AM", "08:45 PM", "14h 23m",  48.8566,  2.3522,    Weather::Cloudy, 70),
];

static BUILTIN: LazyLock<LocationTable> = LazyLock::new(LocationTable::builtin);

pub fn normalize_location(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn default_record() -> LocationRecord {
    LocationRecord {
        sunrise: "06:30 AM".to_string(),
        sunset: "07:30 PM".to_string(),
        day_length: "13h 00m".to_string(),
        lat: 0.0,
        lng: 0.0,
        weather: Weather::Clear,
        temperature: 70,
        moon_phase: DEFAULT_MOON_PHASE.to_string(),
    }
}

/// Resolves against the built-in table. See [`LocationTable::resolve`].
pub fn resolve(input: &str) -> &'static LocationRecord {
    BUILTIN.resolve(input)
}

pub fn clock_label_to_minutes(label: &str) -> Result<u32> {
    let time = NaiveTime::parse_from_str(label.trim(), CLOCK_LABEL_FORMAT)
        .map_err(|_| Error::InvalidTime(label.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

pub fn minutes_to_clock_label(total_minutes: u32) -> String {
    let total_minutes = total_minutes % MINUTES_PER_DAY;
    let (hour, minute) = (total_minutes / 60, total_minutes % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", hour12, minute, suffix)
}

/// Moves a clock label by `delta_minutes`, wrapping across midnight.
pub fn shift_clock_label(label: &str, delta_minutes: i32) -> Result<String> {
    let minutes = clock_label_to_minutes(label)? as i32;
    let shifted = (minutes + delta_minutes).rem_euclid(MINUTES_PER_DAY as i32);
    Ok(minutes_to_clock_label(shifted as u32))
}

pub fn format_day_length(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

pub fn day_length_between(sunrise: &str, sunset: &str) -> Result<String> {
    let rise = clock_label_to_minutes(sunrise)? as i32;
    let set = clock_label_to_minutes(sunset)? as i32;
    let length = (set - rise).rem_euclid(MINUTES_PER_DAY as i32);
    Ok(format_day_length(length as u32))
}

impl LocationRecord {
    pub fn first_light(&self) -> Result<String> {
        shift_clock_label(&self.sunrise, -LIGHT_OFFSET_MINUTES)
    }

    pub fn last_light(&self) -> Result<String> {
        shift_clock_label(&self.sunset, LIGHT_OFFSET_MINUTES)
    }
}

/// Fixed lookup of city records keyed by normalized name.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTable {
    records: HashMap<String, LocationRecord>,
    default: LocationRecord,
}

impl LocationTable {
    pub fn builtin() -> Self {
        let records = BUILTIN_CITIES
            .iter()
            .map(|&(name, sunrise, sunset, day_length, lat, lng, weather, temperature)| {
                let record = LocationRecord {
                    sunrise: sunrise.to_string(),
                    sunset: sunset.to_string(),
                    day_length: day_length.to_string(),
                    lat,
                    lng,
                    weather,
                    temperature,
                    moon_phase: DEFAULT_MOON_PHASE.to_string(),
                };
                (name.to_string(), record)
            })
            .collect();

        Self {
            records,
            default: default_record(),
        }
    }

    /// Returns the record for `input`, or the default record when the
    /// normalized name is unknown.
    pub fn resolve(&self, input: &str) -> &LocationRecord {
        let key = normalize_location(input);
        match self.records.get(&key) {
            Some(record) => record,
            None => {
                log::debug!("unknown location {:?}, using default record", key);
                &self.default
            }
        }
    }

    pub fn get(&self, input: &str) -> Option<&LocationRecord> {
        self.records.get(&normalize_location(input))
    }

    pub fn contains(&self, input: &str) -> bool {
        self.get(input).is_some()
    }

    pub fn insert(&mut self, name: &str, record: LocationRecord) -> Result<()> {
        let key = normalize_location(name);
        if key.is_empty() {
            return Err(Error::EmptyLocationName);
        }
        if self.records.contains_key(&key) {
            return Err(Error::DuplicateLocation(key));
        }
        self.records.insert(key, record);
        Ok(())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn default_record(&self) -> &LocationRecord {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::builtin()
    }
}
