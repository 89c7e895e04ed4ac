pub mod card;
pub mod clock;
pub mod config;
pub mod day_progress;
pub mod error;
pub mod locations;
pub mod ticker;
pub mod types;

pub use card::{
    SunCard, INITIAL_CITY, SUNRISE_ACTIVITIES, SUNRISE_THEME, SUNSET_ACTIVITIES, SUNSET_THEME,
};

pub use clock::{Clock, SystemClock};

pub use config::{resolve_config_path, CardConfig, CityConfig, CONFIG_PATH_ENV};

pub use day_progress::{
    classify, classify_with, format_time_label, progress_percent, time_of_day, DAY_START_HOUR,
    NIGHT_START_HOUR,
};

pub use error::{Error, Result};

pub use locations::{
    clock_label_to_minutes, day_length_between, default_record, format_day_length,
    minutes_to_clock_label, normalize_location, resolve, shift_clock_label, LocationTable,
    MINUTES_PER_DAY,
};

pub use ticker::{DayProgressTicker, DEFAULT_TICK_PERIOD};

pub use types::{
    ActiveView, Activity, ActivityIcon, DayProgressState, Gradient, LocationRecord, Rgb, Theme,
    TimeFormat, TimeOfDay, Weather,
};
