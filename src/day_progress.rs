use std::fmt::Display;

use chrono::{DateTime, TimeZone, Timelike};

use crate::locations::MINUTES_PER_DAY;
use crate::types::{DayProgressState, TimeFormat, TimeOfDay};

pub const DAY_START_HOUR: u32 = 6;
pub const NIGHT_START_HOUR: u32 = 18;

pub fn time_of_day(hour: u32) -> TimeOfDay {
    if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
        TimeOfDay::Day
    } else {
        TimeOfDay::Night
    }
}

/// Elapsed share of the calendar day, floored to a whole percent. Always
/// within `0..=99`; times past the end of the day wrap into the next one.
pub fn progress_percent(hour: u32, minute: u32) -> u8 {
    let minutes_per_day = u64::from(MINUTES_PER_DAY);
    let elapsed = (u64::from(hour) * 60 + u64::from(minute)) % minutes_per_day;
    (elapsed * 100 / minutes_per_day) as u8
}

pub fn format_time_label<Tz>(now: &DateTime<Tz>, format: TimeFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = match format {
        TimeFormat::TwelveHour => "%-I:%M:%S %p",
        TimeFormat::TwentyFourHour => "%H:%M:%S",
    };
    now.format(pattern).to_string()
}

/// Classifies `now` using its own wall-clock hour and minute, with a
/// 12-hour label.
pub fn classify<Tz>(now: &DateTime<Tz>) -> DayProgressState
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    classify_with(now, TimeFormat::default())
}

pub fn classify_with<Tz>(now: &DateTime<Tz>, format: TimeFormat) -> DayProgressState
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (hour, minute) = (now.hour(), now.minute());
    DayProgressState {
        current_time_label: format_time_label(now, format),
        progress_percent: progress_percent(hour, minute),
        time_of_day: time_of_day(hour),
    }
}
