use chrono::{FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Asia::Tokyo;

use sun_card::day_progress::*;
use sun_card::types::*;

fn utc_at(hour: u32, minute: u32, second: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 21, hour, minute, second).unwrap()
}

// ── Time of day ──

#[test]
fn test_day_hours() {
    for hour in 6..18 {
        assert_eq!(time_of_day(hour), TimeOfDay::Day, "hour={}", hour);
        assert_eq!(classify(&utc_at(hour, 0, 0)).time_of_day, TimeOfDay::Day);
    }
}

#[test]
fn test_night_hours() {
    for hour in (0..6).chain(18..24) {
        assert_eq!(time_of_day(hour), TimeOfDay::Night, "hour={}", hour);
        assert_eq!(classify(&utc_at(hour, 59, 59)).time_of_day, TimeOfDay::Night);
    }
}

#[test]
fn test_boundaries() {
    assert_eq!(classify(&utc_at(5, 59, 59)).time_of_day, TimeOfDay::Night);
    assert_eq!(classify(&utc_at(6, 0, 0)).time_of_day, TimeOfDay::Day);
    assert_eq!(classify(&utc_at(17, 59, 59)).time_of_day, TimeOfDay::Day);
    assert_eq!(classify(&utc_at(18, 0, 0)).time_of_day, TimeOfDay::Night);
}

#[test]
fn test_status_labels() {
    assert_eq!(TimeOfDay::Day.status_label(), "Currently daytime");
    assert_eq!(TimeOfDay::Night.status_label(), "Currently nighttime");
    assert_eq!(TimeOfDay::Day.to_string(), "day");
    assert_eq!(TimeOfDay::Night.to_string(), "night");
}

// ── Progress ──

#[test]
fn test_progress_known_values() {
    assert_eq!(progress_percent(0, 0), 0);
    assert_eq!(progress_percent(0, 14), 0);
    assert_eq!(progress_percent(0, 15), 1);
    assert_eq!(progress_percent(6, 0), 25);
    assert_eq!(progress_percent(12, 0), 50);
    assert_eq!(progress_percent(18, 0), 75);
    assert_eq!(progress_percent(23, 45), 98);
    assert_eq!(progress_percent(23, 59), 99);
}

#[test]
fn test_progress_monotonic_and_in_range() {
    let mut previous = 0;
    for minute_of_day in 0..1440 {
        let percent = progress_percent(minute_of_day / 60, minute_of_day % 60);
        assert!(percent <= 99, "minute_of_day={}", minute_of_day);
        assert!(percent >= previous, "minute_of_day={}", minute_of_day);
        previous = percent;
    }
}

#[test]
fn test_progress_wraps_out_of_day_input() {
    assert_eq!(progress_percent(24, 0), 0);
    assert_eq!(progress_percent(30, 0), 25);
    assert_eq!(progress_percent(0, 2000), 38);
    assert_eq!(progress_percent(u32::MAX / 60 + 1, 0), progress_percent(5, 0));
    assert!(progress_percent(u32::MAX, u32::MAX) <= 99);
}

#[test]
fn test_progress_ignores_seconds() {
    assert_eq!(
        classify(&utc_at(12, 0, 0)).progress_percent,
        classify(&utc_at(12, 0, 59)).progress_percent
    );
}

// ── Zoned timestamps ──

#[test]
fn test_classify_uses_local_wall_clock() {
    // 23:30 UTC is 08:30 the next morning in Tokyo.
    let utc = utc_at(23, 30, 0);
    let tokyo = utc.with_timezone(&Tokyo);
    assert_eq!(tokyo.hour(), 8);

    let utc_state = classify(&utc);
    let tokyo_state = classify(&tokyo);
    assert_eq!(utc_state.time_of_day, TimeOfDay::Night);
    assert_eq!(tokyo_state.time_of_day, TimeOfDay::Day);
    assert_eq!(utc_state.progress_percent, 97);
    assert_eq!(tokyo_state.progress_percent, 35);
}

#[test]
fn test_classify_fixed_offset() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let now = offset.with_ymd_and_hms(2026, 1, 5, 19, 5, 9).unwrap();
    let state = classify(&now);
    assert_eq!(state.time_of_day, TimeOfDay::Night);
    assert_eq!(state.current_time_label, "7:05:09 PM");
}

// ── Labels ──

#[test]
fn test_time_labels() {
    let now = NaiveDate::from_ymd_opt(2026, 3, 21)
        .unwrap()
        .and_hms_opt(7, 5, 9)
        .unwrap()
        .and_utc();
    assert_eq!(format_time_label(&now, TimeFormat::TwelveHour), "7:05:09 AM");
    assert_eq!(format_time_label(&now, TimeFormat::TwentyFourHour), "07:05:09");

    let midnight = utc_at(0, 0, 0);
    assert_eq!(format_time_label(&midnight, TimeFormat::TwelveHour), "12:00:00 AM");
    assert_eq!(
        classify_with(&utc_at(21, 30, 0), TimeFormat::TwentyFourHour).current_time_label,
        "21:30:00"
    );
}

#[test]
fn test_classify_full_state() {
    assert_eq!(
        classify(&utc_at(14, 24, 0)),
        DayProgressState {
            current_time_label: "2:24:00 PM".to_string(),
            progress_percent: 60,
            time_of_day: TimeOfDay::Day,
        }
    );
}
