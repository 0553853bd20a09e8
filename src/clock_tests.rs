//! Tests for timestamp formatting

use super::*;
use chrono::Timelike;
use proptest::prelude::*;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_single_digits_are_zero_padded() {
    assert_eq!(format_timestamp(time(9, 5)), "09:05");
}

#[test]
fn test_two_digit_values() {
    assert_eq!(format_timestamp(time(14, 30)), "14:30");
}

#[test]
fn test_midnight_and_last_minute() {
    assert_eq!(format_timestamp(time(0, 0)), "00:00");
    assert_eq!(format_timestamp(time(23, 59)), "23:59");
}

#[test]
fn test_seconds_are_not_shown() {
    let t = NaiveTime::from_hms_opt(7, 8, 59).unwrap();
    assert_eq!(format_timestamp(t), "07:08");
}

#[test]
fn test_system_clock_formats_to_five_chars() {
    let stamp = format_timestamp(SystemClock.now());
    assert_eq!(stamp.len(), 5);
    assert_eq!(&stamp[2..3], ":");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any time of day renders as two-digit hour, colon, two-digit minute
    #[test]
    fn prop_timestamp_is_zero_padded_hour_and_minute(
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let t = NaiveTime::from_hms_opt(hour, minute, second).unwrap();
        let stamp = format_timestamp(t);

        prop_assert_eq!(stamp, format!("{:02}:{:02}", t.hour(), t.minute()));
    }
}
