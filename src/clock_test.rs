use super::*;
use time::macros::datetime;

#[test]
fn system_clock_renders_zero_padded_hhmm() {
    let stamp = SystemClock.timestamp();
    assert_eq!(stamp.len(), 5, "expected HH:MM, got {stamp:?}");
    assert_eq!(stamp.as_bytes()[2], b':');
    assert!(stamp.chars().enumerate().all(|(i, c)| i == 2 || c.is_ascii_digit()));
}

#[test]
fn format_hhmm_zero_pads_components() {
    assert_eq!(format_hhmm(datetime!(2024-03-05 09:07 UTC)), "09:07");
    assert_eq!(format_hhmm(datetime!(2024-03-05 23:59 UTC)), "23:59");
    assert_eq!(format_hhmm(datetime!(2024-03-05 00:00 UTC)), "00:00");
}

#[test]
fn fixed_clock_returns_the_pinned_string() {
    let clock = test_helpers::FixedClock("10:00");
    assert_eq!(clock.timestamp(), "10:00");
    assert_eq!(clock.timestamp(), "10:00");
}
