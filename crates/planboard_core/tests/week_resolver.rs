use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use planboard_core::resolve_week_days;
use planboard_core::schedule::week::{is_current_day, week_days};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn business_week(today: NaiveDate, offset: i32) -> [NaiveDate; 5] {
    resolve_week_days(today, offset).expect("week is in range")
}

#[test]
fn current_week_is_monday_to_friday() {
    for day in 20..=30 {
        let today = date(2026, 1, day);
        let week = business_week(today, 0);
        assert_eq!(week.len(), 5);
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[4].weekday(), Weekday::Fri);
        for pair in week.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }
}

#[test]
fn offsets_shift_by_whole_weeks() {
    let today = date(2026, 1, 28);
    let base = business_week(today, 0);
    for offset in [-52, -3, -1, 1, 2, 10, 53] {
        let shifted = business_week(today, offset);
        for (index, day) in shifted.iter().enumerate() {
            assert_eq!(*day, base[index] + Duration::days(7 * i64::from(offset)));
        }
    }
}

#[test]
fn offsets_beyond_the_calendar_resolve_to_none() {
    let today = date(2026, 1, 28);
    for offset in [20_000_000, -20_000_000, i32::MAX, i32::MIN] {
        assert_eq!(resolve_week_days(today, offset), None);
        assert!(week_days(today, offset).is_none());
    }
    // A century out still resolves to a Monday.
    assert_eq!(business_week(today, 5_200)[0].weekday(), Weekday::Mon);
}

#[test]
fn weekend_shows_the_upcoming_week() {
    let saturday = business_week(date(2026, 1, 31), 0);
    let sunday = business_week(date(2026, 2, 1), 0);
    assert_eq!(saturday[0], date(2026, 2, 2));
    assert_eq!(sunday, saturday);
    let header = week_days(date(2026, 1, 31), 0).expect("week is in range");
    assert!(header.iter().all(|day| !day.is_today));
}

#[test]
fn week_crossing_year_boundary() {
    let week = business_week(date(2025, 12, 31), 0);
    assert_eq!(week[0], date(2025, 12, 29));
    assert_eq!(week[3], date(2026, 1, 1));
}

#[test]
fn is_current_day_compares_calendar_fields_only() {
    let today = date(2026, 1, 28);
    assert!(is_current_day(&today, &today));
    assert!(!is_current_day(&date(2026, 1, 27), &today));
    assert!(!is_current_day(&date(2026, 2, 28), &today));
    assert!(!is_current_day(&date(2025, 1, 28), &today));

    let evening = Utc.with_ymd_and_hms(2026, 1, 28, 23, 59, 59).unwrap();
    assert!(is_current_day(&evening, &today));
}

#[test]
fn header_days_carry_german_labels() {
    let days = week_days(date(2026, 1, 26), 0).expect("week is in range");
    let names: Vec<&str> = days.iter().map(|day| day.short_name).collect();
    assert_eq!(names, vec!["Mo", "Di", "Mi", "Do", "Fr"]);
    assert_eq!(days[4].name, "Freitag");
    assert!(days[0].is_today);
    assert_eq!(
        days[0].midnight_utc(),
        Utc.with_ymd_and_hms(2026, 1, 26, 0, 0, 0).unwrap()
    );
}
