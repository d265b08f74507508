//! Business-week resolution.

use crate::model::work_item::DayIndex;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::Serialize;

/// Monday..Friday.
pub const BUSINESS_DAYS: usize = 5;

const DAY_NAMES: [(&str, &str); BUSINESS_DAYS] = [
    ("Montag", "Mo"),
    ("Dienstag", "Di"),
    ("Mittwoch", "Mi"),
    ("Donnerstag", "Do"),
    ("Freitag", "Fr"),
];

/// Monday of the week that `today` belongs to. Weekends roll forward to the
/// upcoming Monday. `None` only at the edge of chrono's date range.
pub fn anchor_monday(today: NaiveDate) -> Option<NaiveDate> {
    let shift = match today.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        weekday => -i64::from(weekday.num_days_from_monday()),
    };
    today.checked_add_signed(Duration::try_days(shift)?)
}

/// Returns Monday..Friday of the week `week_offset` weeks away from the
/// week anchored at `today`, or `None` when that week leaves chrono's
/// representable range.
pub fn resolve_week_days(today: NaiveDate, week_offset: i32) -> Option<[NaiveDate; BUSINESS_DAYS]> {
    let shift = Duration::try_weeks(i64::from(week_offset))?;
    let monday = anchor_monday(today)?.checked_add_signed(shift)?;
    // Friday is the last day; once it exists the earlier ones do too.
    monday.checked_add_signed(Duration::try_days(BUSINESS_DAYS as i64 - 1)?)?;
    Some(std::array::from_fn(|index| monday + Duration::days(index as i64)))
}

/// Calendar-day equality, ignoring any time component.
pub fn is_current_day(day: &impl Datelike, today: &impl Datelike) -> bool {
    day.year() == today.year() && day.month() == today.month() && day.day() == today.day()
}

/// Wall-clock "today" in UTC. Call at the edge and inject the result.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Week-local index of `date`, if it is one of `week`'s days.
pub fn day_index_of(week: &[NaiveDate], date: NaiveDate) -> Option<DayIndex> {
    week.iter()
        .position(|candidate| *candidate == date)
        .and_then(|index| DayIndex::try_from(index).ok())
}

/// Header data for one visible day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub index: DayIndex,
    pub name: &'static str,
    pub short_name: &'static str,
    pub date: NaiveDate,
    pub is_today: bool,
}

impl WeekDay {
    /// The day's start as a UTC timestamp.
    pub fn midnight_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.date.and_time(NaiveTime::default()))
    }
}

/// Header rows for the week `week_offset` weeks from `today`.
pub fn week_days(today: NaiveDate, week_offset: i32) -> Option<Vec<WeekDay>> {
    let dates = resolve_week_days(today, week_offset)?;
    let days = dates
        .into_iter()
        .zip(DAY_NAMES)
        .zip(0..)
        .map(|((date, (name, short_name)), index)| WeekDay {
            index,
            name,
            short_name,
            date,
            is_today: is_current_day(&date, &today),
        })
        .collect();
    Some(days)
}
