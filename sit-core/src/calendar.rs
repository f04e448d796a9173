//! Pure calendar helpers shared by every page: week and month grids,
//! date keys and weekday labels. Weeks start on Monday.

use chrono::{Datelike, Duration, NaiveDate};

/// Abbreviated weekday names, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];

/// Generates a vector of `NaiveDate`s, inclusive of the start and end dates.
/// If `start` is after `end`, the resulting vector will be empty.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

/// Returns the 7 days of the Monday-start week containing `reference`, in order.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use sit_core::calendar::week_of;
/// // 2025-08-20 is a Wednesday.
/// let week = week_of(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
///
/// assert_eq!(week.len(), 7);
/// assert_eq!(week[0], NaiveDate::from_ymd_opt(2025, 8, 18).unwrap()); // Monday
/// assert_eq!(week[6], NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()); // Sunday
/// ```
pub fn week_of(reference: NaiveDate) -> Vec<NaiveDate> {
    let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
    dates_in_range(monday, monday + Duration::days(6))
}

/// Returns every day of the month containing `reference`, in order.
///
/// When `reference` falls on the 1st of the month, the 7 days immediately
/// before it are prefixed, so the view reaching a fresh month still shows
/// the week just lived through.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use sit_core::calendar::month_grid;
/// let mid_month = month_grid(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
/// assert_eq!(mid_month.len(), 31);
/// assert_eq!(mid_month[0], NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
///
/// let first_of_month = month_grid(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
/// assert_eq!(first_of_month.len(), 38);
/// assert_eq!(first_of_month[0], NaiveDate::from_ymd_opt(2025, 7, 25).unwrap());
/// ```
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = reference - Duration::days(reference.day0() as i64);
    let mut days = Vec::new();
    if reference.day() == 1 {
        days.extend(dates_in_range(first - Duration::days(7), first - Duration::days(1)));
    }
    let mut current = first;
    while current.month() == reference.month() {
        days.push(current);
        current += Duration::days(1);
    }
    days
}

/// Formats a date as the storage key used by every day-keyed structure.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use sit_core::calendar::date_key;
/// let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
/// assert_eq!(date_key(date), "2025-08-05");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Position of `date` within its Monday-start week: 0 for Monday up to 6 for Sunday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Abbreviated label for the date's weekday (`Seg` for Monday .. `Dom` for Sunday).
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[weekday_index(date)]
}
