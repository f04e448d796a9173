use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};

use crate::keywords::{Keyword, Keywords};

/// Default accepted input date formats (parsing only).
const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Parses a string token into a concrete calendar date (`NaiveDate`).
///
/// This function understands several formats, processed in the following order:
/// 1.  **Relative Keywords**: `today`, `yesterday`, `tomorrow`, and any user-defined
///     synonyms (case-insensitive). These are resolved relative to `reference_date`.
/// 2.  **Weekday Keywords**: `monday` through `sunday`, resolved **within the
///     Monday-start week containing `reference_date`**. Picking `friday` while the
///     view sits on a Wednesday selects that same week's Friday, exactly like
///     picking the day from the displayed week.
/// 3.  **Formatted Dates**: Any format string provided in the `formats` slice,
///     such as `"%Y-%m-%d"` or `"%d/%m/%Y"`.
///
/// # Arguments
///
/// * `s` - The string slice to parse.
/// * `options` - An optional [`ParseOptions`] struct to customize parsing behavior.
///
/// # Returns
///
/// `Some(NaiveDate)` if parsing is successful, `None` otherwise.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use sit_core::parse_input::{parse_date_token, ParseOptions};
/// let opts = ParseOptions {
///     reference_date: Some(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()), // a Wednesday
///     formats: Some(&["%Y-%m-%d", "%d/%m/%Y"]),
/// };
///
/// // Using a keyword
/// let yesterday = parse_date_token("yesterday", Some(opts)).unwrap();
/// assert_eq!(yesterday, NaiveDate::from_ymd_opt(2025, 8, 19).unwrap());
///
/// // A weekday resolves inside the same week as the reference
/// let friday = parse_date_token("friday", Some(opts)).unwrap();
/// assert_eq!(friday, NaiveDate::from_ymd_opt(2025, 8, 22).unwrap());
///
/// // Using a formatted string
/// let specific = parse_date_token("05/08/2025", Some(opts)).unwrap();
/// assert_eq!(specific, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
/// ```
pub fn parse_date_token(s: &str, options: Option<ParseOptions>) -> Option<NaiveDate> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);
    let s = s.trim();

    if Keywords::matches(Keyword::Today, s) {
        return Some(reference_date);
    }
    if Keywords::matches(Keyword::Yesterday, s) {
        return Some(reference_date - Duration::days(1));
    }
    if Keywords::matches(Keyword::Tomorrow, s) {
        return Some(reference_date + Duration::days(1));
    }

    let day_keyword = [
        (Keyword::Monday, Weekday::Mon),
        (Keyword::Tuesday, Weekday::Tue),
        (Keyword::Wednesday, Weekday::Wed),
        (Keyword::Thursday, Weekday::Thu),
        (Keyword::Friday, Weekday::Fri),
        (Keyword::Saturday, Weekday::Sat),
        (Keyword::Sunday, Weekday::Sun),
    ]
    .iter()
    .find(|(keyword, _)| Keywords::matches(*keyword, s));

    if let Some((_, weekday)) = day_keyword {
        let monday =
            reference_date - Duration::days(reference_date.weekday().num_days_from_monday() as i64);
        return Some(monday + Duration::days(weekday.num_days_from_monday() as i64));
    }

    // Fallback to formatted dates
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .next()
}

/// Parses a string token into a specific time of day (`NaiveTime`).
///
/// This function is case-insensitive and understands several formats, processed in order:
/// 1.  **12-hour Format**: A time ending in `am` or `pm`, with optional minutes.
///     Examples: "6am", "6 pm", "12:30pm".
/// 2.  **24-hour Format (HH:MM)**: e.g., "14:30", "08:00".
/// 3.  **24-hour Format (Hour only)**: A single integer from 0-23. e.g., "8", "17".
///
/// # Examples
///
/// ```
/// # use chrono::NaiveTime;
/// # use sit_core::parse_input::parse_time_token;
/// let half_past_five = parse_time_token("5:30 pm").unwrap();
/// assert_eq!(half_past_five, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
///
/// let office_start = parse_time_token("08:00").unwrap();
/// assert_eq!(office_start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
///
/// let three_oclock = parse_time_token("15").unwrap();
/// assert_eq!(three_oclock, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
/// ```
pub fn parse_time_token(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    let lower_s = s.to_ascii_lowercase();
    if lower_s.ends_with("am") || lower_s.ends_with("pm") {
        let (core_str, suffix) = s.split_at(s.len() - 2);
        let is_pm = suffix.to_ascii_lowercase() == "pm";
        let core = core_str.trim();

        let parts = if let Some(colon) = core.find(':') {
            let (h_str, m_str) = core.split_at(colon);
            let m_str = &m_str[1..];
            if let (Ok(h), Ok(m)) = (h_str.parse::<u32>(), m_str.parse::<u32>()) {
                Some((h, m))
            } else {
                None
            }
        } else if let Ok(h) = core.parse::<u32>() {
            Some((h, 0))
        } else {
            None
        };

        let (h, m) = parts?;
        if h == 0 || h > 12 || m > 59 {
            return None;
        }
        let h24 = match (h, is_pm) {
            (12, false) => 0, // 12am is midnight
            (12, true) => 12, // 12pm is noon
            (_, true) => h + 12,
            (_, false) => h,
        };
        return NaiveTime::from_hms_opt(h24, m, 0);
    }

    // 24h: "HH:MM"
    if let Ok(nt) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(nt);
    }
    // Single hour (24h format implied): "H" or "HH"
    if let Ok(h) = s.parse::<u32>() {
        if h <= 23 {
            return NaiveTime::from_hms_opt(h, 0, 0);
        }
    }
    None
}
