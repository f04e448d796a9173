//! Weekly aggregation behind the chart views.
//!
//! Both pages chart the same shape: one bar per charted day of the
//! Monday-start week, labelled `Seg` through `Dom`, with a stable color
//! slot per weekday and a weekly total.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::calendar::{date_key, week_of, weekday_index, weekday_label};
use crate::expenses::DayExpenses;
use crate::timesheet::TimeEntry;

/// One charted day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStat {
    pub label: &'static str,
    pub value: f64,
    /// Weekday position 0-6. The same weekday keeps the same color in every chart.
    pub color_index: usize,
}

/// A week's chart series (Monday first) plus the weekly total.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekStats {
    pub series: Vec<DayStat>,
    pub total: f64,
}

/// Sums each day's expenses for the week containing `reference`.
///
/// Days without expenses are omitted. Day values are rounded to 2 decimals
/// for display; the weekly total accumulates the raw day sums.
pub fn expense_week(data: &BTreeMap<String, DayExpenses>, reference: NaiveDate) -> WeekStats {
    let mut series = Vec::new();
    let mut total = 0.0;
    for date in week_of(reference) {
        let day = match data.get(&date_key(date)) {
            Some(day) if !day.expenses.is_empty() => day,
            _ => continue,
        };
        let day_total = day.total();
        series.push(DayStat {
            label: weekday_label(date),
            value: round2(day_total),
            color_index: weekday_index(date),
        });
        total += day_total;
    }
    WeekStats { series, total }
}

/// Worked hours for each day of the week containing `reference` whose entry
/// has a readable departure. The weekly total sums the rounded day figures,
/// so it always matches the bars on screen.
pub fn timesheet_week(data: &BTreeMap<String, TimeEntry>, reference: NaiveDate) -> WeekStats {
    let mut series = Vec::new();
    let mut total = 0.0;
    for date in week_of(reference) {
        let hours = match data.get(&date_key(date)).and_then(TimeEntry::worked_hours) {
            Some(hours) => round2(hours),
            None => continue,
        };
        series.push(DayStat {
            label: weekday_label(date),
            value: hours,
            color_index: weekday_index(date),
        });
        total += hours;
    }
    WeekStats { series, total }
}

/// Round to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::Expense;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn expense_day(amounts: &[&str]) -> DayExpenses {
        DayExpenses {
            expenses: amounts
                .iter()
                .enumerate()
                .map(|(i, amount)| Expense {
                    id: format!("e{i}"),
                    amount: amount.to_string(),
                    description: String::new(),
                })
                .collect(),
            notes: None,
        }
    }

    fn time_entry(arrival: &str, departure: &str) -> TimeEntry {
        TimeEntry {
            arrival: Some(arrival.to_string()),
            departure: departure.to_string(),
            notes: None,
        }
    }

    #[test]
    fn expense_week_rounds_days_and_keeps_the_raw_total() {
        let mut data = BTreeMap::new();
        data.insert("2025-08-19".to_string(), expense_day(&["12.50", "7.49"]));

        let stats = expense_week(&data, NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
        assert_eq!(stats.series.len(), 1);
        assert_eq!(stats.series[0].label, "Ter");
        assert_eq!(stats.series[0].color_index, 1);
        assert!(close(stats.series[0].value, 19.99));
        assert!(close(stats.total, 19.99));
    }

    #[test]
    fn expense_week_counts_unparsable_amounts_as_zero() {
        let mut data = BTreeMap::new();
        data.insert("2025-08-19".to_string(), expense_day(&["abc", "10"]));

        let stats = expense_week(&data, NaiveDate::from_ymd_opt(2025, 8, 19).unwrap());
        assert!(close(stats.series[0].value, 10.0));
        assert!(close(stats.total, 10.0));
    }

    #[test]
    fn expense_week_omits_empty_days_and_other_weeks() {
        let mut data = BTreeMap::new();
        data.insert("2025-08-19".to_string(), expense_day(&[]));
        data.insert("2025-08-11".to_string(), expense_day(&["5.00"])); // previous week

        let stats = expense_week(&data, NaiveDate::from_ymd_opt(2025, 8, 19).unwrap());
        assert!(stats.series.is_empty());
        assert!(close(stats.total, 0.0));
    }

    #[test]
    fn expense_week_series_runs_monday_first() {
        let mut data = BTreeMap::new();
        data.insert("2025-08-24".to_string(), expense_day(&["1.00"])); // Sunday
        data.insert("2025-08-18".to_string(), expense_day(&["2.00"])); // Monday

        let stats = expense_week(&data, NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
        assert_eq!(stats.series[0].label, "Seg");
        assert_eq!(stats.series[0].color_index, 0);
        assert_eq!(stats.series[1].label, "Dom");
        assert_eq!(stats.series[1].color_index, 6);
    }

    #[test]
    fn timesheet_week_totals_the_rounded_day_figures() {
        let mut data = BTreeMap::new();
        data.insert("2025-08-19".to_string(), time_entry("08:00", "17:30"));
        data.insert("2025-08-20".to_string(), time_entry("09:00", "12:20"));

        let stats = timesheet_week(&data, NaiveDate::from_ymd_opt(2025, 8, 19).unwrap());
        assert_eq!(stats.series.len(), 2);
        assert!(close(stats.series[0].value, 9.5));
        assert!(close(stats.series[1].value, 3.33));
        assert!(close(stats.total, 12.83));
    }

    #[test]
    fn timesheet_week_clamps_negative_spans_and_skips_unreadable_ones() {
        let mut data = BTreeMap::new();
        data.insert("2025-08-19".to_string(), time_entry("08:00", "07:00"));
        data.insert("2025-08-20".to_string(), time_entry("08:00", "late"));

        let stats = timesheet_week(&data, NaiveDate::from_ymd_opt(2025, 8, 19).unwrap());
        assert_eq!(stats.series.len(), 1);
        assert_eq!(stats.series[0].label, "Ter");
        assert!(close(stats.series[0].value, 0.0));
        assert!(close(stats.total, 0.0));
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert!(close(round2(3.333333), 3.33));
        assert!(close(round2(3.336), 3.34));
        assert!(close(round2(9.5), 9.5));
    }
}
