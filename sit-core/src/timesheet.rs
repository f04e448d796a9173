//! The work-hours page: one arrival/departure entry per day and the
//! weekly hours chart.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calendar::date_key;
use crate::config::Config;
use crate::parse_input::parse_time_token;
use crate::paths::{TIMESHEET_KEY, durable_path, mirror_path};
use crate::stats::{self, WeekStats};
use crate::store::{Committed, RecordStore, StoreError};

/// Arrival assumed whenever an entry has none.
pub const DEFAULT_ARRIVAL: &str = "08:00";

/// One day of the timesheet. `departure` is the only required field;
/// an entry is never stored without it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    pub departure: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Hours between arrival and departure, clamped at zero.
    ///
    /// A missing or unreadable arrival falls back to [`DEFAULT_ARRIVAL`].
    /// An unreadable departure yields `None` and the day does not chart.
    pub fn worked_hours(&self) -> Option<f64> {
        let arrival = self
            .arrival
            .as_deref()
            .and_then(parse_time_token)
            .unwrap_or_else(default_arrival);
        let departure = parse_time_token(&self.departure)?;
        let minutes = (departure - arrival).num_minutes().max(0);
        Some(minutes as f64 / 60.0)
    }
}

fn default_arrival() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).expect("valid time")
}

/// The work-hours page controller, owning the `timesheet_data` store.
#[derive(Debug)]
pub struct Timesheet {
    store: RecordStore<BTreeMap<String, TimeEntry>>,
}

impl Timesheet {
    /// Opens the timesheet store. A load problem is returned as a warning,
    /// never an error; the page starts empty in that case.
    pub fn open(config: &Config) -> (Self, Option<StoreError>) {
        let (store, warning) = RecordStore::open(
            durable_path(&config.data_dir, TIMESHEET_KEY),
            mirror_path(&config.session_dir, TIMESHEET_KEY),
        );
        (Self { store }, warning)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&TimeEntry> {
        self.store.get(&date_key(date))
    }

    /// Saves the entry for `date`, replacing any previous one.
    ///
    /// A departure is required; a blank or missing arrival is stored as
    /// [`DEFAULT_ARRIVAL`], matching what the entry form shows.
    pub fn save_day(
        &mut self,
        date: NaiveDate,
        arrival: Option<&str>,
        departure: &str,
        notes: Option<&str>,
    ) -> Result<Committed<TimeEntry>> {
        let departure = departure.trim();
        if departure.is_empty() {
            bail!("a departure time is required");
        }
        let arrival = match arrival.map(str::trim) {
            None | Some("") => DEFAULT_ARRIVAL,
            Some(arrival) => arrival,
        };
        let entry = TimeEntry {
            arrival: Some(arrival.to_string()),
            departure: departure.to_string(),
            notes: notes
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
        };
        let committed = self.store.put(date_key(date), entry.clone());
        Ok(Committed {
            value: entry,
            warning: committed.warning,
        })
    }

    /// The hours chart for the week containing `reference`.
    pub fn week_stats(&self, reference: NaiveDate) -> WeekStats {
        stats::timesheet_week(self.store.data(), reference)
    }
}
