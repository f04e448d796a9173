pub mod calendar;
pub mod config;
pub mod expenses;
pub mod keywords;
pub mod notes;
pub mod parse_input;
pub mod paths;
pub mod stats;
pub mod store;
pub mod timesheet;

pub use config::Config;
pub use expenses::Expenses;
pub use notes::Notes;
pub use stats::{DayStat, WeekStats};
pub use store::{Committed, RecordStore, StoreError};
pub use timesheet::Timesheet;
