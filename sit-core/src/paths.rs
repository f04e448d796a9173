use std::path::{Path, PathBuf};

/// Storage key for the notes list.
pub const NOTES_KEY: &str = "notes_data";
/// Storage key for the date-keyed expense records.
pub const EXPENSES_KEY: &str = "expenses_data";
/// Storage key for the date-keyed timesheet entries.
pub const TIMESHEET_KEY: &str = "timesheet_data";

pub fn store_file_name(key: &str) -> String {
    format!("{key}.json")
}

pub fn mirror_file_name(key: &str) -> String {
    format!("{key}_backup.json")
}

/// Durable home of a storage key: `{data_dir}/{key}.json`.
pub fn durable_path(data_dir: &Path, key: &str) -> PathBuf {
    data_dir.join(store_file_name(key))
}

/// Session-scoped mirror of a storage key: `{session_dir}/{key}_backup.json`.
pub fn mirror_path(session_dir: &Path, key: &str) -> PathBuf {
    session_dir.join(mirror_file_name(key))
}
