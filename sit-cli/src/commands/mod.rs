pub mod calendar;
pub mod expenses;
pub mod notes;
pub mod timesheet;

use crate::render::Renderer;
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use sit_core::parse_input::{ParseOptions, parse_date_token, parse_time_token};
use sit_core::{Config, StoreError};
use std::io::{self, Write};
use std::{fs, process::Command};

/// Resolves an optional date argument, defaulting to today.
pub fn resolve_date(token: Option<&str>, config: &Config) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    let Some(token) = token else {
        return Ok(today);
    };
    let formats: Vec<&str> = config
        .input_date_formats
        .iter()
        .map(String::as_str)
        .collect();
    let opts = ParseOptions {
        reference_date: Some(today),
        formats: Some(&formats),
    };
    parse_date_token(token, Some(opts))
        .with_context(|| format!("'{token}' is not a date I can read"))
}

/// Parses a time argument and normalizes it to `HH:MM`.
pub fn resolve_time(token: &str) -> Result<String> {
    let time =
        parse_time_token(token).with_context(|| format!("'{token}' is not a time I can read"))?;
    Ok(time.format("%H:%M").to_string())
}

/// Asks a yes/no question and reads one line from stdin.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Reports a load problem and moves on. An unreadable store behaves as an
/// empty one.
pub fn report_load_warning(renderer: &Renderer, warning: &Option<StoreError>) {
    if let Some(StoreError::Load { path, error }) = warning {
        renderer.print_info(&format!(
            "Could not read {}: {error:#}. Starting empty.",
            path.display()
        ));
    }
}

/// Turns a persistence warning into a command failure. The in-memory data
/// already carries the change, but the user asked for a durable record.
pub fn require_saved(warning: Option<StoreError>) -> Result<()> {
    match warning {
        None => Ok(()),
        Some(StoreError::Save { path, error } | StoreError::Load { path, error }) => {
            Err(error.context(format!("saving {}", path.display())))
        }
    }
}

/// Picks the editor to launch: config first, then $VISUAL, then $EDITOR.
pub fn resolve_editor(config: &Config) -> String {
    config
        .editor
        .clone()
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens a throwaway buffer in the editor, seeded with `initial`, and
/// returns whatever the user left in it.
pub fn edit_buffer(editor: &str, initial: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("sit")
        .suffix(".md")
        .tempfile()?;

    let path = file.path().to_path_buf();
    if !initial.is_empty() {
        fs::write(&path, initial)?;
    }
    let status = Command::new(editor).arg(&path).status()?;
    if !status.success() {
        bail!("editor exited with status {status}");
    }
    Ok(fs::read_to_string(&path)?)
}

/// The first eight characters of an id, enough to address it back.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Splits buffer text into a title line and the remaining content.
pub fn split_note(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((title, content)) => (title.trim(), content.trim()),
        None => (text.trim(), ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn mk_config() -> Config {
        Config {
            data_dir: PathBuf::from("/tmp/sit-test/data"),
            session_dir: PathBuf::from("/tmp/sit-test/session"),
            editor: None,
            date_format: "%d/%m/%Y".to_string(),
            input_date_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
        }
    }

    #[test]
    fn resolve_date_accepts_the_configured_formats() {
        let config = mk_config();
        let expected = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(resolve_date(Some("2025-08-05"), &config).unwrap(), expected);
        assert_eq!(resolve_date(Some("05/08/2025"), &config).unwrap(), expected);
    }

    #[test]
    fn resolve_date_explains_what_it_could_not_read() {
        let config = mk_config();
        let err = resolve_date(Some("someday"), &config).unwrap_err();
        assert!(err.to_string().contains("'someday' is not a date"));
    }

    #[test]
    fn resolve_time_normalizes_to_24h() {
        assert_eq!(resolve_time("5pm").unwrap(), "17:00");
        assert_eq!(resolve_time("8").unwrap(), "08:00");
        assert_eq!(resolve_time("08:00").unwrap(), "08:00");
        assert!(resolve_time("25:61").is_err());
    }

    #[test]
    fn split_note_takes_the_first_line_as_title() {
        assert_eq!(split_note("Groceries\nmilk, eggs\n"), ("Groceries", "milk, eggs"));
        assert_eq!(split_note("just a title"), ("just a title", ""));
    }

    #[test]
    fn short_id_caps_at_eight_characters() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("short"), "short");
    }
}
