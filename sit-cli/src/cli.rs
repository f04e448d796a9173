use crate::render::ColorMode;
use clap::{Parser, Subcommand};

/// Notes, daily expenses and a work-hours timesheet from the terminal.
///
/// Running `sit` with no arguments shows the home screen. Every record
/// is kept as plain JSON under the data directory, one file per area.
#[derive(Parser, Debug)]
#[command(name = "sit", version, about, long_about = None)]
pub struct Cli {
    /// Print the data directory path and exit.
    #[arg(long, short)]
    pub path: bool,

    /// When to colorize output.
    #[arg(long, value_enum, env = "SIT_COLOR", default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List notes, or manage them with a subcommand.
    Notes {
        #[command(subcommand)]
        action: Option<NotesAction>,
    },
    /// Show this week's expenses, or manage them with a subcommand.
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },
    /// Show this week's worked hours, or manage them with a subcommand.
    Timesheet {
        #[command(subcommand)]
        action: Option<TimesheetAction>,
    },
    /// Show the month around a date.
    Calendar {
        /// Date to center on: `2025-08-20`, `20/08/2025`, `today`, a weekday name...
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotesAction {
    /// Write a new note. With no text, opens your editor.
    Add {
        /// Note text. The first line becomes the title.
        text: Vec<String>,
    },
    /// Edit a note. With no flags, opens your editor on its content.
    Edit {
        /// Note id, or a unique prefix of one.
        id: String,
        /// Replace the title.
        #[arg(long, short)]
        title: Option<String>,
        /// Replace the content.
        #[arg(long, short)]
        content: Option<String>,
    },
    /// Delete a note.
    Delete {
        /// Note id, or a unique prefix of one.
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExpensesAction {
    /// Show one day's expenses in full.
    View {
        /// Date to show: `2025-08-20`, `today`, `tuesday`... Defaults to today.
        date: Option<String>,
    },
    /// Record an expense.
    Add {
        /// Amount spent, e.g. `12.50`.
        amount: String,
        /// What the money went to.
        #[arg(long, short)]
        description: Option<String>,
        /// Date it belongs to. Defaults to today.
        #[arg(long, short)]
        on: Option<String>,
        /// Free-form note for the whole day.
        #[arg(long, short)]
        notes: Option<String>,
    },
    /// Remove an expense from a day.
    Remove {
        /// Expense id, or a unique prefix of one.
        id: String,
        /// Date it was recorded on. Defaults to today.
        #[arg(long, short)]
        on: Option<String>,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TimesheetAction {
    /// Show one day's entry.
    View {
        /// Date to show. Defaults to today.
        date: Option<String>,
    },
    /// Record arrival and departure for a day.
    Save {
        /// Departure time, e.g. `17:30` or `5pm`.
        #[arg(long, short)]
        departure: String,
        /// Arrival time. Defaults to 08:00.
        #[arg(long, short)]
        arrival: Option<String>,
        /// Date the entry belongs to. Defaults to today.
        #[arg(long, short)]
        on: Option<String>,
        /// Free-form note for the day.
        #[arg(long, short)]
        notes: Option<String>,
    },
}
