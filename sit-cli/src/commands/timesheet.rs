use super::{report_load_warning, require_saved, resolve_date, resolve_time};
use crate::cli::TimesheetAction;
use crate::render::Renderer;
use anyhow::Result;
use sit_core::calendar::weekday_label;
use sit_core::timesheet::DEFAULT_ARRIVAL;
use sit_core::{Config, Timesheet};

pub fn run(action: Option<TimesheetAction>, config: &Config, renderer: &Renderer) -> Result<()> {
    let (mut timesheet, warning) = Timesheet::open(config);
    report_load_warning(renderer, &warning);
    match action {
        None => week(&timesheet, config, renderer),
        Some(TimesheetAction::View { date }) => view(&timesheet, date.as_deref(), config, renderer),
        Some(TimesheetAction::Save {
            departure,
            arrival,
            on,
            notes,
        }) => save(
            &mut timesheet,
            &departure,
            arrival.as_deref(),
            on.as_deref(),
            notes.as_deref(),
            config,
            renderer,
        ),
    }
}

fn week(timesheet: &Timesheet, config: &Config, renderer: &Renderer) -> Result<()> {
    let today = resolve_date(None, config)?;
    let stats = timesheet.week_stats(today);
    renderer.print_md("# Hours this week\n");
    renderer.print_week_stats(&stats, |value| format!("{value:.2} h"));
    renderer.print_info(&format!("Total: {:.2} h", stats.total));
    Ok(())
}

fn view(
    timesheet: &Timesheet,
    token: Option<&str>,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let date = resolve_date(token, config)?;
    let heading = format!("# {} {}\n", weekday_label(date), renderer.format_date(date));
    match timesheet.day(date) {
        None => {
            renderer.print_md(&heading);
            renderer.print_info("No entry recorded.");
        }
        Some(entry) => {
            let arrival = entry.arrival.as_deref().unwrap_or(DEFAULT_ARRIVAL);
            let mut md = heading;
            md.push_str(&format!("- arrival `{arrival}`\n"));
            md.push_str(&format!("- departure `{}`\n", entry.departure));
            if let Some(hours) = entry.worked_hours() {
                md.push_str(&format!("- worked **{hours:.2} h**\n"));
            }
            if let Some(notes) = &entry.notes {
                md.push_str(&format!("> {notes}\n"));
            }
            renderer.print_md(&md);
        }
    }
    Ok(())
}

fn save(
    timesheet: &mut Timesheet,
    departure: &str,
    arrival: Option<&str>,
    on: Option<&str>,
    notes: Option<&str>,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let date = resolve_date(on, config)?;
    let departure = resolve_time(departure)?;
    let arrival = arrival.map(resolve_time).transpose()?;
    let committed = timesheet.save_day(date, arrival.as_deref(), &departure, notes)?;
    require_saved(committed.warning)?;
    let entry = committed.value;
    let arrival = entry.arrival.as_deref().unwrap_or(DEFAULT_ARRIVAL);
    renderer.print_info(&format!(
        "Saved {} to {} ({:.2} h) on {} {}",
        arrival,
        entry.departure,
        entry.worked_hours().unwrap_or(0.0),
        weekday_label(date),
        renderer.format_date(date)
    ));
    Ok(())
}
