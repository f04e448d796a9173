use super::{confirm, report_load_warning, require_saved, resolve_date, short_id};
use crate::cli::ExpensesAction;
use crate::render::Renderer;
use anyhow::Result;
use sit_core::calendar::weekday_label;
use sit_core::{Config, Expenses};

pub fn run(action: Option<ExpensesAction>, config: &Config, renderer: &Renderer) -> Result<()> {
    let (mut expenses, warning) = Expenses::open(config);
    report_load_warning(renderer, &warning);
    match action {
        None => week(&expenses, config, renderer),
        Some(ExpensesAction::View { date }) => view(&expenses, date.as_deref(), config, renderer),
        Some(ExpensesAction::Add {
            amount,
            description,
            on,
            notes,
        }) => add(
            &mut expenses,
            &amount,
            description.as_deref(),
            on.as_deref(),
            notes.as_deref(),
            config,
            renderer,
        ),
        Some(ExpensesAction::Remove { id, on, yes }) => {
            remove(&mut expenses, &id, on.as_deref(), yes, config, renderer)
        }
    }
}

fn week(expenses: &Expenses, config: &Config, renderer: &Renderer) -> Result<()> {
    let today = resolve_date(None, config)?;
    let stats = expenses.week_stats(today);
    renderer.print_md("# Expenses this week\n");
    renderer.print_week_stats(&stats, |value| format!("R$ {value:.2}"));
    renderer.print_info(&format!("Total: R$ {:.2}", stats.total));
    Ok(())
}

fn view(
    expenses: &Expenses,
    token: Option<&str>,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let date = resolve_date(token, config)?;
    let heading = format!("# {} {}\n", weekday_label(date), renderer.format_date(date));
    match expenses.day(date) {
        None => {
            renderer.print_md(&heading);
            renderer.print_info("No expenses recorded.");
        }
        Some(day) => {
            let mut md = heading;
            for expense in &day.expenses {
                let description = if expense.description.is_empty() {
                    String::new()
                } else {
                    format!(" {}", expense.description)
                };
                md.push_str(&format!(
                    "- R$ {:.2}{} `{}`\n",
                    expense.amount_value(),
                    description,
                    short_id(&expense.id)
                ));
            }
            if let Some(notes) = &day.notes {
                md.push_str(&format!("> {notes}\n"));
            }
            renderer.print_md(&md);
            renderer.print_info(&format!("Total: R$ {:.2}", day.total()));
        }
    }
    Ok(())
}

fn add(
    expenses: &mut Expenses,
    amount: &str,
    description: Option<&str>,
    on: Option<&str>,
    notes: Option<&str>,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let date = resolve_date(on, config)?;
    let committed = expenses.add_expense(date, amount, description.unwrap_or(""), notes)?;
    require_saved(committed.warning)?;
    renderer.print_info(&format!(
        "Added R$ {:.2} on {} {}",
        committed.value.amount_value(),
        weekday_label(date),
        renderer.format_date(date)
    ));
    Ok(())
}

fn remove(
    expenses: &mut Expenses,
    id: &str,
    on: Option<&str>,
    yes: bool,
    config: &Config,
    renderer: &Renderer,
) -> Result<()> {
    let date = resolve_date(on, config)?;
    if !yes {
        let found = expenses
            .day(date)
            .and_then(|day| day.expenses.iter().find(|expense| expense.id.starts_with(id)));
        let prompt = match found {
            Some(expense) if expense.description.is_empty() => {
                format!("Remove R$ {:.2}?", expense.amount_value())
            }
            Some(expense) => format!(
                "Remove R$ {:.2} ({})?",
                expense.amount_value(),
                expense.description
            ),
            None => format!("Remove expense {id}?"),
        };
        if !confirm(&prompt)? {
            renderer.print_info("Nothing removed.");
            return Ok(());
        }
    }
    let committed = expenses.remove_expense(date, id)?;
    require_saved(committed.warning)?;
    renderer.print_info(&format!("Removed R$ {:.2}", committed.value.amount_value()));
    Ok(())
}
