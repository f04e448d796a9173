use super::resolve_date;
use crate::render::Renderer;
use anyhow::Result;
use sit_core::Config;
use sit_core::calendar::{month_grid, week_of, weekday_label};

pub fn run(token: Option<&str>, config: &Config, renderer: &Renderer) -> Result<()> {
    let date = resolve_date(token, config)?;
    let days = month_grid(date);
    let week = week_of(date);
    renderer.print_md(&format!("# {}\n", date.format("%B %Y")));
    renderer.print_month(&days, &week, date);
    renderer.print_info(&format!(
        "Selected {} {}",
        weekday_label(date),
        renderer.format_date(date)
    ));
    Ok(())
}
