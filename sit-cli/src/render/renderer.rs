use super::theme::Palette;
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use sit_core::WeekStats;
use sit_core::calendar::weekday_index;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

/// Widest bar of a week chart, in blocks.
const BAR_WIDTH: usize = 24;

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Palette::default_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%d/%m/%Y".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.opts.date_format).to_string()
    }

    pub fn format_timestamp(&self, stamp: DateTime<Utc>) -> String {
        stamp
            .with_timezone(&Local)
            .format(&self.opts.date_format)
            .to_string()
    }

    /// One row per weekday, Monday first: label, value, scaled bar.
    pub fn print_week_stats(&self, stats: &WeekStats, format_value: impl Fn(f64) -> String) {
        let max = stats
            .series
            .iter()
            .map(|day| day.value)
            .fold(0.0_f64, f64::max);
        for day in &stats.series {
            let mut width = if max > 0.0 {
                ((day.value / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            if day.value > 0.0 && width == 0 {
                width = 1;
            }
            let mut bar = "▇".repeat(width);
            if self.opts.use_color {
                bar = bar.with(Palette::DAYS[day.color_index]).to_string();
            }
            println!("{:<4}{:>10}  {}", day.label, format_value(day.value), bar);
        }
    }

    /// The month grid, seven dates per row. The reference day is bracketed,
    /// its week keeps the weekday colors, and days spilling in from the
    /// previous month are dimmed.
    pub fn print_month(&self, days: &[NaiveDate], week: &[NaiveDate], reference: NaiveDate) {
        for row in days.chunks(7) {
            let cells: Vec<String> = row
                .iter()
                .map(|day| self.month_cell(*day, week, reference))
                .collect();
            println!("{}", cells.join(" "));
        }
    }

    fn month_cell(&self, day: NaiveDate, week: &[NaiveDate], reference: NaiveDate) -> String {
        let cell = if day == reference {
            format!("[{:>2}]", day.day())
        } else {
            format!(" {:>2} ", day.day())
        };
        if !self.opts.use_color {
            return cell;
        }
        if week.contains(&day) {
            return cell.with(Palette::DAYS[weekday_index(day)]).to_string();
        }
        if day.month() != reference.month() {
            return cell.with(Palette::COMMENT).to_string();
        }
        cell
    }
}
