mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use render::{RenderOptions, Renderer};
use sit_core::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.enabled(),
    }));

    if cli.path {
        renderer.print_info(&format!("{}", config.data_dir.display()));
        return Ok(());
    }

    match cli.command {
        Some(Command::Notes { action }) => commands::notes::run(action, &config, &renderer),
        Some(Command::Expenses { action }) => commands::expenses::run(action, &config, &renderer),
        Some(Command::Timesheet { action }) => commands::timesheet::run(action, &config, &renderer),
        Some(Command::Calendar { date }) => {
            commands::calendar::run(date.as_deref(), &config, &renderer)
        }
        None => {
            home(&config, &renderer);
            Ok(())
        }
    }
}

fn home(config: &Config, renderer: &Renderer) {
    renderer.print_md(
        "# sit\n\
        \n\
        - `sit notes` lists your notes; `sit notes add` writes one\n\
        - `sit expenses` charts the week; `sit expenses add 12.50` records a purchase\n\
        - `sit timesheet` charts worked hours; `sit timesheet save -d 17:30` closes the day\n\
        - `sit calendar` shows the month around today\n",
    );
    renderer.print_info(&format!("Data lives in {}", config.data_dir.display()));
}
