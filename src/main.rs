mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use monthgrid::config::{Config, get_config_path};
use monthgrid::grid::{ConfigurationParameters, month_info_for, resolve_with_owner};
use monthgrid::ui::render_month_text;
use monthgrid::{Calendar, Gregorian};

use crate::cli::{Cli, Command, GridArgs, MonthArgs, ResolveArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_merged().context("failed to load config")?,
    };

    match cli.command {
        Command::Month(args) => print_months(&config, args),
        Command::Resolve(args) => print_resolved(&config, args),
        Command::Init => {
            if Config::init()? {
                println!("Created {}", get_config_path().display());
            } else {
                println!("Config already exists at {}", get_config_path().display());
            }
            Ok(())
        }
    }
}

fn apply_grid_args(mut config: Config, args: &GridArgs) -> Config {
    if let Some(first_day) = &args.first_day {
        config.first_day_of_week = first_day.clone();
    }
    if let Some(rows) = args.rows {
        config.number_of_rows = rows;
    }
    if let Some(in_dates) = args.in_dates {
        config.generate_in_dates = in_dates.into();
    }
    if let Some(out_dates) = args.out_dates {
        config.generate_out_dates = out_dates.into();
    }
    config
}

fn print_months(config: &Config, args: MonthArgs) -> Result<()> {
    println!("{}", month_blocks(config, &args)?.join("\n\n"));
    Ok(())
}

/// Rendered grids for the requested months; at least one month is always shown.
fn month_blocks(config: &Config, args: &MonthArgs) -> Result<Vec<String>> {
    let mut config = apply_grid_args(config.clone(), &args.grid);
    if let Some(width) = args.cell_width {
        config.cell_width = width;
    }

    let today = config.today();
    let start = match args.start {
        Some(start) => start,
        None => today.with_day(1).context("invalid current date")?,
    };
    let count = args.months.max(1);
    let months = i32::try_from(count).context("too many months")?;
    let end = Gregorian
        .add_months(start, months)
        .and_then(|d| d.pred_opt())
        .context("month range out of bounds")?;

    let params: ConfigurationParameters = config.parameters(start, end);
    tracing::info!(%start, %end, "printing month grids");

    let blocks = (0..count)
        .map(|index| render_month_text(&params, index, config.cell_size()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks)
}

fn print_resolved(config: &Config, args: ResolveArgs) -> Result<()> {
    let config = apply_grid_args(config.clone(), &args.grid);
    let params = config.parameters(args.month, args.month);
    let (month, start_of_month) = month_info_for(&params, 0)?;

    if args.index >= month.number_of_days_in_month_grid {
        anyhow::bail!(
            "index {} is outside the grid ({} cells)",
            args.index,
            month.number_of_days_in_month_grid
        );
    }

    let boundary = params.boundary()?;
    let resolved = resolve_with_owner(
        args.index,
        &month,
        start_of_month,
        params.calendar.as_ref(),
        &boundary,
    )?;
    println!("{} {:?}", resolved.date, resolved.owner);
    Ok(())
}
