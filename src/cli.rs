use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use monthgrid::{InDateCellGeneration, OutDateCellGeneration};

/// Month grid calendar.
#[derive(Parser)]
#[command(
    name = "monthgrid",
    version,
    about = "Print calendar month grids and resolve grid cells to dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of the global and project configs.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one or more month grids.
    Month(MonthArgs),
    /// Print the date shown at a grid index of a month.
    Resolve(ResolveArgs),
    /// Create an empty global config file.
    Init,
}

/// Grid settings shared by the subcommands; unset flags fall back to config.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Weekday the grid starts on (e.g. sun, mon).
    #[arg(long = "first-day")]
    pub first_day: Option<String>,

    /// Rows per section (1-6).
    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long = "in-dates", value_enum)]
    pub in_dates: Option<InDatesArg>,

    #[arg(long = "out-dates", value_enum)]
    pub out_dates: Option<OutDatesArg>,
}

#[derive(clap::Args)]
pub struct MonthArgs {
    /// First month to print (YYYY-MM). Defaults to the current month.
    #[arg(short, long, value_parser = parse_month)]
    pub start: Option<NaiveDate>,

    /// Number of months to print.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub months: usize,

    /// Columns per day cell.
    #[arg(long = "cell-width")]
    pub cell_width: Option<f64>,

    #[command(flatten)]
    pub grid: GridArgs,
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Month to resolve in (YYYY-MM).
    #[arg(short, long, value_parser = parse_month)]
    pub month: NaiveDate,

    /// Zero-based grid index.
    pub index: usize,

    #[command(flatten)]
    pub grid: GridArgs,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum InDatesArg {
    All,
    First,
    Off,
}

impl From<InDatesArg> for InDateCellGeneration {
    fn from(arg: InDatesArg) -> Self {
        match arg {
            InDatesArg::All => Self::ForAllMonths,
            InDatesArg::First => Self::ForFirstMonthOnly,
            InDatesArg::Off => Self::Off,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum OutDatesArg {
    Row,
    Grid,
    Off,
}

impl From<OutDatesArg> for OutDateCellGeneration {
    fn from(arg: OutDatesArg) -> Self {
        match arg {
            OutDatesArg::Row => Self::TillEndOfRow,
            OutDatesArg::Grid => Self::TillEndOfGrid,
            OutDatesArg::Off => Self::Off,
        }
    }
}

fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM, got '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2024-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("February").is_err());
    }

    #[test]
    fn test_cli_parses_month_command() {
        let cli = Cli::try_parse_from([
            "monthgrid", "-vv", "month", "--start", "2024-01", "-n", "3", "--out-dates", "grid",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Month(args) = cli.command else {
            panic!("expected month command");
        };
        assert_eq!(args.months, 3);
        assert!(matches!(args.grid.out_dates, Some(OutDatesArg::Grid)));
    }
}
