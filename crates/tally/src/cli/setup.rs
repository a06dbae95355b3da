use clap::{Parser, Subcommand};
use tallyapp::calendar::days_in_month;
use tallyapp::date_idx::month_key;

#[derive(Parser, Debug)]
#[command(name = "tally", bin_name = "tally", version, disable_help_subcommand = true)]
#[command(about = "Log numbers with notes and browse them by day, month and year", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use this directory for records instead of the configured one
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a value for today
    #[command(alias = "a", display_order = 1)]
    Add {
        /// The value to record
        #[arg(allow_negative_numbers = true, value_parser = parse_value)]
        value: f64,

        /// Free-text note stored with the value
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Show one month, grouped by day
    #[command(alias = "m", display_order = 2)]
    Month {
        /// Month as YYYY-M or as a stored key like 20227 (default: this month)
        #[arg(value_parser = parse_month)]
        month: Option<String>,
    },

    /// Show per-month totals for a year
    #[command(alias = "y", display_order = 3)]
    Year {
        /// Four-digit year (default: this year)
        #[arg(value_parser = parse_year)]
        year: Option<String>,
    },

    /// List every stored day
    #[command(display_order = 4)]
    All,

    /// Remove records
    #[command(display_order = 5)]
    Clear {
        #[command(subcommand)]
        target: ClearTarget,
    },

    /// Show the resolved configuration
    #[command(display_order = 6)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ClearTarget {
    /// Remove whole months
    Months {
        #[arg(required = true, num_args = 1.., value_parser = parse_month)]
        months: Vec<String>,
    },

    /// Remove whole years
    Years {
        #[arg(required = true, num_args = 1.., value_parser = parse_year)]
        years: Vec<String>,
    },

    /// Remove every record
    All,
}

/// A finite number. `inf`, `NaN` and overflowing literals are rejected.
pub fn parse_value(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("invalid number {:?}", input))?;
    if !value.is_finite() {
        return Err(format!("value must be a finite number, got {:?}", input));
    }
    Ok(value)
}

/// Accepts `YYYY-M` / `YYYY-MM` or a raw month key (`20227`, `202211`) and
/// returns the month key.
pub fn parse_month(input: &str) -> Result<String, String> {
    let input = input.trim();
    if let Some((year, month)) = input.split_once('-') {
        let year = parse_year(year)?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month {:?}", month))?;
        let year_num: i32 = year.parse().map_err(|_| format!("invalid year {:?}", year))?;
        if days_in_month(year_num, month).is_none() {
            return Err(format!("month must be between 1 and 12, got {}", month));
        }
        return Ok(month_key(&year, month));
    }

    let is_key = matches!(input.len(), 5 | 6) && input.chars().all(|c| c.is_ascii_digit());
    if !is_key {
        return Err(format!(
            "expected YYYY-M or a month key like 20227, got {:?}",
            input
        ));
    }
    Ok(input.to_string())
}

pub fn parse_year(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.len() == 4 && input.chars().all(|c| c.is_ascii_digit()) {
        Ok(input.to_string())
    } else {
        Err(format!("expected a four-digit year, got {:?}", input))
    }
}
