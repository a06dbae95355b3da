use super::render::{render_all, render_month, render_year};
use super::setup::{ClearTarget, Cli, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::path::PathBuf;
use tallyapp::calendar::format_date;
use tallyapp::date_idx::IdxKind;
use tallyapp::init::{initialize, TallyContext};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let ctx = initialize(cli.data.as_ref().map(PathBuf::from))
        .context("could not set up the record store")?;
    let _logger = start_logging(&cli, &ctx)?;
    debug!("using data directory {}", ctx.data_dir.display());

    dispatch(cli.command, ctx)
}

/// Logs go to stderr. `--verbose` forces debug; otherwise the configured level
/// applies unless `RUST_LOG` is set.
fn start_logging(cli: &Cli, ctx: &TallyContext) -> anyhow::Result<LoggerHandle> {
    let level = if cli.verbose {
        "debug"
    } else {
        ctx.config.log_level()
    };
    let logger = if cli.verbose {
        Logger::try_with_str(level)
    } else {
        Logger::try_with_env_or_str(level)
    };
    let handle = logger
        .context("invalid log specification")?
        .format(flexi_logger::default_format)
        .start()
        .context("could not start logging")?;
    Ok(handle)
}

fn dispatch(command: Commands, mut ctx: TallyContext) -> anyhow::Result<()> {
    let store = &mut ctx.store;
    match command {
        Commands::Add { value, note } => {
            let Some(record) = store.insert_record(value, &note) else {
                bail!("could not save the record");
            };
            println!("Recorded {} on {}", record.value, format_date(record.timestamp));
        }
        Commands::Month { month } => {
            let ym = month.unwrap_or_else(|| store.date_idx(IdxKind::Ym));
            let record = store.get_month_record(Some(&ym));
            print!("{}", render_month(&ym, record.as_ref()));
        }
        Commands::Year { year } => {
            let year = year.unwrap_or_else(|| store.date_idx(IdxKind::Year));
            let months = store.get_year_record(Some(&year));
            print!("{}", render_year(&year, &months));
        }
        Commands::All => {
            print!("{}", render_all(&store.get_all_records()));
        }
        Commands::Clear { target } => match target {
            ClearTarget::Months { months } => {
                if !store.clear_month_records(&months) {
                    bail!("could not clear every requested month");
                }
                println!("Cleared {} month(s)", months.len());
            }
            ClearTarget::Years { years } => {
                if !store.clear_year_records(&years) {
                    bail!("could not clear every requested year");
                }
                println!("Cleared {} year(s)", years.len());
            }
            ClearTarget::All => {
                if !store.clear_all_records() {
                    bail!("could not clear records");
                }
                println!("Cleared all records");
            }
        },
        Commands::Config => {
            println!("data_dir = {}", ctx.data_dir.display());
            println!("log_level = {}", ctx.config.log_level());
        }
    }
    Ok(())
}
