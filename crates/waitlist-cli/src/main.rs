//! Turn a waiting-list report into a sorted spreadsheet.
//!
//! ```text
//! waitlist <INPUT> [--output-dir DIR] [--format xlsx|csv|json]
//!                  [--config FILE] [--date YYYY-MM-DD]
//! ```
//!
//! Logging goes through `RUST_LOG` (e.g. `RUST_LOG=waitlist_core=debug`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use waitlist_core::{load_document, OutputFormat, ParserConfig, Pipeline, Warning};

#[derive(Parser, Debug)]
#[command(
    name = "waitlist",
    about = "Rebuild the surgical waiting list from the scheduling report"
)]
struct Cli {
    /// Report exported by the scheduling system (RTF or plain text)
    input: PathBuf,

    /// Directory the roster is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Output file format
    #[arg(long, value_enum, default_value_t = Format::Xlsx)]
    format: Format,

    /// TOML file overriding the parser defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generation date used in the file name (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Xlsx,
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Xlsx => OutputFormat::Xlsx,
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let (path, warnings) = run(&cli)?;

    print_report(&warnings);
    println!("Roster written to {}", path.display());
    Ok(())
}

fn run(cli: &Cli) -> Result<(PathBuf, Vec<Warning>)> {
    let config = load_config(cli.config.as_deref())?;
    let generated_on = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let document = load_document(&cli.input)
        .with_context(|| format!("Failed to read report {}", cli.input.display()))?;

    let pipeline = Pipeline::new(config);
    log::debug!("Parser config: {:?}", pipeline.config());

    let outcome = pipeline
        .run(&document, generated_on)
        .context("Failed to build roster")?;

    let path = OutputFormat::from(cli.format)
        .write(&outcome.roster, &outcome.warnings, &cli.output_dir)
        .with_context(|| format!("Failed to write roster to {}", cli.output_dir.display()))?;
    log::info!(
        "Roster of {} rows for {} written to {}",
        outcome.roster.len(),
        generated_on,
        path.display()
    );

    Ok((path, outcome.warnings))
}

fn load_config(path: Option<&Path>) -> Result<ParserConfig> {
    match path {
        Some(path) => ParserConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(ParserConfig::default()),
    }
}

fn print_report(warnings: &[Warning]) {
    let manual_dates = history_numbers(warnings, Warning::needs_manual_date);
    if !manual_dates.is_empty() {
        println!("Inclusion date to enter manually:");
        for history_number in &manual_dates {
            println!("  {}", history_number);
        }
    }

    let suspect: Vec<&Warning> = warnings.iter().filter(|w| w.suspect_diagnosis()).collect();
    if !suspect.is_empty() {
        println!("Diagnosis may be wrong:");
        for warning in suspect {
            println!("  {}", warning);
        }
    }

    for warning in warnings {
        if let Warning::UnpairedSurgeonBlocks { count } = warning {
            println!("{} surgeon block(s) could not be paired with a patient", count);
        }
    }
}

/// Distinct history numbers of the matching warnings, in first-seen order.
fn history_numbers(warnings: &[Warning], predicate: fn(&Warning) -> bool) -> Vec<&str> {
    let mut numbers: Vec<&str> = Vec::new();
    for number in warnings
        .iter()
        .filter(|w| predicate(w))
        .filter_map(Warning::history_number)
    {
        if !numbers.contains(&number) {
            numbers.push(number);
        }
    }
    numbers
}
