use anyhow::{Context, Result};
use clap::Parser;
use jobs_cleaner::config::{parse_delimiter, Config};
use jobs_cleaner::constants::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use jobs_cleaner::logging;
use jobs_cleaner::{CleanOptions, FilterCriteria, Pipeline, RunPaths, SortOrder};
use std::path::PathBuf;
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(name = "jobs_cleaner")]
#[command(about = "Clean/filter/sort job listings CSV.")]
#[command(version)]
struct Cli {
    /// Input CSV filename
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV filename
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Optional JSON output filename
    #[arg(long)]
    json: Option<PathBuf>,

    /// Remove duplicate listings
    #[arg(long)]
    dedup: bool,

    /// Sort by Date Posted (newest first)
    #[arg(long)]
    sort_desc: bool,

    /// Sort by Date Posted (oldest first)
    #[arg(long)]
    sort_asc: bool,

    /// Keep rows on/after this date (e.g., "Oct 10 2025")
    #[arg(long)]
    min_date: Option<String>,

    /// Drop rows older than N days from today
    #[arg(long, allow_negative_numbers = true)]
    drop_older_than: Option<i64>,

    /// Keep rows whose Location contains this substring
    #[arg(long)]
    location: Option<String>,

    /// Keep rows whose Job Title contains this substring
    #[arg(long)]
    title_contains: Option<String>,

    /// Keep rows whose Company contains this substring
    #[arg(long)]
    company_contains: Option<String>,

    /// Field delimiter for input and output (single character, or "tab")
    #[arg(long)]
    delimiter: Option<String>,

    /// TOML config file (defaults to jobs_cleaner.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn sort_order(&self) -> Option<SortOrder> {
        if self.sort_desc {
            if self.sort_asc {
                warn!("Both --sort-desc and --sort-asc given; sorting newest first");
            }
            Some(SortOrder::Descending)
        } else if self.sort_asc {
            Some(SortOrder::Ascending)
        } else {
            None
        }
    }

    fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            dedup: self.dedup,
            filters: FilterCriteria {
                location: self.location.clone(),
                title_contains: self.title_contains.clone(),
                company_contains: self.company_contains.clone(),
                min_date: self.min_date.clone(),
                max_age_days: self.drop_older_than,
            },
            sort: self.sort_order(),
        }
    }

    /// CLI flags first, then the config file, then built-in defaults
    fn run_paths(&self, config: &Config) -> Result<RunPaths> {
        let delimiter = match &self.delimiter {
            Some(raw) => parse_delimiter(raw)?,
            None => config.delimiter()?,
        };
        Ok(RunPaths {
            input: self
                .input
                .clone()
                .or_else(|| config.paths.input.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: self
                .output
                .clone()
                .or_else(|| config.paths.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            json: self.json.clone().or_else(|| config.paths.json.clone()),
            delimiter,
        })
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = logging::init_logging(&config.logging);

    let paths = cli.run_paths(&config)?;
    let options = cli.clean_options();
    let today = chrono::Local::now().date_naive();

    let result = Pipeline::run(&paths, &options, today)
        .inspect_err(|e| error!("Run failed: {}", e))
        .with_context(|| format!("Failed to clean {}", paths.input.display()))?;

    match &result.json_file {
        Some(json) => println!(
            "✅ Wrote {} rows to {} and {}",
            result.rows_written,
            result.output_file.display(),
            json.display()
        ),
        None => println!(
            "✅ Wrote {} rows to {}",
            result.rows_written,
            result.output_file.display()
        ),
    }
    Ok(())
}
