pub mod dedup;
pub mod filter;
pub mod reader;
pub mod sorter;
pub mod writer;

use crate::error::Result;
use crate::types::{JobListing, SortOrder};
use chrono::NaiveDate;
use metrics::counter;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

pub use dedup::dedup;
pub use filter::{apply_filters, FilterCriteria};
pub use reader::{parse_listings, read_listings, ColumnMap, LoadedListings};
pub use sorter::sort_listings;
pub use writer::{render_csv, render_json, write_csv, write_json};

/// What to do to the listings between reading and writing
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    pub dedup: bool,
    pub filters: FilterCriteria,
    pub sort: Option<SortOrder>,
}

/// Where to read from and write to
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub json: Option<PathBuf>,
    pub delimiter: u8,
}

/// Row counts for each stage plus the destinations written.
///
/// These counts are the observable record of a run. `Pipeline::run` also
/// bumps `metrics` counters, which stay no-ops unless the embedding process
/// installs a recorder; the binary does not.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub rows_read: usize,
    pub duplicates_removed: usize,
    pub filtered_out: usize,
    pub rows_written: usize,
    pub missing_columns: Vec<&'static str>,
    pub output_file: PathBuf,
    pub json_file: Option<PathBuf>,
}

pub struct Pipeline;

impl Pipeline {
    /// Dedup, filter and sort in memory. Returns the cleaned listings along
    /// with how many were removed as duplicates and by the filters.
    pub fn clean(
        listings: Vec<JobListing>,
        options: &CleanOptions,
        today: NaiveDate,
    ) -> (Vec<JobListing>, usize, usize) {
        let before = listings.len();
        let listings = if options.dedup {
            dedup(listings)
        } else {
            listings
        };
        let duplicates_removed = before - listings.len();

        let before = listings.len();
        let listings = apply_filters(listings, &options.filters, today);
        let filtered_out = before - listings.len();

        let listings = match options.sort {
            Some(order) => sort_listings(listings, order),
            None => listings,
        };

        (listings, duplicates_removed, filtered_out)
    }

    /// Read, clean and write one table.
    ///
    /// The CSV destination is written before the JSON one; if the JSON write
    /// fails the CSV file is left in place.
    #[instrument(skip_all, fields(input = %paths.input.display()))]
    pub fn run(paths: &RunPaths, options: &CleanOptions, today: NaiveDate) -> Result<PipelineResult> {
        info!("📄 Reading listings from {}", paths.input.display());
        let LoadedListings {
            listings,
            missing_columns,
        } = read_listings(&paths.input, paths.delimiter)?;
        let rows_read = listings.len();
        counter!("jobs_cleaner_rows_read_total").increment(rows_read as u64);

        let (listings, duplicates_removed, filtered_out) = Self::clean(listings, options, today);
        counter!("jobs_cleaner_duplicates_removed_total").increment(duplicates_removed as u64);
        counter!("jobs_cleaner_rows_filtered_total").increment(filtered_out as u64);
        info!(
            "🔧 Cleaned {} rows ({} duplicates, {} filtered out)",
            rows_read, duplicates_removed, filtered_out
        );

        write_csv(&listings, &paths.output, paths.delimiter)?;
        if let Some(json) = &paths.json {
            write_json(&listings, json)?;
        }
        counter!("jobs_cleaner_rows_written_total").increment(listings.len() as u64);
        info!("💾 Wrote {} rows", listings.len());

        Ok(PipelineResult {
            rows_read,
            duplicates_removed,
            filtered_out,
            rows_written: listings.len(),
            missing_columns,
            output_file: paths.output.clone(),
            json_file: paths.json.clone(),
        })
    }
}
