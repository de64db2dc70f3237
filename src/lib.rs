pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use error::{CleanerError, Result};
pub use pipeline::{CleanOptions, FilterCriteria, Pipeline, PipelineResult, RunPaths};
pub use types::{parse_posted_date, JobListing, SortOrder};
