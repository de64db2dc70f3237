/// Column names shared by the input and output tables

pub const JOB_TITLE: &str = "Job Title";
pub const COMPANY: &str = "Company";
pub const LOCATION: &str = "Location";
pub const DATE_POSTED: &str = "Date Posted";

/// Canonical column order used when writing tables
pub const HEADERS: [&str; 4] = [JOB_TITLE, COMPANY, LOCATION, DATE_POSTED];

/// Accepted `Date Posted` layouts, tried in order: the exact text shape,
/// then the chrono format used to read it
pub const DATE_FORMATS: [(&str, &str); 3] = [
    // Oct 19 2025
    (
        r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d{1,2}\s+\d{4}$",
        "%b %d %Y",
    ),
    // Oct 19, 2025
    (
        r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d{1,2},\s+\d{4}$",
        "%b %d, %Y",
    ),
    // 2025-10-19
    (r"^\d{4}-\d{1,2}-\d{1,2}$", "%Y-%m-%d"),
];

// Defaults applied when neither the CLI nor the config file names a path
pub const DEFAULT_INPUT: &str = "fake_jobs.csv";
pub const DEFAULT_OUTPUT: &str = "fake_jobs_clean.csv";
pub const DEFAULT_CONFIG: &str = "jobs_cleaner.toml";
pub const DEFAULT_DELIMITER: u8 = b',';

pub const DEFAULT_LOG_FILTER: &str = "jobs_cleaner=info,warn";
pub const LOG_FILE_NAME: &str = "jobs_cleaner.log";
