use crate::constants::HEADERS;
use crate::error::{CleanerError, Result};
use crate::types::JobListing;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Render listings as a delimited table: header first, raw `Date Posted`.
pub fn render_csv(listings: &[JobListing], delimiter: u8) -> Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    wtr.write_record(HEADERS)?;
    for listing in listings {
        wtr.write_record(listing.fields())?;
    }
    wtr.into_inner()
        .map_err(|e| CleanerError::Io(e.into_error()))
}

/// Render listings as a pretty-printed JSON array of canonical objects.
pub fn render_json(listings: &[JobListing]) -> Result<String> {
    Ok(serde_json::to_string_pretty(listings)?)
}

#[instrument(skip_all, fields(path = %path.display(), rows = listings.len()))]
pub fn write_csv(listings: &[JobListing], path: &Path, delimiter: u8) -> Result<()> {
    let bytes = render_csv(listings, delimiter)?;
    persist(path, &bytes)?;
    debug!("Wrote CSV");
    Ok(())
}

#[instrument(skip_all, fields(path = %path.display(), rows = listings.len()))]
pub fn write_json(listings: &[JobListing], path: &Path) -> Result<()> {
    let json = render_json(listings)?;
    persist(path, json.as_bytes())?;
    debug!("Wrote JSON");
    Ok(())
}

/// Write the whole destination in one call, creating parent directories.
fn persist(path: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source| CleanerError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(path, contents).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::reader::{parse_listings, read_listings};
    use tempfile::tempdir;

    fn sample() -> Vec<JobListing> {
        vec![
            JobListing::new("Engineer", "Acme, Inc.", "NYC", "Oct 19, 2025"),
            JobListing::new("Nurse", "MedCo", "LA", "not-a-date"),
        ]
    }

    #[test]
    fn test_render_csv_header_and_quoting() {
        let bytes = render_csv(&sample(), b',').unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Job Title,Company,Location,Date Posted");
        assert_eq!(lines[1], "Engineer,\"Acme, Inc.\",NYC,\"Oct 19, 2025\"");
        assert_eq!(lines[2], "Nurse,MedCo,LA,not-a-date");
    }

    #[test]
    fn test_render_csv_empty_still_has_header() {
        let bytes = render_csv(&[], b',').unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Job Title,Company,Location,Date Posted\n");
    }

    #[test]
    fn test_render_json_uses_raw_dates() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["Date Posted"], "Oct 19, 2025");
        assert_eq!(value[1]["Date Posted"], "not-a-date");
        assert!(json.contains("\n  {\n    \"Job Title\": \"Engineer\""));
    }

    #[test]
    fn test_csv_round_trip() {
        let listings = sample();
        let bytes = render_csv(&listings, b'\t').unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let loaded = parse_listings(&text, b'\t').unwrap();
        assert_eq!(loaded.listings, listings);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out/nested/jobs.csv");
        let json_path = dir.path().join("out/jobs.json");

        write_csv(&sample(), &csv_path, b',').unwrap();
        write_json(&sample(), &json_path).unwrap();

        let loaded = read_listings(&csv_path, b',').unwrap();
        assert_eq!(loaded.listings.len(), 2);
        assert!(json_path.exists());
    }

    #[test]
    fn test_unwritable_destination_is_a_write_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let err = write_csv(&sample(), dir.path(), b',').unwrap_err();
        assert!(matches!(err, CleanerError::Write { .. }));
    }
}
