use crate::constants::HEADERS;
use crate::error::{CleanerError, Result};
use crate::types::JobListing;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Listings loaded from a table plus any canonical columns the header lacked
#[derive(Debug, Default)]
pub struct LoadedListings {
    pub listings: Vec<JobListing>,
    pub missing_columns: Vec<&'static str>,
}

/// Maps each canonical column to its index in the source header row.
///
/// Built once per table so rows are read by name regardless of column order
/// or extra columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; 4],
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut indices = [None; 4];
        for (slot, name) in indices.iter_mut().zip(HEADERS) {
            // Last occurrence wins when a header name is repeated
            *slot = headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last();
        }
        Self { indices }
    }

    pub fn missing(&self) -> Vec<&'static str> {
        HEADERS
            .iter()
            .zip(self.indices.iter())
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    fn get<'r>(&self, row: &'r StringRecord, column: usize) -> &'r str {
        self.indices[column]
            .and_then(|i| row.get(i))
            .unwrap_or("")
    }

    pub fn listing(&self, row: &StringRecord) -> JobListing {
        JobListing::new(
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        )
    }
}

/// Read every listing from the delimited table at `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_listings(path: &Path, delimiter: u8) -> Result<LoadedListings> {
    let text = fs::read_to_string(path).map_err(|source| CleanerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = parse_listings(&text, delimiter)?;
    debug!("Read {} listings", loaded.listings.len());
    Ok(loaded)
}

/// Parse listings from in-memory table text.
pub fn parse_listings(text: &str, delimiter: u8) -> Result<LoadedListings> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let columns = ColumnMap::from_headers(rdr.headers()?);
    let missing_columns = columns.missing();
    if !missing_columns.is_empty() {
        warn!("⚠️ CSV missing expected headers: {:?}", missing_columns);
    }

    let mut listings = Vec::new();
    for row in rdr.records() {
        listings.push(columns.listing(&row?));
    }

    Ok(LoadedListings {
        listings,
        missing_columns,
    })
}
