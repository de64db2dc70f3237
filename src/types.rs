use crate::constants::DATE_FORMATS;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// chrono is lenient about separator whitespace and year width, so each
/// format only applies to text of its exact shape
static DATE_SHAPES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    DATE_FORMATS
        .iter()
        .map(|(shape, fmt)| (Regex::new(shape).expect("date shape pattern"), *fmt))
        .collect()
});

/// A single job listing normalized to the four canonical columns.
///
/// Fields are trimmed at construction and the posted date is parsed once;
/// listings are never mutated afterwards, stages only drop or reorder them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    #[serde(rename = "Job Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Date Posted")]
    date_posted: String,
    #[serde(skip)]
    posted_on: Option<NaiveDate>,
}

impl JobListing {
    pub fn new(
        title: impl AsRef<str>,
        company: impl AsRef<str>,
        location: impl AsRef<str>,
        date_posted: impl AsRef<str>,
    ) -> Self {
        let date_posted = date_posted.as_ref().trim().to_string();
        let posted_on = parse_posted_date(&date_posted);
        Self {
            title: title.as_ref().trim().to_string(),
            company: company.as_ref().trim().to_string(),
            location: location.as_ref().trim().to_string(),
            date_posted,
            posted_on,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// The `Date Posted` text exactly as read (after trimming)
    pub fn date_posted(&self) -> &str {
        &self.date_posted
    }

    /// Parsed calendar date, `None` when no known format matched.
    ///
    /// `Option` orders `None` before every `Some`, which is what the sorter
    /// relies on to treat undated listings as the oldest.
    pub fn posted_on(&self) -> Option<NaiveDate> {
        self.posted_on
    }

    /// Fields in canonical column order
    pub fn fields(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_str(),
            self.date_posted.as_str(),
        ]
    }
}

/// Parse a posted date using the first matching format in [`DATE_FORMATS`].
pub fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_SHAPES
        .iter()
        .filter(|(shape, _)| shape.is_match(raw))
        .find_map(|(_, fmt)| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Direction for the date sort stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first, undated listings last
    Descending,
    /// Oldest first, undated listings first
    Ascending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_month_day_year() {
        assert_eq!(parse_posted_date("Oct 19 2025"), Some(ymd(2025, 10, 19)));
        assert_eq!(parse_posted_date("Oct 1 2025"), Some(ymd(2025, 10, 1)));
    }

    #[test]
    fn test_parse_month_day_comma_year() {
        assert_eq!(parse_posted_date("Oct 19, 2025"), Some(ymd(2025, 10, 19)));
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_posted_date("2025-10-19"), Some(ymd(2025, 10, 19)));
        assert_eq!(parse_posted_date("  2025-09-15 "), Some(ymd(2025, 9, 15)));
    }

    #[test]
    fn test_unparseable_dates_are_absent() {
        assert_eq!(parse_posted_date(""), None);
        assert_eq!(parse_posted_date("   "), None);
        assert_eq!(parse_posted_date("n/a"), None);
        assert_eq!(parse_posted_date("not-a-date"), None);
        assert_eq!(parse_posted_date("19/10/2025"), None);
        assert_eq!(parse_posted_date("2025-02-30"), None);
    }

    #[test]
    fn test_separators_and_padding_variants() {
        assert_eq!(parse_posted_date("oct 19 2025"), Some(ymd(2025, 10, 19)));
        assert_eq!(parse_posted_date("Oct  19   2025"), Some(ymd(2025, 10, 19)));
        assert_eq!(parse_posted_date("Oct 9,  2025"), Some(ymd(2025, 10, 9)));
        assert_eq!(parse_posted_date("2025-1-5"), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn test_rejects_loose_shapes() {
        assert_eq!(parse_posted_date("Oct19 2025"), None);
        assert_eq!(parse_posted_date("Oct 192025"), None);
        assert_eq!(parse_posted_date("Oct 19,2025"), None);
        assert_eq!(parse_posted_date("Oct 19 , 2025"), None);
        assert_eq!(parse_posted_date("Oct 19 25"), None);
        assert_eq!(parse_posted_date("Oct 19, 25"), None);
        assert_eq!(parse_posted_date("October 19 2025"), None);
        assert_eq!(parse_posted_date("25-10-19"), None);
        assert_eq!(parse_posted_date("02025-10-19"), None);
        assert_eq!(parse_posted_date("2025-10-19T00:00"), None);
    }

    #[test]
    fn test_short_year_sorts_with_undated() {
        let short_year = JobListing::new("a", "b", "c", "Oct 19 25");
        let undated = JobListing::new("a", "b", "c", "n/a");
        assert_eq!(short_year.posted_on(), undated.posted_on());
    }

    #[test]
    fn test_new_trims_and_parses_once() {
        let listing = JobListing::new("  Engineer ", "Acme\t", " NYC", " Oct 1 2025 ");
        assert_eq!(listing.title(), "Engineer");
        assert_eq!(listing.company(), "Acme");
        assert_eq!(listing.location(), "NYC");
        assert_eq!(listing.date_posted(), "Oct 1 2025");
        assert_eq!(listing.posted_on(), Some(ymd(2025, 10, 1)));
    }

    #[test]
    fn test_absent_date_orders_before_any_date() {
        let undated = JobListing::new("a", "b", "c", "n/a");
        let ancient = JobListing::new("a", "b", "c", "0001-01-01");
        assert!(ancient.posted_on().is_some());
        assert!(undated.posted_on() < ancient.posted_on());
    }

    #[test]
    fn test_serializes_canonical_keys_without_parsed_date() {
        let listing = JobListing::new("Engineer", "Acme", "NYC", "Oct 1 2025");
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Job Title": "Engineer",
                "Company": "Acme",
                "Location": "NYC",
                "Date Posted": "Oct 1 2025",
            })
        );
    }
}
