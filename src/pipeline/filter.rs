use crate::types::{parse_posted_date, JobListing};
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Optional filter options; every option that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of `Location`
    pub location: Option<String>,
    /// Case-insensitive substring of `Job Title`
    pub title_contains: Option<String>,
    /// Case-insensitive substring of `Company`
    pub company_contains: Option<String>,
    /// Keep listings posted on or after this date. Accepts any posted-date
    /// format; an unparseable value disables the option.
    pub min_date: Option<String>,
    /// Keep listings posted within this many days of `today`
    pub max_age_days: Option<i64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Criteria with needles lowercased and dates resolved against `today`
#[derive(Debug)]
struct ResolvedCriteria {
    location: Option<String>,
    title: Option<String>,
    company: Option<String>,
    min_date: Option<NaiveDate>,
    cutoff: Option<NaiveDate>,
}

impl ResolvedCriteria {
    fn new(criteria: &FilterCriteria, today: NaiveDate) -> Self {
        let min_date = criteria.min_date.as_deref().and_then(|raw| {
            let parsed = parse_posted_date(raw);
            if parsed.is_none() {
                debug!("Ignoring unparseable minimum date {:?}", raw);
            }
            parsed
        });

        Self {
            location: needle(&criteria.location),
            title: needle(&criteria.title_contains),
            company: needle(&criteria.company_contains),
            min_date,
            cutoff: criteria.max_age_days.map(|days| age_cutoff(today, days)),
        }
    }

    fn matches(&self, listing: &JobListing) -> bool {
        if !contains(listing.location(), &self.location)
            || !contains(listing.title(), &self.title)
            || !contains(listing.company(), &self.company)
        {
            return false;
        }
        on_or_after(listing.posted_on(), self.min_date)
            && on_or_after(listing.posted_on(), self.cutoff)
    }
}

fn needle(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(n.as_str()),
        None => true,
    }
}

/// An active threshold drops undated listings.
fn on_or_after(posted_on: Option<NaiveDate>, threshold: Option<NaiveDate>) -> bool {
    match (threshold, posted_on) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(threshold), Some(date)) => date >= threshold,
    }
}

/// `today - days`, saturating at the ends of the calendar.
pub fn age_cutoff(today: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|age| today.checked_sub_signed(age))
        .unwrap_or(if days > 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Keep the listings that satisfy every set criterion, in input order.
pub fn apply_filters(
    listings: Vec<JobListing>,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<JobListing> {
    if criteria.is_empty() {
        return listings;
    }
    let resolved = ResolvedCriteria::new(criteria, today);
    listings
        .into_iter()
        .filter(|listing| resolved.matches(listing))
        .collect()
}
