use crate::types::{JobListing, SortOrder};

/// Stable sort by posted date. Undated listings compare as older than any
/// dated one.
pub fn sort_listings(mut listings: Vec<JobListing>, order: SortOrder) -> Vec<JobListing> {
    match order {
        SortOrder::Descending => listings.sort_by(|a, b| b.posted_on().cmp(&a.posted_on())),
        SortOrder::Ascending => listings.sort_by_key(JobListing::posted_on),
    }
    listings
}
