use crate::types::JobListing;
use std::collections::HashSet;

/// Case-insensitive identity of a listing. `Date Posted` is left out so a
/// re-posted listing still counts as the same job.
fn listing_key(listing: &JobListing) -> (String, String, String) {
    (
        listing.title().to_lowercase(),
        listing.company().to_lowercase(),
        listing.location().to_lowercase(),
    )
}

/// Drop listings whose key was already seen, keeping the first occurrence.
pub fn dedup(listings: Vec<JobListing>) -> Vec<JobListing> {
    let mut seen = HashSet::new();
    listings
        .into_iter()
        .filter(|listing| seen.insert(listing_key(listing)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_of_case_insensitive_duplicates() {
        let listings = vec![
            JobListing::new("Engineer", "Acme", "NYC", "Oct 1 2025"),
            JobListing::new("engineer", "ACME", "nyc", "Oct 2 2025"),
            JobListing::new("Nurse", "MedCo", "LA", "not-a-date"),
        ];

        let out = dedup(listings);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date_posted(), "Oct 1 2025");
        assert_eq!(out[1].title(), "Nurse");
    }

    #[test]
    fn test_different_location_is_not_a_duplicate() {
        let listings = vec![
            JobListing::new("Engineer", "Acme", "NYC", ""),
            JobListing::new("Engineer", "Acme", "Boston", ""),
        ];
        assert_eq!(dedup(listings).len(), 2);
    }

    #[test]
    fn test_preserves_input_order() {
        let listings = vec![
            JobListing::new("C", "x", "y", ""),
            JobListing::new("A", "x", "y", ""),
            JobListing::new("c", "X", "Y", ""),
            JobListing::new("B", "x", "y", ""),
        ];
        let titles: Vec<_> = dedup(listings)
            .iter()
            .map(|l| l.title().to_string())
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_idempotent() {
        let listings = vec![
            JobListing::new("Engineer", "Acme", "NYC", "Oct 1 2025"),
            JobListing::new("ENGINEER", "acme", "NYC", ""),
            JobListing::new("Analyst", "Globex", "Remote", "2025-09-15"),
            JobListing::new("analyst", "globex", "remote", "2025-09-16"),
        ];
        let once = dedup(listings);
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }
}
