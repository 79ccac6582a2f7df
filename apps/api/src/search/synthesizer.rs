//! Listing synthesis — fabricates demonstration listings for every
//! platform × location pair and ranks them by match score.
//!
//! Pure function of the request (plus today's date): no network, no state.
//! Real job-board integration is out of scope; every listing is synthetic.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::search::platforms::Platform;

/// Weight of skill overlap vs experience proximity in the blended score.
pub const SKILL_WEIGHT: f64 = 0.7;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;

/// How many of the candidate's skills a fabricated listing advertises,
/// before the platform-specialized skill is appended.
const LISTED_SKILL_COUNT: usize = 3;

/// A synthetic job-posting record used for demonstration ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience_label: String,
    pub skills: Vec<String>,
    pub salary_label: String,
    pub url: String,
    pub platform: Platform,
    pub posted_date: NaiveDate,
    pub match_score: f64,
}

/// Search criteria. All fields are resolved (defaults applied) by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub job_title: String,
    pub locations: Vec<String>,
    pub experience_years: u32,
    pub skills: Vec<String>,
    pub platforms: Vec<Platform>,
}

/// Fabricates one listing per platform × location pair and returns them
/// sorted by descending match score, platform name ascending on ties.
pub fn synthesize_listings(criteria: &SearchCriteria, today: NaiveDate) -> Vec<JobListing> {
    let mut listings = Vec::with_capacity(criteria.platforms.len() * criteria.locations.len());

    for platform in &criteria.platforms {
        for location in &criteria.locations {
            listings.push(fabricate_listing(
                criteria,
                *platform,
                location,
                listings.len(),
                today,
            ));
        }
    }

    listings.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.platform.name().cmp(b.platform.name()))
    });

    listings
}

/// Builds the n-th fabricated listing of this search. Listings advertise the
/// requested experience and a slice of the candidate's own skills plus one
/// platform-specialized skill, so scores vary only through skill overlap.
fn fabricate_listing(
    criteria: &SearchCriteria,
    platform: Platform,
    location: &str,
    ordinal: usize,
    today: NaiveDate,
) -> JobListing {
    let years = criteria.experience_years;

    let skills: Vec<String> = criteria
        .skills
        .iter()
        .take(LISTED_SKILL_COUNT)
        .cloned()
        .chain(std::iter::once(format!("{platform}-Specialized")))
        .collect();

    let match_score = match_score(&criteria.skills, &skills, years, years);

    JobListing {
        title: format!("{} ({platform})", criteria.job_title),
        company: format!("Sample Company {}", ordinal + 1),
        location: location.to_string(),
        experience_label: format!("{years}+ years"),
        skills,
        salary_label: format!("₹{}-{} LPA", 10 + 2 * ordinal, 15 + 3 * ordinal),
        url: platform.search_url(&criteria.job_title, location, years),
        platform,
        posted_date: today,
        match_score,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Match scoring
// ────────────────────────────────────────────────────────────────────────────

/// Percentage of the listing's skills the candidate also has.
/// Exact, case-sensitive matching over the listing's skill count.
pub fn skill_overlap_pct(candidate: &[String], listed: &[String]) -> f64 {
    if listed.is_empty() {
        return 0.0;
    }
    let candidate: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let listed_unique: HashSet<&str> = listed.iter().map(String::as_str).collect();
    let matched = listed_unique.intersection(&candidate).count();
    matched as f64 / listed.len() as f64 * 100.0
}

/// 100 minus 10 points per year of mismatch. Deliberately NOT clamped below
/// zero: a large mismatch is allowed to drag the blend under the skills-only
/// floor (preserved as observed behavior).
pub fn experience_proximity_pct(requested_years: u32, listed_years: u32) -> f64 {
    100.0 - (f64::from(requested_years) - f64::from(listed_years)).abs() * 10.0
}

/// Blended match score, capped at 100.
pub fn match_score(
    candidate_skills: &[String],
    listed_skills: &[String],
    requested_years: u32,
    listed_years: u32,
) -> f64 {
    let blend = SKILL_WEIGHT * skill_overlap_pct(candidate_skills, listed_skills)
        + EXPERIENCE_WEIGHT * experience_proximity_pct(requested_years, listed_years);
    blend.min(100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn criteria(platforms: Vec<Platform>, locations: &[&str]) -> SearchCriteria {
        SearchCriteria {
            job_title: "Data Engineer".to_string(),
            locations: strings(locations),
            experience_years: 3,
            skills: strings(&["Python", "SQL", "Spark", "Airflow"]),
            platforms,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_documented_scoring_scenario() {
        // skills [Python, SQL] vs listing [Python, SQL, Naukri-Specialized],
        // matching experience: 0.7 * 66.7 + 0.3 * 100 ≈ 76.7
        let score = match_score(
            &strings(&["Python", "SQL"]),
            &strings(&["Python", "SQL", "Naukri-Specialized"]),
            3,
            3,
        );
        assert!((score - 76.666).abs() < 0.1, "got {score}");
    }

    #[test]
    fn test_skill_overlap_uses_listing_length_as_denominator() {
        let pct = skill_overlap_pct(
            &strings(&["Python", "SQL", "Go", "Rust"]),
            &strings(&["Python", "SQL"]),
        );
        assert_eq!(pct, 100.0);
    }

    #[test]
    fn test_skill_overlap_is_case_sensitive() {
        let pct = skill_overlap_pct(&strings(&["python"]), &strings(&["Python"]));
        assert_eq!(pct, 0.0);
    }

    #[test]
    fn test_skill_overlap_empty_listing_is_zero() {
        assert_eq!(skill_overlap_pct(&strings(&["Python"]), &[]), 0.0);
    }

    #[test]
    fn test_experience_proximity_degrades_ten_points_per_year() {
        assert_eq!(experience_proximity_pct(3, 3), 100.0);
        assert_eq!(experience_proximity_pct(5, 3), 80.0);
        assert_eq!(experience_proximity_pct(3, 5), 80.0);
    }

    #[test]
    fn test_experience_proximity_goes_negative_unclamped() {
        // 12-year mismatch: 100 - 120 = -20, preserved as observed
        assert_eq!(experience_proximity_pct(12, 0), -20.0);
    }

    #[test]
    fn test_match_score_capped_at_100() {
        let score = match_score(&strings(&["Python"]), &strings(&["Python"]), 3, 3);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_all_synthesized_scores_within_bounds() {
        let criteria = criteria(Platform::ALL.to_vec(), &["Bangalore", "Remote", "Pune"]);
        for listing in synthesize_listings(&criteria, today()) {
            assert!(
                (0.0..=100.0).contains(&listing.match_score),
                "score {} out of bounds for {}",
                listing.match_score,
                listing.url
            );
        }
    }

    #[test]
    fn test_cross_product_cardinality() {
        let criteria = criteria(
            vec![Platform::Naukri, Platform::Indeed],
            &["Bangalore", "Remote", "Delhi"],
        );
        assert_eq!(synthesize_listings(&criteria, today()).len(), 6);
    }

    #[test]
    fn test_listings_sorted_by_score_then_platform_name() {
        let criteria = criteria(Platform::ALL.to_vec(), &["Bangalore", "Remote"]);
        let listings = synthesize_listings(&criteria, today());

        for pair in listings.windows(2) {
            assert!(
                pair[0].match_score >= pair[1].match_score,
                "scores must be non-increasing"
            );
            if pair[0].match_score == pair[1].match_score {
                assert!(
                    pair[0].platform.name() <= pair[1].platform.name(),
                    "ties must order by platform name ascending"
                );
            }
        }
    }

    #[test]
    fn test_fabricated_listing_fields() {
        let criteria = criteria(vec![Platform::Naukri], &["Pune"]);
        let listings = synthesize_listings(&criteria, today());
        let listing = &listings[0];

        assert_eq!(listing.title, "Data Engineer (Naukri)");
        assert_eq!(listing.company, "Sample Company 1");
        assert_eq!(listing.experience_label, "3+ years");
        assert_eq!(listing.salary_label, "₹10-15 LPA");
        assert_eq!(listing.posted_date, today());
        assert_eq!(
            listing.skills,
            strings(&["Python", "SQL", "Spark", "Naukri-Specialized"])
        );
    }

    #[test]
    fn test_salary_label_progression() {
        let criteria = criteria(vec![Platform::Naukri], &["Pune", "Delhi", "Mumbai"]);
        // labels are assigned in fabrication order, before sorting
        let mut listings = synthesize_listings(&criteria, today());
        listings.sort_by(|a, b| a.company.cmp(&b.company));
        assert_eq!(listings[0].salary_label, "₹10-15 LPA");
        assert_eq!(listings[1].salary_label, "₹12-18 LPA");
        assert_eq!(listings[2].salary_label, "₹14-21 LPA");
    }

    #[test]
    fn test_fewer_candidate_skills_than_listing_slice() {
        let mut c = criteria(vec![Platform::Indeed], &["Remote"]);
        c.skills = strings(&["Python"]);
        let listings = synthesize_listings(&c, today());
        assert_eq!(
            listings[0].skills,
            strings(&["Python", "Indeed-Specialized"])
        );
        // overlap 1/2, matching experience: 0.7*50 + 0.3*100 = 65
        assert!((listings[0].match_score - 65.0).abs() < 1e-9);
    }
}
