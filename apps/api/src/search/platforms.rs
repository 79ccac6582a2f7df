//! Platform lookup table — per-platform search-URL rules and experience
//! encodings. These are business rules, not a framework: one pure function
//! per platform, dispatched by a plain enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location choices offered by the search form.
pub const CITY_CHOICES: &[&str] = &[
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Chennai",
    "Pune",
    "Kolkata",
    "Ahmedabad",
    "Gurgaon",
    "Noida",
    "Remote",
    "Anywhere",
];

/// Default selections when a search request leaves them out.
pub const DEFAULT_LOCATIONS: &[&str] = &["Bangalore", "Remote"];
pub const DEFAULT_PLATFORMS: [Platform; 2] = [Platform::Naukri, Platform::LinkedIn];
pub const DEFAULT_EXPERIENCE_YEARS: u32 = 3;

/// A supported job platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Naukri,
    Indeed,
    Monster,
    LinkedIn,
    PayScale,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Naukri,
        Platform::Indeed,
        Platform::Monster,
        Platform::LinkedIn,
        Platform::PayScale,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Naukri => "Naukri",
            Platform::Indeed => "Indeed",
            Platform::Monster => "Monster",
            Platform::LinkedIn => "LinkedIn",
            Platform::PayScale => "PayScale",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Platform::Naukri => "https://www.naukri.com",
            Platform::Indeed => "https://www.indeed.com",
            Platform::Monster => "https://www.monsterindia.com",
            Platform::LinkedIn => "https://www.linkedin.com/jobs",
            Platform::PayScale => "https://www.payscale.com",
        }
    }

    /// Builds the platform-specific search URL for a title, location, and
    /// experience. Each platform encodes experience its own way; PayScale
    /// ignores location and experience entirely.
    pub fn search_url(&self, job_title: &str, location: &str, years: u32) -> String {
        let title = slug(job_title);
        let location = slug(location);
        let base = self.base_url();

        match self {
            Platform::Naukri => {
                format!("{base}/{title}-jobs-in-{location}?experience={years}")
            }
            Platform::Indeed => {
                format!(
                    "{base}/jobs?q={title}&l={location}&explvl={}",
                    indeed_level(years)
                )
            }
            Platform::Monster => {
                format!(
                    "{base}/search/{title}-jobs-in-{location}?exp={years}-{}",
                    years + 2
                )
            }
            Platform::LinkedIn => {
                format!(
                    "{base}/search/?keywords={title}&location={location}&f_E={}",
                    linkedin_code(years)
                )
            }
            Platform::PayScale => format!("{base}/research/IN/Job={title}/Salary"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercased, trimmed, spaces replaced with hyphens.
pub fn slug(input: &str) -> String {
    input.trim().to_lowercase().replace(' ', "-")
}

/// Indeed experience-level bucket.
pub fn indeed_level(years: u32) -> &'static str {
    if years < 1 {
        "entry_level"
    } else if years < 3 {
        "mid_level"
    } else {
        "senior_level"
    }
}

/// LinkedIn `f_E` experience code.
pub fn linkedin_code(years: u32) -> &'static str {
    if years < 2 {
        "1"
    } else if years < 5 {
        "2"
    } else if years < 10 {
        "3"
    } else {
        "4"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indeed_level_buckets() {
        assert_eq!(indeed_level(0), "entry_level");
        assert_eq!(indeed_level(1), "mid_level");
        assert_eq!(indeed_level(2), "mid_level");
        assert_eq!(indeed_level(3), "senior_level");
        assert_eq!(indeed_level(30), "senior_level");
    }

    #[test]
    fn test_linkedin_code_buckets() {
        assert_eq!(linkedin_code(0), "1");
        assert_eq!(linkedin_code(1), "1");
        assert_eq!(linkedin_code(2), "2");
        assert_eq!(linkedin_code(4), "2");
        assert_eq!(linkedin_code(5), "3");
        assert_eq!(linkedin_code(9), "3");
        assert_eq!(linkedin_code(10), "4");
        assert_eq!(linkedin_code(25), "4");
    }

    #[test]
    fn test_slug_lowercases_and_hyphenates() {
        assert_eq!(slug("  Data Engineer "), "data-engineer");
        assert_eq!(slug("Remote"), "remote");
    }

    #[test]
    fn test_naukri_url() {
        let url = Platform::Naukri.search_url("Data Engineer", "Pune", 4);
        assert_eq!(
            url,
            "https://www.naukri.com/data-engineer-jobs-in-pune?experience=4"
        );
    }

    #[test]
    fn test_indeed_url_carries_bucketed_level() {
        let url = Platform::Indeed.search_url("Software Engineer", "Remote", 2);
        assert_eq!(
            url,
            "https://www.indeed.com/jobs?q=software-engineer&l=remote&explvl=mid_level"
        );
    }

    #[test]
    fn test_monster_url_is_a_two_year_range() {
        let url = Platform::Monster.search_url("QA Engineer", "Chennai", 5);
        assert_eq!(
            url,
            "https://www.monsterindia.com/search/qa-engineer-jobs-in-chennai?exp=5-7"
        );
    }

    #[test]
    fn test_linkedin_url_uses_experience_code() {
        let url = Platform::LinkedIn.search_url("ML Engineer", "Bangalore", 7);
        assert_eq!(
            url,
            "https://www.linkedin.com/jobs/search/?keywords=ml-engineer&location=bangalore&f_E=3"
        );
    }

    #[test]
    fn test_payscale_url_ignores_location_and_experience() {
        let a = Platform::PayScale.search_url("Data Scientist", "Mumbai", 1);
        let b = Platform::PayScale.search_url("Data Scientist", "Delhi", 12);
        assert_eq!(a, b);
        assert_eq!(
            a,
            "https://www.payscale.com/research/IN/Job=data-scientist/Salary"
        );
    }

    #[test]
    fn test_platform_serde_round_trip() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.name()));
            let back: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(back, platform);
        }
    }
}
