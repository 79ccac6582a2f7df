//! Resume ingestion — PDF text extraction and structured profile extraction.

pub mod extract;
pub mod handlers;
pub mod profile;
pub mod prompts;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured summary of an uploaded resume.
///
/// Created once per uploaded document and overwritten wholesale on re-upload;
/// never partially merged. The default value (all collections empty,
/// `years_experience` zero) doubles as the fallback when extraction fails,
/// so callers always hold a well-formed profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProfile {
    pub technical_skills: BTreeSet<String>,
    pub soft_skills: BTreeSet<String>,
    pub years_experience: f32,
    pub job_titles: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

impl ResumeProfile {
    pub fn is_empty(&self) -> bool {
        self.technical_skills.is_empty()
            && self.soft_skills.is_empty()
            && self.years_experience == 0.0
            && self.job_titles.is_empty()
            && self.education.is_empty()
            && self.certifications.is_empty()
    }

    /// Technical skills followed by soft skills, each set in its own order.
    pub fn all_skills(&self) -> Vec<String> {
        self.technical_skills
            .iter()
            .chain(self.soft_skills.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        let profile = ResumeProfile::default();
        assert!(profile.is_empty());
        assert_eq!(profile.years_experience, 0.0);
        assert!(profile.all_skills().is_empty());
    }

    #[test]
    fn test_all_skills_combines_both_sets() {
        let mut profile = ResumeProfile::default();
        profile.technical_skills.insert("Rust".to_string());
        profile.technical_skills.insert("SQL".to_string());
        profile.soft_skills.insert("Mentoring".to_string());

        let skills = profile.all_skills();
        assert_eq!(skills.len(), 3);
        assert!(skills.contains(&"Rust".to_string()));
        assert!(skills.contains(&"Mentoring".to_string()));
    }

    #[test]
    fn test_skill_sets_deduplicate_on_deserialize() {
        let json = r#"{
            "technical_skills": ["Python", "Python", "SQL"],
            "soft_skills": [],
            "years_experience": 2.5,
            "job_titles": ["Backend Engineer"],
            "education": [],
            "certifications": []
        }"#;
        let profile: ResumeProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.technical_skills.len(), 2);
        assert_eq!(profile.years_experience, 2.5);
    }
}
