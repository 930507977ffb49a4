use serde::{Deserialize, Serialize};

use crate::matching::RequiredSkills;

/// Role being screened for: a free-text description and the skills it demands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOpening {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: RequiredSkills,
}

impl JobOpening {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            required_skills: RequiredSkills::new(),
        }
    }

    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for skill in skills {
            self.required_skills.insert(skill.as_ref());
        }
        self
    }

    /// Normalize and add a required skill. Blank and duplicate entries are ignored.
    pub fn add_required_skill(&mut self, raw: &str) -> bool {
        self.required_skills.insert(raw)
    }

    pub fn remove_required_skill(&mut self, skill: &str) -> bool {
        self.required_skills.remove(skill)
    }

    /// Apply a partial update. A provided skill list replaces the current one.
    pub fn apply(&mut self, update: JobUpdate) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(skills) = update.required_skills {
            self.required_skills = skills.into_iter().collect();
        }
    }
}

/// Patch payload for a job opening; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_required_skill_normalizes_and_skips_blanks() {
        let mut job = JobOpening::new("Backend engineer");

        assert!(job.add_required_skill("  Node.JS "));
        assert!(!job.add_required_skill("node.js"));
        assert!(!job.add_required_skill("   "));
        assert!(job.add_required_skill("C#"));

        assert_eq!(job.required_skills.as_slice(), ["node.js", "c#"]);
    }

    #[test]
    fn apply_replaces_only_provided_fields() {
        let mut job = JobOpening::new("Data engineer").with_required_skills(["python"]);

        job.apply(JobUpdate {
            description: None,
            required_skills: Some(vec!["SQL".to_string(), "Airflow".to_string()]),
        });

        assert_eq!(job.description, "Data engineer");
        assert_eq!(job.required_skills.as_slice(), ["sql", "airflow"]);

        job.apply(JobUpdate {
            description: Some("Analytics engineer".to_string()),
            required_skills: None,
        });

        assert_eq!(job.description, "Analytics engineer");
        assert_eq!(job.required_skills.len(), 2);
    }

    #[test]
    fn remove_required_skill_reports_absence() {
        let mut job = JobOpening::default().with_required_skills(["react", "css"]);

        assert!(job.remove_required_skill("react"));
        assert!(!job.remove_required_skill("react"));
        assert_eq!(job.required_skills.as_slice(), ["css"]);
    }
}
