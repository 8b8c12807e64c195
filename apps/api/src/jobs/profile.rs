//! Job profile — the role and experience level a generated description targets.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
    pub role: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Required for mid and senior levels; ignored for entry level.
    pub years_of_experience: Option<u32>,
}

impl JobProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.role.trim().is_empty() {
            return Err(AppError::Validation("role cannot be empty".to_string()));
        }
        if self.experience_level != ExperienceLevel::Entry
            && !matches!(self.years_of_experience, Some(years) if years > 0)
        {
            return Err(AppError::Validation(
                "yearsOfExperience must be a positive number for mid and senior levels"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn role(&self) -> &str {
        self.role.trim()
    }

    /// Human-readable experience, e.g. "Entry-level" or "Senior (8 years)".
    pub fn experience_label(&self) -> String {
        let years = self.years_of_experience.unwrap_or_default();
        let unit = if years == 1 { "year" } else { "years" };
        match self.experience_level {
            ExperienceLevel::Entry => "Entry-level".to_string(),
            ExperienceLevel::Mid => format!("Mid-level ({years} {unit})"),
            ExperienceLevel::Senior => format!("Senior ({years} {unit})"),
        }
    }
}
