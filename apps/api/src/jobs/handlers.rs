//! Axum route handlers for the Jobs API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::description::generate_job_description;
use crate::jobs::profile::JobProfile;
use crate::jobs::technical_skills::get_technical_skills;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionResponse {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkillsResponse {
    pub technical_skills: Vec<String>,
}

/// POST /api/v1/job-descriptions
///
/// Writes a job description for a role and experience level.
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    Json(profile): Json<JobProfile>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    profile.validate()?;
    let job_description = generate_job_description(&profile, &state.llm).await?;
    Ok(Json(JobDescriptionResponse { job_description }))
}

/// POST /api/v1/technical-skills
///
/// Lists the essential technical skills for a role and experience level.
pub async fn handle_technical_skills(
    State(state): State<AppState>,
    Json(profile): Json<JobProfile>,
) -> Result<Json<TechnicalSkillsResponse>, AppError> {
    profile.validate()?;
    let technical_skills = get_technical_skills(&profile, &state.llm).await?;
    Ok(Json(TechnicalSkillsResponse { technical_skills }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::analysis::analyzer::tests::{CountingAdvisor, Script, ScriptedExtractor};
    use crate::jobs::profile::ExperienceLevel;
    use crate::state::tests::test_state;

    fn state() -> AppState {
        test_state(
            Arc::new(ScriptedExtractor::new(Script::Fail, Script::Fail)),
            Arc::new(CountingAdvisor::new()),
        )
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_role_before_model_call() {
        let result = handle_generate_job_description(
            State(state()),
            Json(JobProfile {
                role: String::new(),
                experience_level: ExperienceLevel::Entry,
                years_of_experience: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_technical_skills_rejects_missing_years() {
        let result = handle_technical_skills(
            State(state()),
            Json(JobProfile {
                role: "Platform Engineer".to_string(),
                experience_level: ExperienceLevel::Mid,
                years_of_experience: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
