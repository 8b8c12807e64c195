//! Technical Skills Lookup — the essential technical skills for a role and level.

use serde::Deserialize;

use crate::analysis::comparison::dedupe_skills;
use crate::errors::AppError;
use crate::jobs::profile::JobProfile;
use crate::jobs::prompts::{TECHNICAL_SKILLS_PROMPT_TEMPLATE, TECHNICAL_SKILLS_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TechnicalSkillsOutput {
    technical_skills: Vec<String>,
}

/// Returns deduplicated technical skills for `profile`. The profile must already be validated.
pub async fn get_technical_skills(
    profile: &JobProfile,
    llm: &LlmClient,
) -> Result<Vec<String>, AppError> {
    let prompt = TECHNICAL_SKILLS_PROMPT_TEMPLATE
        .replace("{experience}", &profile.experience_label())
        .replace("{role}", profile.role());

    let output = llm
        .call_json::<TechnicalSkillsOutput>(&prompt, &json_system(TECHNICAL_SKILLS_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Technical skills lookup failed: {e}")))?;

    Ok(dedupe_skills(&output.technical_skills))
}
