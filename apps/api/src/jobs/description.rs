//! Job Description Generator — asks the model for structured sections and renders them
//! into the plain-text description used by the analysis form.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::profile::JobProfile;
use crate::jobs::prompts::{JOB_DESCRIPTION_PROMPT_TEMPLATE, JOB_DESCRIPTION_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;

/// Structured sections returned by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionSections {
    pub role_summary: String,
    #[serde(default)]
    pub key_responsibilities: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_qualifications: Vec<String>,
}

/// Generates a formatted job description for `profile`.
/// The profile must already be validated.
pub async fn generate_job_description(
    profile: &JobProfile,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = build_job_description_prompt(profile);
    let sections = llm
        .call_json::<JobDescriptionSections>(&prompt, &json_system(JOB_DESCRIPTION_ROLE))
        .await
        .map_err(|e| AppError::Llm(format!("Job description generation failed: {e}")))?;

    if sections.role_summary.trim().is_empty() && sections.key_responsibilities.is_empty() {
        return Err(AppError::Llm(
            "Job description generation returned no content".to_string(),
        ));
    }

    info!(
        "Generated job description for '{}' ({} required skills)",
        profile.role(),
        sections.required_skills.len()
    );
    Ok(render_job_description(profile, &sections))
}

fn build_job_description_prompt(profile: &JobProfile) -> String {
    JOB_DESCRIPTION_PROMPT_TEMPLATE
        .replace("{experience}", &profile.experience_label())
        .replace("{role}", profile.role())
}

/// Renders sections as plain text. Empty sections are left out.
pub fn render_job_description(profile: &JobProfile, sections: &JobDescriptionSections) -> String {
    let mut blocks = vec![format!(
        "Job Title: {} ({})",
        profile.role(),
        profile.experience_label()
    )];

    let summary = sections.role_summary.trim();
    if !summary.is_empty() {
        blocks.push(format!("Role Summary\n{summary}"));
    }

    for (heading, items) in [
        ("Key Responsibilities", &sections.key_responsibilities),
        ("Required Skills", &sections.required_skills),
        ("Preferred Qualifications", &sections.preferred_qualifications),
    ] {
        if let Some(list) = bullet_list(items) {
            blocks.push(format!("{heading}\n{list}"));
        }
    }

    blocks.join("\n\n")
}

fn bullet_list(items: &[String]) -> Option<String> {
    let lines: Vec<String> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| format!("- {item}"))
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}
