//! Skill Extraction — the hosted model turns free text into a flat skill list.
//!
//! `SkillExtractor` is the seam: the analyzer holds an `Arc<dyn SkillExtractor>`,
//! production wires in `LlmSkillExtractor`, tests wire in doubles.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{
    JOB_SKILLS_PROMPT_TEMPLATE, JOB_SKILLS_ROLE, RESUME_SKILLS_PROMPT_TEMPLATE,
    RESUME_SKILLS_ROLE,
};
use crate::llm_client::prompts::{json_system, SKILL_SCOPE_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};

/// Which document a piece of text came from. Selects the extraction prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillSource {
    JobDescription,
    Resume,
}

impl fmt::Display for SkillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillSource::JobDescription => write!(f, "job description"),
            SkillSource::Resume => write!(f, "resume"),
        }
    }
}

/// Output contract of skill extraction: `{ "skills": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub skills: Vec<String>,
}

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    async fn extract_skills(
        &self,
        source: SkillSource,
        text: &str,
    ) -> Result<ExtractedSkills, LlmError>;
}

/// Skill extraction backed by the hosted model.
pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract_skills(
        &self,
        source: SkillSource,
        text: &str,
    ) -> Result<ExtractedSkills, LlmError> {
        let (prompt, system) = build_extraction_prompt(source, text);
        self.0.call_json::<ExtractedSkills>(&prompt, &system).await
    }
}

fn build_extraction_prompt(source: SkillSource, text: &str) -> (String, String) {
    let (template, role) = match source {
        SkillSource::JobDescription => (JOB_SKILLS_PROMPT_TEMPLATE, JOB_SKILLS_ROLE),
        SkillSource::Resume => (RESUME_SKILLS_PROMPT_TEMPLATE, RESUME_SKILLS_ROLE),
    };
    // {text} last so user content can never inject the scope placeholder
    let prompt = template
        .replace("{scope_instruction}", SKILL_SCOPE_INSTRUCTION)
        .replace("{text}", text);
    (prompt, json_system(role))
}
