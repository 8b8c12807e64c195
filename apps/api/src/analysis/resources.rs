//! Resource Suggestion — learning websites and YouTube channels for missing skills.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{RESOURCES_PROMPT_TEMPLATE, RESOURCES_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::{LlmClient, LlmError};

/// Learning resources for one skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSuggestion {
    pub skill: String,
    #[serde(default)]
    pub websites: Vec<String>,
    #[serde(default)]
    pub youtube_channels: Vec<String>,
}

/// Output contract of resource suggestion: `{ "suggestions": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedResources {
    pub suggestions: Vec<ResourceSuggestion>,
}

#[async_trait]
pub trait ResourceAdvisor: Send + Sync {
    async fn suggest_resources(
        &self,
        missing_skills: &[String],
    ) -> Result<SuggestedResources, LlmError>;
}

/// Resource suggestion backed by the hosted model.
pub struct LlmResourceAdvisor(pub LlmClient);

#[async_trait]
impl ResourceAdvisor for LlmResourceAdvisor {
    async fn suggest_resources(
        &self,
        missing_skills: &[String],
    ) -> Result<SuggestedResources, LlmError> {
        if missing_skills.is_empty() {
            return Ok(SuggestedResources::default());
        }
        let prompt = build_resources_prompt(missing_skills);
        self.0
            .call_json::<SuggestedResources>(&prompt, &json_system(RESOURCES_ROLE))
            .await
    }
}

fn build_resources_prompt(missing_skills: &[String]) -> String {
    let skills_list = missing_skills
        .iter()
        .map(|s| format!("- {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    RESOURCES_PROMPT_TEMPLATE.replace("{skills_list}", &skills_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_deserialize_camel_case() {
        let json = r#"{
            "suggestions": [
                {
                    "skill": "Kubernetes",
                    "websites": ["https://kubernetes.io/docs/tutorials/"],
                    "youtubeChannels": ["TechWorld with Nana"]
                }
            ]
        }"#;
        let parsed: SuggestedResources = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.suggestions.len(), 1);
        assert_eq!(parsed.suggestions[0].skill, "Kubernetes");
        assert_eq!(parsed.suggestions[0].youtube_channels, vec!["TechWorld with Nana"]);
    }

    #[test]
    fn test_missing_resource_lists_default_to_empty() {
        let parsed: ResourceSuggestion = serde_json::from_str(r#"{"skill": "SQL"}"#).unwrap();
        assert!(parsed.websites.is_empty());
        assert!(parsed.youtube_channels.is_empty());
    }

    #[test]
    fn test_prompt_lists_each_skill() {
        let prompt = build_resources_prompt(&["Docker".to_string(), "GraphQL".to_string()]);
        assert!(prompt.contains("SKILLS:\n- Docker\n- GraphQL"));
    }
}
