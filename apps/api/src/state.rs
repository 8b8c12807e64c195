use std::sync::Arc;

use crate::analysis::analyzer::SkillAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Used directly by the job description and technical skills endpoints.
    pub llm: LlmClient,
    pub config: Config,
    /// Analysis orchestrator. Production wires LLM-backed collaborators into it.
    pub analyzer: Arc<SkillAnalyzer>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analysis::extraction::SkillExtractor;
    use crate::analysis::resources::ResourceAdvisor;

    /// State with test config, an offline LLM client and the given collaborators.
    pub fn test_state(
        extractor: Arc<dyn SkillExtractor>,
        advisor: Arc<dyn ResourceAdvisor>,
    ) -> AppState {
        let config = Config::for_tests();
        let llm = LlmClient::new(config.llm_settings()).expect("client builds");
        let analyzer = SkillAnalyzer::new(extractor, advisor, config.llm_call_budget());
        AppState {
            llm,
            config,
            analyzer: Arc::new(analyzer),
        }
    }
}
