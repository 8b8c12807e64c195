// Skill analysis: PDF text, skill extraction, comparison, resource suggestions.
// All LLM calls go through llm_client. Collaborators sit behind traits so the
// comparator and orchestration run in tests without a model.

pub mod analyzer;
pub mod comparison;
pub mod extraction;
pub mod handlers;
pub mod pdf_text;
pub mod prompts;
pub mod resources;
pub mod subskills;
