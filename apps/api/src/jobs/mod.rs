// Role-based helpers: AI-written job descriptions and technical skill lists.
// Unlike analysis, failures here surface to the caller as LLM errors.

pub mod description;
pub mod handlers;
pub mod profile;
pub mod prompts;
pub mod technical_skills;
