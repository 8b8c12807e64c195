// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction shared by both skill extraction prompts.
pub const SKILL_SCOPE_INSTRUCTION: &str = "\
    Identify ALL skills: technical skills (programming languages, frameworks, libraries, \
    tools, cloud platforms, databases) and soft skills (e.g. Teamwork, Communication, \
    Problem-Solving). Return a FLAT list. If the text is empty or contains no skills, \
    return an empty array.";

/// Builds a system prompt from a role description plus the JSON-only rules.
pub fn json_system(role: &str) -> String {
    format!("{role} {JSON_ONLY_SYSTEM}")
}
