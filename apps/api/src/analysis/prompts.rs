// All LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role line for job description skill extraction.
pub const JOB_SKILLS_ROLE: &str =
    "You are an expert in analyzing job descriptions and extracting required skills.";

/// Role line for resume skill extraction.
pub const RESUME_SKILLS_ROLE: &str = "You are an expert resume analyst.";

/// Job description skill extraction prompt.
/// Replace: {scope_instruction}, {text}
pub const JOB_SKILLS_PROMPT_TEMPLATE: &str = r#"Perform a deep analysis of the following job description and identify every skill a candidate would need to be successful in the role.

{scope_instruction}

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["Python", "SQL", "Teamwork"]
}

JOB DESCRIPTION:
{text}"#;

/// Resume skill extraction prompt.
/// Replace: {scope_instruction}, {text}
pub const RESUME_SKILLS_PROMPT_TEMPLATE: &str = r#"Perform a deep analysis of the following resume text and extract a comprehensive list of all skills the candidate demonstrates.

{scope_instruction}

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": ["Python", "Docker", "Communication"]
}

RESUME TEXT:
{text}"#;

/// Role line for learning resource suggestions.
pub const RESOURCES_ROLE: &str =
    "You are an assistant that suggests websites and YouTube channels for learning specific skills.";

/// Resource suggestion prompt. Replace: {skills_list}
pub const RESOURCES_PROMPT_TEMPLATE: &str = r#"For each of the following skills, suggest one or two relevant, high-quality websites and one or two popular YouTube channels. Provide full URLs for websites (e.g. https://www.example.com).

Return a JSON object with this EXACT schema (no extra fields):
{
  "suggestions": [
    {
      "skill": "Docker",
      "websites": ["https://docs.docker.com/get-started/"],
      "youtubeChannels": ["TechWorld with Nana"]
    }
  ]
}

Include exactly one suggestion object per skill, using the skill name as given.

SKILLS:
{skills_list}"#;
