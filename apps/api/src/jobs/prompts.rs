// All LLM prompt constants for the Jobs module.

/// Role line for job description writing. Keeps the model on the requested role.
pub const JOB_DESCRIPTION_ROLE: &str = "You are an assistant that only writes job descriptions. \
    The entire response must be based ONLY on the provided job role and experience level. \
    You MUST NOT write a description for a different role: if the role is \"Data Scientist\", \
    write about a Data Scientist, not an \"AI Engineer\" or \"Software Engineer\".";

/// Job description prompt. Replace: {role}, {experience}
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Write a professional, detailed job description for a {role} with {experience} experience.

Return a JSON object with this EXACT schema (no extra fields):
{
  "roleSummary": "A brief, compelling overview of the position.",
  "keyResponsibilities": ["Specific duty or day-to-day task"],
  "requiredSkills": ["Essential technical skill"],
  "preferredQualifications": ["Beneficial but not strictly required skill"]
}

Rules:
- requiredSkills: ONLY technologies, programming languages, frameworks and tools. Do NOT include soft skills such as communication, teamwork or leadership.
- keyResponsibilities must fit a {role} at the {experience} level."#;

/// Role line for the technical skills lookup.
pub const TECHNICAL_SKILLS_ROLE: &str =
    "You are a technical recruiter who knows the core skills of every engineering role.";

/// Technical skills prompt. Replace: {role}, {experience}
pub const TECHNICAL_SKILLS_PROMPT_TEMPLATE: &str = r#"List the most important technical skills for this job.

Job role: {role}
Experience level: {experience}

Focus ONLY on technologies, programming languages, frameworks, tools and core technical concepts. Do NOT include soft skills like "communication" or "teamwork". Base the answer ONLY on the role and experience level above.

Return a JSON object with this EXACT schema (no extra fields):
{
  "technicalSkills": ["Python", "PyTorch"]
}"#;
