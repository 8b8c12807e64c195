//! Skill Comparison — pure, deterministic partition of job skills into matched and missing.
//!
//! Skills are compared on `trim()` + lowercase. The output keeps the first trimmed
//! spelling seen in the job list, in first-appearance order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Result of comparing a job's skill list against a resume's skill list.
///
/// `matched_skills` and `missing_skills` partition `all_job_skills`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillComparison {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub all_job_skills: Vec<String>,
    /// 0 – 100. 100 when the job lists no skills.
    pub score: u32,
}

/// Comparison key for a skill.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Deduplicates skills case-insensitively, keeping the first trimmed spelling.
/// Blank entries are dropped.
pub fn dedupe_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    first_spellings(
        skills
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.trim().is_empty()),
    )
}

/// One trimmed spelling per normalized key, in first-appearance order.
fn first_spellings<'a>(skills: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for skill in skills {
        let trimmed = skill.trim();
        if seen.insert(trimmed.to_lowercase()) {
            unique.push(trimmed.to_string());
        }
    }

    unique
}

/// Compares job skills against resume skills.
///
/// Never fails. An empty job list is a vacuous full match. A blank entry is an ordinary
/// key (`""`) and matches a blank resume entry.
pub fn compare_skills<J, R>(job_skills: &[J], resume_skills: &[R]) -> SkillComparison
where
    J: AsRef<str>,
    R: AsRef<str>,
{
    let all_job_skills = first_spellings(job_skills.iter().map(|s| s.as_ref()));
    let resume_set: HashSet<String> = resume_skills
        .iter()
        .map(|s| normalize_skill(s.as_ref()))
        .collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = all_job_skills
        .iter()
        .cloned()
        .partition(|skill| resume_set.contains(&normalize_skill(skill)));

    let score = match_score(matched_skills.len(), all_job_skills.len());

    SkillComparison {
        matched_skills,
        missing_skills,
        all_job_skills,
        score,
    }
}

/// `round(100 * matched / total)`, or 100 when there is nothing to match.
pub fn match_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}
