//! Skill Analysis — orchestrates one resume-vs-job analysis.
//!
//! Flow: PDF text → (job skills ‖ resume skills) → sub-skill filter → compare →
//!       resource suggestions (only when skills are missing).
//!
//! Collaborator failures never escape: a failed or timed-out extraction becomes an
//! empty skill list and a failed suggestion call becomes an empty suggestion list.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::analysis::comparison::compare_skills;
use crate::analysis::extraction::{ExtractedSkills, SkillExtractor, SkillSource};
use crate::analysis::pdf_text::extract_pdf_text;
use crate::analysis::resources::{ResourceAdvisor, ResourceSuggestion, SuggestedResources};
use crate::analysis::subskills::SubSkillMap;
use crate::llm_client::LlmError;

/// Full report returned to callers of an analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub all_job_skills: Vec<String>,
    pub score: u32,
    pub resource_suggestions: Vec<ResourceSuggestion>,
}

/// Runs analyses against injected collaborators. Holds no per-request state.
///
/// `call_timeout` bounds each collaborator call as a whole, retries included, and the
/// PDF parse.
pub struct SkillAnalyzer {
    extractor: Arc<dyn SkillExtractor>,
    advisor: Arc<dyn ResourceAdvisor>,
    subskills: Option<SubSkillMap>,
    call_timeout: Duration,
}

impl SkillAnalyzer {
    pub fn new(
        extractor: Arc<dyn SkillExtractor>,
        advisor: Arc<dyn ResourceAdvisor>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            extractor,
            advisor,
            subskills: None,
            call_timeout,
        }
    }

    /// Enables the sub-skill filter on both skill lists before comparison.
    pub fn with_subskill_filter(mut self, map: SubSkillMap) -> Self {
        self.subskills = Some(map);
        self
    }

    /// Analyzes an uploaded PDF resume. Text extraction happens here, before any model call.
    pub async fn analyze_pdf(&self, job_description: &str, pdf_bytes: Vec<u8>) -> AnalysisReport {
        let resume_text = extract_pdf_text(pdf_bytes, self.call_timeout).await;
        if resume_text.is_empty() {
            warn!("Resume text could not be extracted; resume skills will be empty");
        }
        self.analyze(job_description, &resume_text).await
    }

    /// Analyzes plain resume text against a job description.
    ///
    /// Steps:
    /// 1. extract job + resume skills concurrently (each bounded by the call timeout)
    /// 2. apply the sub-skill filter, if configured
    /// 3. compare_skills() → matched / missing / score
    /// 4. suggest resources for missing skills (skipped when nothing is missing)
    pub async fn analyze(&self, job_description: &str, resume_text: &str) -> AnalysisReport {
        let analysis_id = Uuid::new_v4();
        info!("Starting analysis {analysis_id}");

        let (job, resume) = tokio::join!(
            self.extract_skills(SkillSource::JobDescription, job_description),
            self.extract_skills(SkillSource::Resume, resume_text),
        );

        let (job_skills, resume_skills) = match &self.subskills {
            Some(map) => (map.filter(&job.skills), map.filter(&resume.skills)),
            None => (job.skills, resume.skills),
        };

        let comparison = compare_skills(&job_skills, &resume_skills);
        info!(
            "Analysis {analysis_id}: {}/{} job skills matched (score {})",
            comparison.matched_skills.len(),
            comparison.all_job_skills.len(),
            comparison.score
        );

        let suggestions = self.suggest_resources(&comparison.missing_skills).await;

        AnalysisReport {
            analysis_id,
            generated_at: Utc::now(),
            matched_skills: comparison.matched_skills,
            missing_skills: comparison.missing_skills,
            all_job_skills: comparison.all_job_skills,
            score: comparison.score,
            resource_suggestions: suggestions.suggestions,
        }
    }

    /// Extracts skills from `text`. Never fails: blank text, collaborator errors and
    /// timeouts all yield `{ skills: [] }`.
    pub async fn extract_skills(&self, source: SkillSource, text: &str) -> ExtractedSkills {
        if text.trim().is_empty() {
            debug!("Skipping {source} skill extraction: no text");
            return ExtractedSkills::default();
        }

        let call = self.extractor.extract_skills(source, text);
        match bounded(self.call_timeout, call).await {
            Ok(extracted) => {
                debug!("Extracted {} {source} skills", extracted.skills.len());
                extracted
            }
            Err(reason) => {
                warn!("{source} skill extraction failed, using empty list: {reason}");
                ExtractedSkills::default()
            }
        }
    }

    /// Suggests learning resources. Never fails and never calls the advisor for an empty list.
    pub async fn suggest_resources(&self, missing_skills: &[String]) -> SuggestedResources {
        if missing_skills.is_empty() {
            return SuggestedResources::default();
        }

        let call = self.advisor.suggest_resources(missing_skills);
        match bounded(self.call_timeout, call).await {
            Ok(resources) => resources,
            Err(reason) => {
                warn!("Resource suggestion failed, using empty list: {reason}");
                SuggestedResources::default()
            }
        }
    }
}

/// Awaits a collaborator call with an upper bound, folding timeout into the error text.
async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, String>
where
    F: Future<Output = Result<T, LlmError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err(format!("timed out after {}s", limit.as_secs_f32())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::analysis::pdf_text::tests::one_page_pdf;

    /// Scripted behaviour for one side of extraction.
    #[derive(Clone)]
    pub enum Script {
        Skills(Vec<&'static str>),
        Fail,
        Hang,
    }

    /// Skill extractor double with per-source scripts and call counters.
    pub struct ScriptedExtractor {
        pub job: Script,
        pub resume: Script,
        pub calls: AtomicUsize,
    }

    impl ScriptedExtractor {
        pub fn new(job: Script, resume: Script) -> Self {
            Self {
                job,
                resume,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SkillExtractor for ScriptedExtractor {
        async fn extract_skills(
            &self,
            source: SkillSource,
            _text: &str,
        ) -> Result<ExtractedSkills, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let script = match source {
                SkillSource::JobDescription => &self.job,
                SkillSource::Resume => &self.resume,
            };
            match script {
                Script::Skills(skills) => Ok(ExtractedSkills {
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                }),
                Script::Fail => Err(LlmError::Api {
                    status: 400,
                    message: "schema validation failed".to_string(),
                }),
                Script::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    /// Resource advisor double that records the skills it was asked about.
    pub struct CountingAdvisor {
        pub calls: AtomicUsize,
        pub fail: bool,
    }

    impl CountingAdvisor {
        pub fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ResourceAdvisor for CountingAdvisor {
        async fn suggest_resources(
            &self,
            missing_skills: &[String],
        ) -> Result<SuggestedResources, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LlmError::EmptyContent);
            }
            Ok(SuggestedResources {
                suggestions: missing_skills
                    .iter()
                    .map(|skill| ResourceSuggestion {
                        skill: skill.clone(),
                        websites: vec![format!("https://learn.example.com/{}", skill.to_lowercase())],
                        youtube_channels: vec!["Example Academy".to_string()],
                    })
                    .collect(),
            })
        }
    }

    fn analyzer(
        extractor: Arc<ScriptedExtractor>,
        advisor: Arc<CountingAdvisor>,
    ) -> SkillAnalyzer {
        SkillAnalyzer::new(extractor, advisor, Duration::from_secs(5))
    }

    const JD: &str = "We need a Python developer with SQL and Docker experience.";
    const RESUME: &str = "Five years of Python and PostgreSQL.";

    #[tokio::test]
    async fn test_full_match_skips_resource_suggestion() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python", "SQL"]),
            Script::Skills(vec!["python", " sql ", "Excel"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor.clone(), advisor.clone())
            .analyze(JD, RESUME)
            .await;

        assert_eq!(report.score, 100);
        assert_eq!(report.matched_skills, vec!["Python", "SQL"]);
        assert!(report.missing_skills.is_empty());
        assert!(report.resource_suggestions.is_empty());
        assert_eq!(advisor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_skills_get_suggestions() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python", "SQL", "Docker"]),
            Script::Skills(vec!["Python"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor, advisor.clone()).analyze(JD, RESUME).await;

        assert_eq!(report.score, 33);
        assert_eq!(report.missing_skills, vec!["SQL", "Docker"]);
        assert_eq!(advisor.calls.load(Ordering::SeqCst), 1);
        let suggested: Vec<&str> = report
            .resource_suggestions
            .iter()
            .map(|s| s.skill.as_str())
            .collect();
        assert_eq!(suggested, vec!["SQL", "Docker"]);
    }

    #[tokio::test]
    async fn test_resume_extraction_failure_degrades_to_empty() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python", "SQL"]),
            Script::Fail,
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor, advisor).analyze(JD, RESUME).await;

        assert!(report.matched_skills.is_empty());
        assert_eq!(report.missing_skills, vec!["Python", "SQL"]);
        assert_eq!(report.score, 0);
    }

    #[tokio::test]
    async fn test_job_extraction_failure_yields_vacuous_match() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Fail,
            Script::Skills(vec!["Python"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor, advisor.clone()).analyze(JD, RESUME).await;

        assert!(report.all_job_skills.is_empty());
        assert_eq!(report.score, 100);
        assert_eq!(advisor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_extraction_times_out_to_empty() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Rust"]),
            Script::Hang,
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor, advisor).analyze(JD, RESUME).await;

        assert_eq!(report.missing_skills, vec!["Rust"]);
        assert_eq!(report.score, 0);
    }

    #[tokio::test]
    async fn test_suggestion_failure_keeps_report() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Go"]),
            Script::Skills(vec![]),
        ));
        let advisor = Arc::new(CountingAdvisor::failing());

        let report = analyzer(extractor, advisor.clone()).analyze(JD, RESUME).await;

        assert_eq!(report.missing_skills, vec!["Go"]);
        assert!(report.resource_suggestions.is_empty());
        assert_eq!(advisor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_resume_text_skips_model_call() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python"]),
            Script::Skills(vec!["Python"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor.clone(), advisor).analyze(JD, "   \n").await;

        assert_eq!(extractor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.missing_skills, vec!["Python"]);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_degrades_to_empty_resume() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python"]),
            Script::Skills(vec!["Python"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor.clone(), advisor)
            .analyze_pdf(JD, b"not a pdf at all".to_vec())
            .await;

        assert_eq!(extractor.calls.load(Ordering::SeqCst), 1);
        assert!(report.matched_skills.is_empty());
        assert_eq!(report.score, 0);
    }

    #[tokio::test]
    async fn test_readable_pdf_reaches_resume_extraction() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python", "Go"]),
            Script::Skills(vec!["python", "Docker"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor.clone(), advisor)
            .analyze_pdf(JD, one_page_pdf("Python Docker Kubernetes"))
            .await;

        assert_eq!(extractor.calls.load(Ordering::SeqCst), 2);
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert_eq!(report.missing_skills, vec!["Go"]);
        assert_eq!(report.score, 50);
    }

    #[tokio::test]
    async fn test_subskill_filter_applies_to_both_lists() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Python", "Pandas", "SQL"]),
            Script::Skills(vec!["python", "SQL"]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());
        let map = SubSkillMap::from_json(r#"{"python": ["pandas"]}"#).unwrap();

        let report = analyzer(extractor, advisor.clone())
            .with_subskill_filter(map)
            .analyze(JD, RESUME)
            .await;

        assert_eq!(report.all_job_skills, vec!["Python", "SQL"]);
        assert_eq!(report.score, 100);
        assert_eq!(advisor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_report_serializes_camel_case() {
        let extractor = Arc::new(ScriptedExtractor::new(
            Script::Skills(vec!["Kafka"]),
            Script::Skills(vec![]),
        ));
        let advisor = Arc::new(CountingAdvisor::new());

        let report = analyzer(extractor, advisor).analyze(JD, RESUME).await;
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["missingSkills"][0], "Kafka");
        assert_eq!(json["resourceSuggestions"][0]["youtubeChannels"][0], "Example Academy");
        assert!(json["analysisId"].is_string());
        assert!(json["generatedAt"].is_string());
    }
}
