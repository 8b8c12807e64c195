//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::analyzer::AnalysisReport;
use crate::analysis::comparison::dedupe_skills;
use crate::analysis::pdf_text::decode_pdf_payload;
use crate::analysis::resources::ResourceSuggestion;
use crate::errors::AppError;
use crate::state::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub job_description: String,
    /// `data:application/pdf;base64,<data>` or bare base64.
    pub resume_data_uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResourcesRequest {
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResourcesResponse {
    pub suggestions: Vec<ResourceSuggestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Analyzes a base64 PDF resume against a pasted job description.
/// An undecodable resume payload still produces a report (with no resume skills).
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let job_description =
        validate_job_description(&request.job_description, state.config.min_job_description_chars)?;

    let pdf_bytes = decode_pdf_payload(&request.resume_data_uri).unwrap_or_default();
    check_resume_size(pdf_bytes.len(), state.config.max_resume_bytes)?;

    let report = state.analyzer.analyze_pdf(job_description, pdf_bytes).await;
    Ok(Json(report))
}

/// POST /api/v1/analysis/upload
///
/// Multipart variant: `resume` (PDF file) and `jobDescription` (text) fields.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resume: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                if let Some(content_type) = field.content_type() {
                    if content_type != PDF_CONTENT_TYPE {
                        return Err(AppError::UnsupportedMediaType(format!(
                            "Only PDF resumes are accepted, got '{content_type}'"
                        )));
                    }
                }
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
                info!("Received resume upload '{file_name}' ({} bytes)", bytes.len());
                resume = Some(bytes.to_vec());
            }
            "jobDescription" | "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            other => warn!("Ignoring unexpected multipart field '{other}'"),
        }
    }

    let resume = resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    check_resume_size(resume.len(), state.config.max_resume_bytes)?;

    let job_description = job_description.unwrap_or_default();
    let job_description =
        validate_job_description(&job_description, state.config.min_job_description_chars)?;

    let report = state.analyzer.analyze_pdf(job_description, resume).await;
    Ok(Json(report))
}

/// POST /api/v1/resources
///
/// Suggests learning resources for a list of skills. An empty list returns no suggestions
/// without calling the model.
pub async fn handle_suggest_resources(
    State(state): State<AppState>,
    Json(request): Json<SuggestResourcesRequest>,
) -> Result<Json<SuggestResourcesResponse>, AppError> {
    let missing_skills = dedupe_skills(&request.missing_skills);
    let resources = state.analyzer.suggest_resources(&missing_skills).await;
    Ok(Json(SuggestResourcesResponse {
        suggestions: resources.suggestions,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Returns the trimmed job description, or a validation error if it is blank or too short.
fn validate_job_description(text: &str, min_chars: usize) -> Result<&str, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }
    if text.chars().count() < min_chars {
        return Err(AppError::Validation(format!(
            "jobDescription must be at least {min_chars} characters"
        )));
    }
    Ok(text)
}

fn check_resume_size(size: usize, max_bytes: usize) -> Result<(), AppError> {
    if size > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume is {size} bytes; the maximum is {max_bytes} bytes"
        )));
    }
    Ok(())
}
