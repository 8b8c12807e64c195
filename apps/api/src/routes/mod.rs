pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

/// Room for multipart framing and the job description next to the resume itself.
const BODY_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route(
            "/api/v1/analysis/upload",
            post(analysis::handle_analyze_upload),
        )
        .route("/api/v1/resources", post(analysis::handle_suggest_resources))
        // Jobs API
        .route(
            "/api/v1/job-descriptions",
            post(jobs::handle_generate_job_description),
        )
        .route("/api/v1/technical-skills", post(jobs::handle_technical_skills))
        .layer(DefaultBodyLimit::max(body_limit(state.config.max_resume_bytes)))
        .with_state(state)
}

/// Request body limit: a base64 resume is 4/3 the size of the PDF.
fn body_limit(max_resume_bytes: usize) -> usize {
    max_resume_bytes.saturating_mul(4) / 3 + BODY_OVERHEAD_BYTES
}
