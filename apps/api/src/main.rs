mod analysis;
mod config;
mod errors;
mod jobs;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::SkillAnalyzer;
use crate::analysis::extraction::LlmSkillExtractor;
use crate::analysis::resources::LlmResourceAdvisor;
use crate::analysis::subskills::SubSkillMap;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API key or malformed numbers)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMap API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_settings())?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s, attempts: {})",
        llm.model(),
        config.llm_timeout_secs,
        config.llm_max_attempts
    );

    // Initialize analyzer with LLM-backed collaborators
    let mut analyzer = SkillAnalyzer::new(
        Arc::new(LlmSkillExtractor(llm.clone())),
        Arc::new(LlmResourceAdvisor(llm.clone())),
        config.llm_call_budget(),
    );

    if let Some(path) = &config.subskill_map_path {
        let map = SubSkillMap::load(path)?;
        if map.is_empty() {
            warn!("Sub-skill map {} has no entries", path.display());
        }
        info!(
            "Sub-skill filter enabled: {} parent skills from {}",
            map.len(),
            path.display()
        );
        analyzer = analyzer.with_subskill_filter(map);
    } else {
        info!("Sub-skill filter disabled (SUBSKILL_MAP_PATH not set)");
    }

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        analyzer: Arc::new(analyzer),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict origins once the web client has a fixed host
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
