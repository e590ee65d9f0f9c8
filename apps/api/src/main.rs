mod analysis;
mod classifier;
mod config;
mod errors;
mod extraction;
mod layout;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::taxonomy::Taxonomy;
use crate::analysis::ResumeAnalyzer;
use crate::classifier::load_or_fallback;
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::layout::default_page_config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Skill taxonomy: immutable, shared by every request
    let taxonomy = Arc::new(Taxonomy::standard());
    info!(
        skills = taxonomy.all_skills().count(),
        action_verbs = taxonomy.action_verbs.len(),
        "Taxonomy loaded"
    );

    // Category classifier: trained once from the labeled dataset (CSV parsing is blocking)
    let dataset = config.classifier_dataset.clone();
    let classifier = tokio::task::spawn_blocking(move || load_or_fallback(&dataset)).await?;

    let analyzer = ResumeAnalyzer::new(taxonomy, classifier);

    let page_config = default_page_config();
    info!(
        "Report page config: {}x{}pt, {}pt margins",
        page_config.page_width_pt, page_config.page_height_pt, page_config.margin_pt
    );

    let state = AppState {
        config: config.clone(),
        analyzer,
        extractor: Arc::new(PdfTextExtractor),
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
