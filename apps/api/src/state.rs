use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::layout::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Taxonomy and trained classifier, read-only after startup.
    pub analyzer: ResumeAnalyzer,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Report page geometry: US letter with 50pt margins.
    pub page_config: PageConfig,
}
