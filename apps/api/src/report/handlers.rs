//! Axum route handlers for the downloadable PDF report.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::report::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// JSON-encoded `AnalysisResult`, as the browser client sends it.
    pub data: Option<String>,
}

/// GET /download-report?data=<json>
pub async fn handle_download_report_query(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let raw = query
        .data
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No analysis data available".to_string()))?;
    let result: AnalysisResult = serde_json::from_str(&raw)
        .map_err(|e| AppError::Validation(format!("Invalid analysis data: {e}")))?;

    pdf_response(&state, result).await
}

/// POST /download-report
pub async fn handle_download_report(
    State(state): State<AppState>,
    Json(result): Json<AnalysisResult>,
) -> Result<Response, AppError> {
    pdf_response(&state, result).await
}

async fn pdf_response(state: &AppState, result: AnalysisResult) -> Result<Response, AppError> {
    let page_config = state.page_config.clone();

    // Layout and serialization are CPU-bound.
    let (pages, bytes) = tokio::task::spawn_blocking(move || {
        let document = render(&result, &page_config);
        document
            .to_pdf_bytes()
            .map(|bytes| (document.page_count(), bytes))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report: {e}")))?
    .map_err(|e| AppError::Report(e.to_string()))?;

    let filename = report_filename(chrono::Local::now());
    info!(pages, bytes = bytes.len(), %filename, "Report generated");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

fn report_filename<Tz: chrono::TimeZone>(at: chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("resume_analysis_report_{}.pdf", at.format("%Y%m%d_%H%M%S"))
}
