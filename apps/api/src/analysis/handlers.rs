//! Axum route handler for résumé analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::models::{AnalysisInput, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the uploaded résumé.
const UPLOAD_FIELD: &str = "resume";
const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// POST /analyze
///
/// Accepts a multipart upload (`resume` field, PDF only), extracts its text and
/// returns the full `AnalysisResult`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let (original_name, document) = read_upload(&mut multipart).await?;

    if original_name.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    let filename = sanitize_filename(&original_name);
    if !is_allowed_file(&filename) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF files are accepted".to_string(),
        ));
    }

    let raw_text = state.extractor.extract(document).await?;
    let input = AnalysisInput::new(raw_text, filename);
    let result = state.analyzer.analyze(&input);

    info!(
        filename = %input.source_filename,
        ats_score = result.ats_score,
        category = %result.predicted_category,
        "Résumé analyzed"
    );

    Ok(Json(result))
}

async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok((filename, data));
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}

/// Reduces a client-supplied filename to a safe basename: directory components are
/// dropped, whitespace becomes `_`, and anything outside `[A-Za-z0-9._-]` is removed.
/// Leading dots and underscores are stripped so the result is never hidden.
pub fn sanitize_filename(name: &str) -> String {
    let basename = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = basename
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
            _ => None,
        })
        .collect();
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

fn is_allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(stem, ext)| {
            !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
        })
        .unwrap_or(false)
}
