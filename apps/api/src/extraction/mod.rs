//! Document text extraction.
//!
//! Carried in `AppState` as `Arc<dyn TextExtractor>` so handlers can be tested with a
//! canned extractor. The PDF implementation writes the upload to a temporary file that
//! is removed when dropped, whether extraction succeeds or not.

use std::io::Write;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, document: Bytes) -> Result<String, AppError>;
}

/// Extracts text from PDF uploads via `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, document: Bytes) -> Result<String, AppError> {
        // PDF parsing is CPU-bound; keep it off the async executor.
        tokio::task::spawn_blocking(move || extract_pdf_sync(&document))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    // pdf-extract panics on some malformed documents.
                    AppError::Extraction("Could not read PDF document".to_string())
                } else {
                    AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
                }
            })?
    }
}

fn extract_pdf_sync(document: &[u8]) -> Result<String, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("resume-upload-")
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to create temp file: {e}")))?;
    file.write_all(document)
        .and_then(|_| file.flush())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to write temp file: {e}")))?;

    let text = pdf_extract::extract_text(file.path())
        .map_err(|e| AppError::Extraction(format!("Could not read PDF document: {e}")))?;

    debug!(bytes = document.len(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}
