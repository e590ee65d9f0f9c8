pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(analysis::handle_analyze))
        .route(
            "/download-report",
            get(report::handle_download_report_query).post(report::handle_download_report),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use bytes::Bytes;
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::models::AnalysisResult;
    use crate::analysis::taxonomy::Taxonomy;
    use crate::analysis::ResumeAnalyzer;
    use crate::classifier::FallbackClassifier;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::extraction::TextExtractor;
    use crate::layout::default_page_config;

    /// Returns the uploaded bytes as text; fails on bytes starting with `%bad`.
    struct EchoExtractor;

    #[async_trait]
    impl TextExtractor for EchoExtractor {
        async fn extract(&self, document: Bytes) -> Result<String, AppError> {
            if document.starts_with(b"%bad") {
                return Err(AppError::Extraction("Could not read PDF document".to_string()));
            }
            Ok(String::from_utf8_lossy(&document).into_owned())
        }
    }

    fn test_state() -> AppState {
        AppState {
            config: Config::default(),
            analyzer: ResumeAnalyzer::new(
                Arc::new(Taxonomy::standard()),
                Arc::new(FallbackClassifier),
            ),
            extractor: Arc::new(EchoExtractor),
            page_config: default_page_config(),
        }
    }

    const BOUNDARY: &str = "ats-test-boundary";

    fn multipart_request(field: &str, filename: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/pdf\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_returns_result() {
        let response = build_router(test_state())
            .oneshot(multipart_request(
                "resume",
                "JaneDoe_Resume.pdf",
                "python java docker redis react leadership",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["score_breakdown"]["keyword_match"], 12);
        assert_eq!(body["score_breakdown"]["filename"], 5);
        assert_eq!(body["predicted_category"], "General");
        assert_eq!(body["job_recommendations"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_analyze_rejects_non_pdf() {
        let response = build_router(test_state())
            .oneshot(multipart_request("resume", "resume.docx", "text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_requires_resume_field() {
        let response = build_router(test_state())
            .oneshot(multipart_request("attachment", "resume.pdf", "text"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_analyze_unreadable_document() {
        let response = build_router(test_state())
            .oneshot(multipart_request("resume", "jane.pdf", "%bad"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_download_report_post_returns_pdf() {
        let payload = serde_json::to_string(&AnalysisResult::default()).unwrap();
        let response = build_router(test_state())
            .oneshot(
                Request::post("/download-report")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"resume_analysis_report_"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_download_report_query_fills_missing_fields() {
        // Partial payloads are accepted; absent fields take their defaults.
        let response = build_router(test_state())
            .oneshot(
                Request::get("/download-report?data=%7B%22ats_score%22%3A42%7D")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_download_report_without_data() {
        let response = build_router(test_state())
            .oneshot(Request::get("/download-report").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_download_report_rejects_malformed_json() {
        let response = build_router(test_state())
            .oneshot(
                Request::get("/download-report?data=not-json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
