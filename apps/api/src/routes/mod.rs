pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::extraction::handlers as extraction;
use crate::listings::handlers as listings;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes/generate", post(resume::handle_generate))
        .route("/api/v1/resumes/enhance", post(resume::handle_enhance))
        .route("/api/v1/resumes/extract", post(extraction::handle_extract))
        // ATS API
        .route("/api/v1/ats/score", post(ats::handle_ats_score))
        .route("/api/v1/ats/analyze", post(ats::handle_ats_analyze))
        // Listings API
        .route("/api/v1/listings/jobs", get(listings::handle_jobs))
        .route("/api/v1/listings/internships", get(listings::handle_internships))
        .route("/api/v1/listings/freelance", get(listings::handle_freelance))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ats::analyzer::HeuristicAtsAnalyzer;
    use crate::config::Config;
    use crate::llm_client::retry::RetryPolicy;
    use crate::llm_client::LlmClient;

    const BOUNDARY: &str = "careerforge-test-boundary";

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "test-model".to_string(),
            // nothing listens here; tests below never reach the LLM
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            llm_max_attempts: 1,
            llm_base_delay_ms: 1,
            enable_llm_ats: false,
            max_upload_bytes: 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    fn app() -> Router {
        let config = test_config();
        let llm = LlmClient::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
            RetryPolicy::new(1, Duration::from_millis(1)),
        )
        .unwrap();
        build_router(AppState {
            llm,
            config,
            ats_analyzer: Arc::new(HeuristicAtsAnalyzer),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload(file_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/resumes/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "careerforge-api");
    }

    #[tokio::test]
    async fn test_ats_score_endpoint() {
        let (status, body) = send(post_json(
            "/api/v1/ats/score",
            json!({"resume_text": "jane@example.com\n+1 555 123 4567\nEXPERIENCE\n- Led a team"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().unwrap();
        assert!((15..=100).contains(&score));
        assert_eq!(body["scorer_backend"], "heuristic");
    }

    #[tokio::test]
    async fn test_ats_score_rejects_blank_text() {
        let (status, body) = send(post_json("/api/v1/ats/score", json!({"resume_text": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_ats_analyze_uses_configured_analyzer() {
        let (status, body) = send(post_json(
            "/api/v1/ats/analyze",
            json!({"resume_text": "SKILLS\nPython, SQL", "job_description": "Python developer"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scorer_backend"], "heuristic");
        assert_eq!(body["matched_keywords"], json!(["python"]));
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_form_before_calling_llm() {
        let (status, body) = send(post_json(
            "/api/v1/resumes/generate",
            json!({"personal": {"full_name": "Jane", "email": "not-an-email"}, "target_role": "Analyst"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("personal.email"));
    }

    #[tokio::test]
    async fn test_enhance_rejects_blank_content() {
        let (status, _) = send(post_json(
            "/api/v1/resumes/enhance",
            json!({"section": "skills", "content": ""}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_listings_endpoints() {
        let (status, body) = send(
            Request::get("/api/v1/listings/jobs?role=Data%20Analyst&skills=SQL,Excel&count=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "job");
        let listings = body["listings"].as_array().unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0]["location"], "Remote");
        assert_eq!(listings[0]["tags"], json!(["SQL", "Excel"]));
        assert_eq!(listings[0]["apply_links"].as_array().unwrap().len(), 5);

        let (status, body) = send(
            Request::get("/api/v1/listings/freelance?role=Writer")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["listings"].as_array().unwrap().len(), 6);

        let (status, _) = send(
            Request::get("/api/v1/listings/internships")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_text_upload() {
        let (status, body) = send(upload("cv.txt", b"Jane Doe\n\n\nEXPERIENCE   \n- Built APIs")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "text");
        assert_eq!(body["file_name"], "cv.txt");
        assert_eq!(body["text"], "Jane Doe\n\nEXPERIENCE\n- Built APIs");
    }

    #[tokio::test]
    async fn test_extract_rejects_docx() {
        let (status, body) = send(upload("cv.docx", b"PK\x03\x04 zipped")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_extract_rejects_oversized_upload() {
        let (status, _) = send(upload("cv.txt", &[b'a'; 4096])).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
