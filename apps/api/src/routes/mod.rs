pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Document parsing
        .route("/api/v1/documents/cv", post(documents::handle_parse_cv))
        .route("/api/v1/documents/jd", post(documents::handle_parse_jd))
        // Interview questions
        .route(
            "/api/v1/interview/questions",
            post(interview::handle_generate_questions),
        )
        .layer(upload_limit)
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
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::documents::docx::tests::build_docx;
    use crate::documents::extraction::tests::build_pdf;
    use crate::errors::AppError;
    use crate::interview::question_generator::{QuestionGenerator, QuestionModel};

    const BOUNDARY: &str = "rehearsal-test-boundary";

    struct CannedModel;

    #[async_trait]
    impl QuestionModel for CannedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, AppError> {
            Ok("1. Walk me through a Rust service you built.\n2. How do you test async code?".into())
        }
    }

    fn app() -> Router {
        build_router(AppState {
            config: Config {
                google_api_key: "test-key".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
            questions: QuestionGenerator::new(Arc::new(CannedModel)),
        })
    }

    fn upload(uri: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["service"], "rehearsal-api");
    }

    #[tokio::test]
    async fn test_cv_upload_returns_parsed_document() {
        let docx = build_docx(
            "<w:body>\
             <w:p><w:r><w:t>Skills:</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Go, Rust</w:t></w:r></w:p>\
             </w:body>",
        );
        let response = app()
            .oneshot(upload("/api/v1/documents/cv", "resume.docx", &docx))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["skills"], json!(["Go", "Rust"]));
        assert_eq!(body["contact"]["email"], "");
        assert_eq!(body["education"], json!([]));
    }

    #[tokio::test]
    async fn test_cv_upload_rejects_unsupported_extension() {
        let response = app()
            .oneshot(upload("/api/v1/documents/cv", "resume.odt", b"whatever"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "UNSUPPORTED_FORMAT"
        );
    }

    #[tokio::test]
    async fn test_cv_upload_rejects_plaintext() {
        let response = app()
            .oneshot(upload("/api/v1/documents/cv", "resume.txt", b"Skills: Rust"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_jd_upload_accepts_plaintext() {
        let jd = b"Job Title: Backend Engineer\n\nRequirements:\n- Rust\n- SQL";
        let response = app()
            .oneshot(upload("/api/v1/documents/jd", "role.txt", jd))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["role"], "Backend Engineer");
    }

    #[tokio::test]
    async fn test_empty_upload_is_unprocessable() {
        let response = app()
            .oneshot(upload("/api/v1/documents/jd", "blank.txt", b"  \n "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], "EMPTY_DOCUMENT");
    }

    #[tokio::test]
    async fn test_pdf_decoder_panic_is_unprocessable() {
        // A font reference with no font resources makes the PDF decoder panic.
        let pdf = build_pdf("", "BT /F1 12 Tf 72 712 Td (SKILLS) Tj ET");
        let response = app()
            .oneshot(upload("/api/v1/documents/cv", "resume.pdf", &pdf))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "EXTRACTION_FAILED"
        );
    }

    #[tokio::test]
    async fn test_missing_file_field_is_bad_request() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nx\r\n--{BOUNDARY}--\r\n"
        );
        let request = Request::post("/api/v1/documents/cv")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_questions_pads_to_five() {
        let payload = json!({
            "question_type": "Technical",
            "technical_stack": ["Rust", "Tokio"],
        });
        let request = Request::post("/api/v1/interview/questions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["question_type"], "technical");
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0], "Walk me through a Rust service you built.");
        assert_eq!(questions[4], "Default technical question #5");
    }

    #[tokio::test]
    async fn test_generate_questions_rejects_unknown_type() {
        let request = Request::post("/api/v1/interview/questions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "question_type": "trivia" }).to_string()))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
