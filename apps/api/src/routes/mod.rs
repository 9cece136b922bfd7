pub mod health;
pub mod ui;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(ui::upload_form))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes", post(handlers::handle_upload))
        .route("/api/v1/resumes/:id", get(handlers::handle_get_resume))
        .route(
            "/api/v1/resumes/:id/download",
            get(handlers::handle_download),
        )
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::documents::docx::tests::build_docx;
    use crate::ner_client::RuleBasedRecognizer;
    use crate::storage::memory::MemoryRecordSink;
    use crate::storage::{FsArtifactStore, RecordSink};

    const BOUNDARY: &str = "resume-test-boundary";

    async fn test_state(dir: &std::path::Path) -> AppState {
        let records: Arc<dyn RecordSink> = Arc::new(MemoryRecordSink::default());
        AppState {
            recognizer: Arc::new(RuleBasedRecognizer),
            records: Some(records),
            artifacts: Arc::new(FsArtifactStore::new(dir).await.unwrap()),
            max_upload_bytes: 1024 * 1024,
        }
    }

    fn multipart_request(field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes")
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

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_upload_form_is_html() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);

        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_upload_then_fetch_and_download() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);

        let docx = build_docx(&[
            "Ada Lovelace",
            "ada@example.com | +44 20 7946 0958",
            "Experience",
            "Analytical Engines Ltd | Programmer",
            "1842 - 1843",
        ]);
        let response = app
            .clone()
            .oneshot(multipart_request("file", "ada.docx", &docx))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["data"]["name"], "Ada Lovelace");
        assert_eq!(body["data"]["contact"]["email"], "ada@example.com");
        assert_eq!(body["data"]["contact"]["phone"], "+442079460958");
        assert_eq!(
            body["data"]["experience"][0]["company_role"],
            "Analytical Engines Ltd | Programmer"
        );
        assert_eq!(body["persisted"]["database"], true);
        assert_eq!(body["persisted"]["artifact"], true);

        let id = body["id"].as_str().unwrap().to_string();

        let fetched = app
            .clone()
            .oneshot(get_request(&format!("/api/v1/resumes/{id}")))
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(json_body(fetched).await, body["data"]);

        let download_url = body["download_url"].as_str().unwrap();
        let downloaded = app.oneshot(get_request(download_url)).await.unwrap();
        assert_eq!(downloaded.status(), StatusCode::OK);
        let disposition = downloaded.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(disposition, format!("attachment; filename=\"{id}.json\""));
        assert_eq!(json_body(downloaded).await, body["data"]);
    }

    #[tokio::test]
    async fn test_unsupported_format_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);

        let response = app
            .oneshot(multipart_request("file", "resume.txt", b"Jane Doe"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "UNSUPPORTED_FORMAT"
        );
    }

    #[tokio::test]
    async fn test_missing_file_field_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);

        let response = app
            .oneshot(multipart_request("attachment", "resume.pdf", b"%PDF"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            "VALIDATION_ERROR"
        );
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_422() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);

        let response = app
            .oneshot(multipart_request("file", "resume.docx", b"garbage"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_resume_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(dir.path()).await);
        let id = uuid::Uuid::new_v4();

        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/v1/resumes/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get_request(&format!("/api/v1/resumes/{id}/download")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
