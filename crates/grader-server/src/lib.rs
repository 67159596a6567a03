//! # grader-server
//!
//! HTTP boundary for the grader.
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `POST /grade` | grading request | `{"reward": f64}` |
//! | `POST /grade/breakdown` | grading request | `{"reward": f64, "components": {...}}` |
//! | `GET /health` | none | `{"status": "ok", "version": "..."}` |
//!
//! Scoring is pure CPU work measured in microseconds, so handlers score
//! inline on the async worker.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use server::{router, serve, AppState, ServerError};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt; // for .oneshot()

    fn app() -> Router {
        router(AppState::new(), &ServerConfig::default())
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn grade_returns_full_reward_for_correct_completion() {
        let payload = json!({
            "prompt_messages": [{"role": "user", "content": "What is 6 * 7?"}],
            "completion": "<reasoning>\nbecause\n</reasoning>\n<answer>\n42\n</answer>\n",
            "extra_data": {"answer": "42"}
        });

        let response = app()
            .oneshot(post_json("/grade", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"reward": 4.0}));
    }

    #[tokio::test]
    async fn grade_without_extra_data_scores_format_only() {
        let payload = json!({
            "prompt_messages": [],
            "completion": "<reasoning>\nbecause\n</reasoning>\n<answer>\n42\n</answer>\n"
        });

        let response = app()
            .oneshot(post_json("/grade", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["reward"], json!(2.0));
    }

    #[tokio::test]
    async fn breakdown_lists_components() {
        let payload = json!({
            "prompt_messages": [{"role": "user", "content": "q"}],
            "completion": "I think it's 42",
            "extra_data": {"answer": "42"}
        });

        let response = app()
            .oneshot(post_json("/grade/breakdown", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["reward"], json!(0.0));
        assert_eq!(body["components"]["correctness"], json!(0.0));
        assert_eq!(body["components"]["tag_count"], json!(0.0));
    }

    #[tokio::test]
    async fn grade_rejects_schema_violation() {
        let payload = json!({ "prompt_messages": [], "completion": 7 });

        let response = app()
            .oneshot(post_json("/grade", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await.get("error").is_some());
    }

    #[tokio::test]
    async fn grade_rejects_missing_prompt_messages() {
        let payload = json!({ "completion": "<answer>42</answer>" });

        let response = app()
            .oneshot(post_json("/grade", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_string_answer_never_matches() {
        let payload = json!({
            "prompt_messages": [],
            "completion": "<answer></answer>",
            "extra_data": {"answer": 42}
        });

        let response = app()
            .oneshot(post_json("/grade/breakdown", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["components"]["correctness"], json!(0.0));
    }

    #[tokio::test]
    async fn grade_rejects_malformed_json() {
        let response = app()
            .oneshot(post_json("/grade", "{not json".to_string()))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn grade_rejects_oversized_body() {
        let config = ServerConfig {
            max_body_bytes: 64,
            ..Default::default()
        };
        let payload = json!({ "prompt_messages": [], "completion": "x".repeat(256) });

        let response = router(AppState::new(), &config)
            .oneshot(post_json("/grade", payload.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], json!("ok"));
    }
}
