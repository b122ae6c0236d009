pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::headlines::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::identity::RequestFieldVerifier;
    use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};

    /// Fixed-output provider that counts how often it was called.
    struct StubProvider {
        output: Result<String, String>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn ok(output: &str) -> Arc<Self> {
            Arc::new(Self {
                output: Ok(output.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                output: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.output.clone().map_err(|message| LlmError::Api {
                status: 500,
                message,
            })
        }
    }

    fn app(provider: Option<Arc<StubProvider>>) -> Router {
        build_router(AppState {
            provider: provider.map(|p| p as Arc<dyn CompletionProvider>),
            identity: Arc::new(RequestFieldVerifier),
        })
    }

    async fn post_generate(app: Router, body: Value) -> (StatusCode, Value) {
        send(app, Body::from(body.to_string())).await
    }

    async fn send(app: Router, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn body_with(keyword: &str) -> Value {
        json!({
            "keyword": keyword,
            "userId": "auth0|42",
            "userEmail": "ana@example.com"
        })
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "marketing-api");
    }

    #[tokio::test]
    async fn test_generate_success_returns_three_scored_headlines() {
        let provider = StubProvider::ok(r#"["Best Cloud Storage Deals Today", "x", "y"]"#);
        let (status, body) =
            post_generate(app(Some(provider.clone())), body_with("Cloud Storage")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["keyword"], "Cloud Storage");
        assert!(body["timestamp"].is_string());

        let headlines = body["headlines"].as_array().unwrap();
        assert_eq!(headlines.len(), 3);
        assert_eq!(headlines[0]["text"], "Best Cloud Storage Deals Today");
        assert_eq!(headlines[0]["seo"]["length"], 30);
        assert_eq!(headlines[0]["seo"]["wordCount"], 5);
        assert_eq!(headlines[0]["seo"]["keywordDensity"], "20.0");
        assert_eq!(headlines[0]["seo"]["densityScore"], "warning");
        assert_eq!(headlines[0]["seo"]["lengthScore"], "warning");
        assert_eq!(headlines[0]["seo"]["hasKeyword"], true);
        assert_eq!(headlines[1]["seo"]["densityScore"], "error");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_generate_always_returns_three_headlines() {
        for raw in ["", "one", "one\ntwo", r#"["a", "b", "c", "d", "e"]"#] {
            let (status, body) =
                post_generate(app(Some(StubProvider::ok(raw))), body_with("seo")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["headlines"].as_array().unwrap().len(), 3, "{raw:?}");
        }
    }

    #[tokio::test]
    async fn test_generate_trims_keyword_in_response_and_filler() {
        let (_, body) =
            post_generate(app(Some(StubProvider::ok(""))), body_with("  seo tools  ")).await;
        assert_eq!(body["keyword"], "seo tools");
        assert_eq!(
            body["headlines"][0]["text"],
            "seo tools - Transform Your Business Today"
        );
        assert_eq!(body["headlines"][0]["seo"]["hasKeyword"], true);
    }

    #[tokio::test]
    async fn test_empty_keyword_is_400_without_provider_call() {
        let provider = StubProvider::ok(r#"["a", "b", "c"]"#);
        let (status, body) = post_generate(app(Some(provider.clone())), body_with("")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Keyword is required");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_keyword_field_is_400() {
        let (status, _) = post_generate(
            app(Some(StubProvider::ok(""))),
            json!({"userId": "auth0|42", "userEmail": "ana@example.com"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_identity_is_401() {
        let provider = StubProvider::ok("");
        let (status, body) =
            post_generate(app(Some(provider.clone())), json!({"keyword": "seo"})).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_identity_is_checked_before_keyword() {
        let (status, _) = post_generate(app(None), json!({"keyword": ""})).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_missing_credential_is_500_configuration_error() {
        let (status, body) = post_generate(app(None), body_with("seo")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "AI API key not configured");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_with_details() {
        let provider = StubProvider::failing("rate limit exceeded");
        let (status, body) = post_generate(app(Some(provider.clone())), body_with("seo")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to generate headlines");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("rate limit exceeded"));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (status, body) = send(
            app(Some(StubProvider::ok(""))),
            Body::from("{not json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
        assert!(body["details"].is_string());
    }
}
