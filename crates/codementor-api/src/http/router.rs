//! Axum router configuration with middleware.
//!
//! Middleware: CORS, tracing. The companion browser UI is served from
//! `CODEMENTOR_WEB_DIR` (default `frontend/`) when that directory
//! exists; API routes take priority and unknown paths fall through to
//! the UI's `index.html`.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Serve the browser UI from disk if the directory exists. Unknown
    // paths fall through to index.html.
    let web_dir =
        std::env::var("CODEMENTOR_WEB_DIR").unwrap_or_else(|_| "frontend".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static UI serving enabled");
    }

    router
}

/// GET /health - simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::StatusCode;
    use codementor_core::chat::relay::{EMPTY_MESSAGE_REPLY, REMOTE_FAILURE_REPLY};
    use codementor_core::llm::provider::GenerativeProvider;
    use codementor_core::llm::resolve::resolve_model;
    use codementor_infra::llm::gemini::GeminiProvider;
    use secrecy::SecretString;
    use serde_json::{Value, json};

    /// Bind a router on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{addr}")
    }

    /// Stub upstream speaking just enough of the Gemini wire contract.
    fn stub_upstream(listing: Value, generation: (StatusCode, Value)) -> Router {
        Router::new()
            .route(
                "/v1beta/models",
                get(move || {
                    let listing = listing.clone();
                    async move { Json(listing) }
                }),
            )
            .route(
                "/v1beta/models/{model_action}",
                post(move || {
                    let generation = generation.clone();
                    async move { (generation.0, Json(generation.1)) }
                }),
            )
    }

    async fn app_against(upstream: &str, model: &str) -> String {
        let provider = GeminiProvider::new(SecretString::from("test-key-not-real"))
            .with_base_url(upstream.to_string());
        let state = AppState::new(provider, model.to_string());
        serve(build_router(state)).await
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let base = app_against("http://127.0.0.1:9", "gemini-2.5-flash").await;

        let body: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_chat_end_to_end() {
        let upstream = serve(stub_upstream(
            json!({"models": []}),
            (
                StatusCode::OK,
                json!({"candidates": [{"content": {"parts": [{"text": "An array is..."}]}}]}),
            ),
        ))
        .await;
        let base = app_against(&upstream, "gemini-2.5-flash").await;

        let response = reqwest::Client::new()
            .post(format!("{base}/chat"))
            .json(&json!({"message": "what is an array?"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["reply"], "An array is...");
        assert_eq!(body["history"][0]["role"], "User");
        assert_eq!(body["history"][0]["content"], "what is an array?");
        assert_eq!(body["history"][1]["role"], "Assistant");
        assert_eq!(body["history"][1]["content"], "An array is...");
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message_in_band() {
        let base = app_against("http://127.0.0.1:9", "gemini-2.5-flash").await;

        for payload in [json!({"message": "   "}), json!({})] {
            let response = reqwest::Client::new()
                .post(format!("{base}/chat"))
                .json(&payload)
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), reqwest::StatusCode::OK);
            let body: Value = response.json().await.unwrap();
            assert_eq!(body["reply"], EMPTY_MESSAGE_REPLY);
            assert!(body.get("history").is_none());
        }
    }

    #[tokio::test]
    async fn test_chat_remote_failure_is_in_band() {
        let upstream = serve(stub_upstream(
            json!({"models": []}),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": {"message": "backend exploded"}}),
            ),
        ))
        .await;
        let base = app_against(&upstream, "gemini-2.5-flash").await;

        let response = reqwest::Client::new()
            .post(format!("{base}/chat"))
            .json(&json!({"message": "hello"}))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["reply"], REMOTE_FAILURE_REPLY);
        assert!(body.get("history").is_none());
    }

    #[tokio::test]
    async fn test_model_resolution_over_http() {
        let upstream = serve(stub_upstream(
            json!({"models": [
                {"name": "models/text-bison"},
                {"name": "models/gemini-2.5-flash"}
            ]}),
            (StatusCode::OK, json!({"candidates": []})),
        ))
        .await;

        let provider = GeminiProvider::new(SecretString::from("test-key-not-real"))
            .with_base_url(upstream);

        let resolved = resolve_model(None, &provider).await;
        assert_eq!(resolved.as_deref(), Some("gemini-2.5-flash"));
    }

    #[tokio::test]
    async fn test_generation_without_candidates_fails() {
        let upstream = serve(stub_upstream(
            json!({"models": []}),
            (StatusCode::OK, json!({"candidates": []})),
        ))
        .await;

        let provider = GeminiProvider::new(SecretString::from("test-key-not-real"))
            .with_base_url(upstream);

        let result = provider.generate("gemini-2.5-flash", "prompt").await;
        assert!(result.is_err());
    }
}
