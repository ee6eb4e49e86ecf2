// ============================================================
// Layer 1b — Web Presentation Layer
// ============================================================
// Wraps the use cases in an axum HTTP server.
//
//   GET  /             — HTML form
//   GET  /report       — HTML report for ?url=...
//   GET  /health       — liveness check
//   GET  /api/digest   — JSON digest for ?url=...
//   POST /api/clean    — JSON digest (incl. cleaned text) for {"url": ...}
//   POST /api/analyze  — JSON statistics for {"text": ...}
//
// There is no global app object: the router receives an
// AppState holding the use cases, and the fetcher inside it
// is injected by the caller (HTTP in production, stubs in
// tests).

pub mod error;
pub mod handlers;
pub mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};

use crate::application::{analyze_use_case::AnalyzeUseCase, digest_use_case::DigestUseCase};
use crate::data::{loader::HttpTextSource, pipeline::TextPipeline};
use crate::domain::traits::TextSource;
use crate::infra::config::ServiceConfig;

/// Shared, read-only state handed to every handler.
pub struct AppState<S> {
    pub digest:  Arc<DigestUseCase<S>>,
    pub analyze: Arc<AnalyzeUseCase>,
}

// Manual impl: derive(Clone) would demand S: Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            digest:  Arc::clone(&self.digest),
            analyze: Arc::clone(&self.analyze),
        }
    }
}

impl<S: TextSource> AppState<S> {
    pub fn new(source: S, pipeline: TextPipeline, require_txt_extension: bool) -> Self {
        Self {
            digest:  Arc::new(DigestUseCase::new(source, pipeline.clone(), require_txt_extension)),
            analyze: Arc::new(AnalyzeUseCase::new(pipeline)),
        }
    }
}

/// Build the router for the given state.
pub fn router<S: TextSource>(state: AppState<S>) -> Router {
    Router::new()
        .route("/",            get(handlers::index::<S>))
        .route("/report",      get(handlers::report::<S>))
        .route("/health",      get(handlers::health))
        .route("/api/digest",  get(handlers::digest::<S>))
        .route("/api/clean",   post(handlers::clean::<S>))
        .route("/api/analyze", post(handlers::analyze::<S>))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Bind and serve until Ctrl-C / SIGTERM.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let source = HttpTextSource::new(
        config.fetch_timeout(),
        &config.user_agent,
        config.max_body_bytes,
    )?;
    let state = AppState::new(
        source,
        TextPipeline::new(config.pipeline.clone()),
        config.require_txt_extension,
    );

    let addr     = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind to '{addr}'"))?;

    tracing::info!("Text digest service listening on http://{}", addr);
    tracing::info!("  GET  /             - Web interface");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /api/digest   - Digest a text by URL");
    tracing::info!("  POST /api/clean    - Clean text from URL");
    tracing::info!("  POST /api/analyze  - Analyze raw text");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Cannot listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c    => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}

// ─── Router Tests ─────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::digest_use_case::tests::StubSource;
    use crate::domain::error::FetchError;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    const BOOK: &str = "*** START OF THE PROJECT GUTENBERG EBOOK T ***\n\
        Hello world. This is a test. Another sentence here!\n\
        *** END OF THE PROJECT GUTENBERG EBOOK T ***";

    fn app(result: Result<String, FetchError>) -> Router {
        router(AppState::new(StubSource(result), TextPipeline::default(), true))
    }

    fn ok_app() -> Router {
        app(Ok(BOOK.to_string()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status   = response.status();
        let bytes    = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(ok_app(), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_digest_ok() {
        let uri = "/api/digest?url=https://example.org/book.txt&summary_sentences=1";
        let (status, body) = send(ok_app(), get_req(uri)).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["summary"], "Hello world.");
        assert_eq!(json["stats"]["sentence_count"], 3);
        assert_eq!(json["cleaned_text_length"], 51);
        assert!(json.get("cleaned_text").is_none());
        assert_eq!(json["boilerplate"]["header_removed"], true);
    }

    #[tokio::test]
    async fn test_digest_missing_url_is_400() {
        let (status, body) = send(ok_app(), get_req("/api/digest")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_digest_bad_query_is_400() {
        let uri = "/api/digest?url=https://example.org/a.txt&preview_len=lots";
        let (status, _) = send(ok_app(), get_req(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_502() {
        let failing = app(Err(FetchError::Network {
            url:     "https://example.org/a.txt".into(),
            message: "connection refused".into(),
        }));
        let (status, body) = send(failing, get_req("/api/digest?url=https://example.org/a.txt")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_clean_returns_cleaned_text() {
        let body = r#"{"url": "https://example.org/book.txt"}"#;
        let (status, body) = send(ok_app(), post_json("/api/clean", body)).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["cleaned_text"], "Hello world. This is a test. Another sentence here!");
    }

    #[tokio::test]
    async fn test_clean_rejects_bad_json_and_non_txt() {
        let (status, _) = send(ok_app(), post_json("/api/clean", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body = r#"{"url": "https://example.org/book.html"}"#;
        let (status, body) = send(ok_app(), post_json("/api/clean", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains(".txt"));
    }

    #[tokio::test]
    async fn test_analyze() {
        let body = r#"{"text": "One two. Three!"}"#;
        let (status, body) = send(ok_app(), post_json("/api/analyze", body)).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["stats"]["word_count"], 3);
        assert_eq!(json["stats"]["sentence_count"], 2);
    }

    #[tokio::test]
    async fn test_analyze_empty_or_missing_text_is_400() {
        for body in [r#"{"text": "   "}"#, r#"{}"#] {
            let (status, _) = send(ok_app(), post_json("/api/analyze", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_json() {
        let (status, body) = send(ok_app(), get_req("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Endpoint not found"));
    }

    #[tokio::test]
    async fn test_index_and_report_pages() {
        let (status, body) = send(ok_app(), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<form"));

        let (status, body) = send(ok_app(), get_req("/report?url=https://example.org/book.txt")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Hello world."));

        let (status, body) = send(ok_app(), get_req("/report?url=%3Cscript%3E")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.contains("<script>"));
    }
}
