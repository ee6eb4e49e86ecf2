// ============================================================
// Layer 1b — Request Handlers
// ============================================================
// Thin adapters: decode the request, call a use case, encode
// the result. Bodies and query strings are decoded by hand so
// that malformed input gets the same JSON 400 as every other
// validation failure.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    digest::{BoilerplateReport, Digest, DigestRequest},
    stats::TextStats,
    traits::TextSource,
};
use crate::web::{
    error::{status_for, ApiError},
    render,
    AppState,
};

// ─── Response Shapes ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DigestResponse {
    pub success:             bool,
    pub source:              String,
    pub cleaned_text_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_text:        Option<String>,
    pub stats:               TextStats,
    pub preview:             String,
    pub summary:             String,
    pub summary_sentences:   Vec<String>,
    pub boilerplate:         BoilerplateReport,
}

impl DigestResponse {
    fn from_digest(digest: Digest, include_text: bool) -> Self {
        Self {
            success:             true,
            cleaned_text_length: digest.cleaned.char_len(),
            summary:             digest.summary.text(),
            cleaned_text:        include_text.then_some(digest.cleaned.text),
            source:              digest.source,
            stats:               digest.stats,
            preview:             digest.preview,
            summary_sentences:   digest.summary.sentences,
            boilerplate:         digest.boilerplate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub stats:   TextStats,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

// ─── Pages ────────────────────────────────────────────────────────────────────

pub async fn index<S: TextSource>(State(state): State<AppState<S>>) -> Html<String> {
    let cfg = state.digest.pipeline().config();
    Html(render::index_page(cfg.preview_len, cfg.summary_sentences))
}

pub async fn report<S: TextSource>(
    State(state): State<AppState<S>>,
    query:        Result<Query<DigestRequest>, QueryRejection>,
) -> Response {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            let html = render::error_page(StatusCode::BAD_REQUEST, &rejection.body_text());
            return (StatusCode::BAD_REQUEST, Html(html)).into_response();
        }
    };

    match state.digest.execute(request).await {
        Ok(digest) => Html(render::report_page(&digest)).into_response(),
        Err(err) => {
            let status = status_for(&err);
            (status, Html(render::error_page(status, &err.to_string()))).into_response()
        }
    }
}

// ─── JSON API ─────────────────────────────────────────────────────────────────

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status":  "healthy",
        "message": "Text digest service is running",
    }))
}

pub async fn digest<S: TextSource>(
    State(state): State<AppState<S>>,
    query:        Result<Query<DigestRequest>, QueryRejection>,
) -> Result<Json<DigestResponse>, ApiError> {
    let Query(request) = query.map_err(|r| ApiError::bad_request(r.body_text()))?;
    let digest = state.digest.execute(request).await?;
    Ok(Json(DigestResponse::from_digest(digest, false)))
}

pub async fn clean<S: TextSource>(
    State(state): State<AppState<S>>,
    body:         Bytes,
) -> Result<Json<DigestResponse>, ApiError> {
    let request: DigestRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request JSON: {e}")))?;
    let digest = state.digest.execute(request).await?;
    Ok(Json(DigestResponse::from_digest(digest, true)))
}

pub async fn analyze<S: TextSource>(
    State(state): State<AppState<S>>,
    body:         Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request: AnalyzeRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request JSON: {e}")))?;
    let text = request
        .text
        .ok_or_else(|| ApiError::bad_request("Missing 'text' in request JSON"))?;

    let stats = state.analyze.analyze(&text)?;
    Ok(Json(AnalyzeResponse { success: true, stats }))
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Endpoint not found" })),
    )
}
