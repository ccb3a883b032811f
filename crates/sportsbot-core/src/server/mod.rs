//! JSON web endpoint.
//!
//! `POST /query` takes `{"query": "..."}` and answers `{"response": "..."}`,
//! or `{"error": "..."}` with a 4xx/5xx status. CORS is open to any origin.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::agent::SportsAgent;
use crate::error::AgentError;
use crate::query::Query;

#[derive(Serialize)]
struct QueryResponse {
    response: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    provider: &'static str,
}

/// An error rendered as `{"error": "..."}`.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Query(e) => Self::bad_request(e.to_string()),
            other => {
                error!(error = %other, "Query failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: other.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

/// Build the application router around a shared agent.
pub fn router(agent: Arc<SportsAgent>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/query", post(query_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(agent)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(agent: Arc<SportsAgent>, addr: &str) -> anyhow::Result<()> {
    let provider = agent.provider_kind();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr, provider = provider.as_str(), "Listening for queries");

    axum::serve(listener, router(agent))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}

async fn query_handler(
    State(agent): State<Arc<SportsAgent>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    // Bad JSON, a missing field, and a non-string field all read as "no query".
    let raw = payload
        .ok()
        .and_then(|Json(body)| body.get("query").and_then(Value::as_str).map(str::to_owned))
        .ok_or_else(|| ApiError::bad_request("No query provided"))?;

    let query = Query::parse(&raw).map_err(AgentError::from)?;
    let response = agent.respond(query.as_str()).await?;
    Ok(Json(QueryResponse { response }))
}

async fn health_handler(State(agent): State<Arc<SportsAgent>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider: agent.provider_kind().as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentOptions;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        let agent = SportsAgent::with_env(AgentOptions::default(), &Config::default(), |_| None).unwrap();
        router(Arc::new(agent))
    }

    async fn post_json(body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/query")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_query_ok() {
        let (status, body) = post_json(r#"{"query": "Man United vs Liverpool"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let text = body["response"].as_str().unwrap();
        assert!(text.starts_with("Match summary template (football)"));
    }

    #[tokio::test]
    async fn test_missing_query() {
        let (status, body) = post_json(r#"{"question": "hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No query provided");
    }

    #[tokio::test]
    async fn test_non_string_query() {
        let (status, body) = post_json(r#"{"query": 42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No query provided");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = post_json("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No query provided");
    }

    #[tokio::test]
    async fn test_blank_query() {
        let (status, body) = post_json(r#"{"query": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Query cannot be empty");
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["provider"], "rule");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/query")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
    }
}
