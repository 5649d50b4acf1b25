use crate::error::RelayError;
use crate::normalizer::{self, ResponseShape};
use crate::security::validate_query;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
}

// Every failure reaches the client as `{"error": <message>}`; only a
// missing query is the client's fault.
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::EmptyQuery => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/evaluate-query", post(evaluate_query))
        .route("/api/compare-llms", post(compare_llms))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn evaluate_query(
    State(state): State<AppStateArc>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<Value>, RelayError> {
    let query = validate_query(req.query.as_deref())?;
    info!(route = "evaluate-query", "relaying query");

    let raw = state.evaluator.submit(query).await.map_err(|e| {
        error!(route = "evaluate-query", error = %e, "upstream call failed");
        e
    })?;

    let body = match normalizer::classify(raw) {
        ResponseShape::Wrapped(schema) => {
            serde_json::to_value(normalizer::normalize_evaluation(&schema))?
        }
        ResponseShape::Final(value) => value,
    };
    Ok(Json(body))
}

async fn compare_llms(
    State(state): State<AppStateArc>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<Value>, RelayError> {
    let query = validate_query(req.query.as_deref())?;
    info!(route = "compare-llms", "relaying query");

    let raw = state.comparator.submit(query).await.map_err(|e| {
        error!(route = "compare-llms", error = %e, "upstream call failed");
        e
    })?;

    let body = match normalizer::classify(raw) {
        ResponseShape::Wrapped(schema) => {
            serde_json::to_value(normalizer::normalize_comparison(&schema))?
        }
        ResponseShape::Final(value) => value,
    };
    Ok(Json(body))
}
