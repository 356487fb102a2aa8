//! HTTP transport binding — a thin axum layer over [`FusionEngine`].
//!
//! Accepts either `GET /answer?domain=<d>&q=<query>` or `POST /answer`
//! with a JSON body `{ "domain"?: string, "query": string }`. A missing or
//! empty query is a 400 with `{"error":"query required"}`; everything
//! else, including total channel failure, is a 200 with the (possibly
//! degraded) answer payload.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::FusionError;
use crate::fusion::FusionEngine;
use crate::registry::DEFAULT_DOMAIN;

/// Shared state for the transport layer.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<FusionEngine>,
}

/// Build the router. The engine is shared; the transport holds no other
/// state.
pub fn create_router(engine: Arc<FusionEngine>) -> Router {
    Router::new()
        .route("/answer", get(answer_get).post(answer_post))
        .with_state(AppState { engine })
}

#[derive(Debug, Deserialize)]
struct AnswerParams {
    domain: Option<String>,
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnswerRequest {
    domain: Option<String>,
    query: Option<String>,
}

async fn answer_get(
    State(state): State<AppState>,
    Query(params): Query<AnswerParams>,
) -> (StatusCode, Json<Value>) {
    respond(&state, params.domain, params.q).await
}

async fn answer_post(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest>,
) -> (StatusCode, Json<Value>) {
    respond(&state, payload.domain, payload.query).await
}

async fn respond(
    state: &AppState,
    domain: Option<String>,
    query: Option<String>,
) -> (StatusCode, Json<Value>) {
    let domain = domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_owned());
    let query = query.unwrap_or_default();

    match state.engine.answer(&domain, &query).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(json!({ "query": query, "domain": domain, "answer": answer })),
        ),
        Err(FusionError::EmptyQuery) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "query required" })),
        ),
        // Engine construction errors cannot occur here, but keep the
        // mapping total.
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}
