//! Session HTTP handlers.
//!
//! Endpoints:
//! - POST /api/v1/sessions                 - Open a new session
//! - PUT  /api/v1/sessions/{id}            - Ensure a session exists (idempotent)
//! - POST /api/v1/sessions/{id}/messages   - Classify a message and record the turn
//! - GET  /api/v1/sessions/{id}/messages   - All recorded turns
//! - GET  /api/v1/sessions/{id}/transcript - Labelled transcript lines

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use patter_core::rules::classify;
use patter_core::session::TurnBlock;
use patter_types::turn::{SessionId, Turn};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for posting a message.
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    pub message: String,
}

/// Parse a session id from a path parameter, 400 on invalid format.
fn parse_session_id(s: &str) -> Result<SessionId, AppError> {
    s.parse::<SessionId>()
        .map_err(|_| AppError::Validation(format!("Invalid session id: {s}")))
}

/// Host-side submit guard: only messages with content reach the rule engine.
fn validate_message(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("Message text is empty".to_string()));
    }
    Ok(())
}

/// POST /api/v1/sessions - Open a new session with a fresh id.
pub async fn open_session(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let id = state.registry.open();

    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(json!({"session_id": id.to_string()}), request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{id}"))
        .with_link("messages", &format!("/api/v1/sessions/{id}/messages"));

    Ok(Json(resp))
}

/// PUT /api/v1/sessions/{id} - Ensure the session exists.
///
/// Idempotent: a live session keeps its history untouched; only a missing
/// one gets a fresh empty log. `created` reports which case this was.
pub async fn init_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let id = parse_session_id(&session_id)?;
    let created = state.registry.init(&id);
    let turn_count = state.registry.turn_count(&id)?;

    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(
        json!({"created": created, "turn_count": turn_count}),
        request_id,
        elapsed,
    )
    .with_link("self", &format!("/api/v1/sessions/{id}"))
    .with_link("messages", &format!("/api/v1/sessions/{id}/messages"));

    Ok(Json(resp))
}

/// POST /api/v1/sessions/{id}/messages - Classify a message and record the turn.
///
/// Returns the recorded turn plus its rendered block lines.
pub async fn post_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<PostMessageRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let id = parse_session_id(&session_id)?;
    validate_message(&body.message)?;

    let reply = classify(&body.message);
    let turn = state.registry.record_turn(&id, &body.message, reply)?;
    let block = TurnBlock::new(&turn).lines();

    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(json!({"turn": turn, "block": block}), request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{id}/messages"))
        .with_link("transcript", &format!("/api/v1/sessions/{id}/transcript"));

    Ok(Json(resp))
}

/// GET /api/v1/sessions/{id}/messages - All recorded turns, oldest first.
pub async fn get_messages(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Turn>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let id = parse_session_id(&session_id)?;
    let turns = state.registry.transcript(&id)?;

    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(turns, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{id}/messages"))
        .with_link("transcript", &format!("/api/v1/sessions/{id}/transcript"));

    Ok(Json(resp))
}

/// GET /api/v1/sessions/{id}/transcript - Labelled lines, three per turn.
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let id = parse_session_id(&session_id)?;
    let lines = state.registry.render(&id)?;

    let elapsed = start.elapsed().as_millis() as u64;

    let resp = ApiResponse::success(lines, request_id, elapsed)
        .with_link("self", &format!("/api/v1/sessions/{id}/transcript"))
        .with_link("messages", &format!("/api/v1/sessions/{id}/messages"));

    Ok(Json(resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_rejected() {
        assert!(validate_message("").is_err());
        assert!(validate_message("   ").is_err());
        assert!(validate_message("\t\n").is_err());
    }

    #[test]
    fn non_empty_message_is_accepted() {
        assert!(validate_message("hello").is_ok());
        assert!(validate_message("  hi  ").is_ok());
    }

    #[test]
    fn invalid_session_id_is_validation_error() {
        let err = parse_session_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn valid_session_id_parses() {
        let id = SessionId::new();
        assert_eq!(parse_session_id(&id.to_string()).unwrap(), id);
    }
}
