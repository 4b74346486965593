//! HTTP API endpoint handlers.
//!
//! Handlers receive untyped JSON bodies and run every field through the
//! sanitizer before anything reaches a usecase. The acting participant's
//! identity comes from the `user` header, out-of-band from the payload.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    domain::{MessageBody, MessageKind, ParticipantName, Recipient, ValidationError, validate},
    infrastructure::dto::http::{MessageDto, ParticipantDto},
    ui::{error::ApiError, state::AppState},
    usecase::{HeartbeatUseCase, JoinRoomUseCase, PostMessageUseCase, ReadMessagesUseCase},
};

/// Query parameters for the messages endpoint
#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<String>,
}

/// Extract and sanitize the caller identity from the `user` header.
fn caller_identity(headers: &HeaderMap) -> Result<ParticipantName, ValidationError> {
    let raw = headers
        .get("user")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ValidationError::InvalidType("user".to_string()))?;
    ParticipantName::new(raw)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Join the room
pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let name = ParticipantName::new(validate::required_field(&body, "name")?)?;

    JoinRoomUseCase::new(state.repository.clone())
        .execute(name)
        .await?;
    Ok(StatusCode::OK)
}

/// Get the current participant snapshot
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = state
        .repository
        .participants()
        .await
        .map_err(ApiError::Repository)?;
    Ok(Json(
        participants.into_iter().map(ParticipantDto::from).collect(),
    ))
}

/// Refresh the caller's activity clock to prevent auto-eviction
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let user = caller_identity(&headers)?;

    HeartbeatUseCase::new(state.repository.clone())
        .execute(user)
        .await?;
    Ok(StatusCode::OK)
}

/// Deliver the messages visible to the caller, optionally tail-limited
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let viewer = caller_identity(&headers)?;

    // Non-numeric or non-positive limits are ignored, never rejected.
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n as usize);

    let messages = ReadMessagesUseCase::new(state.repository.clone())
        .execute(&viewer, limit)
        .await
        .map_err(ApiError::Repository)?;
    Ok(Json(messages.into_iter().map(MessageDto::from).collect()))
}

/// Post a new message as the caller
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<StatusCode, ApiError> {
    let to = Recipient::new(validate::required_field(&body, "to")?)?;
    let text = MessageBody::new(validate::required_field(&body, "text")?)?;
    let kind = MessageKind::parse(validate::required_field(&body, "type")?)?;
    let from = caller_identity(&headers)?;

    PostMessageUseCase::new(state.repository.clone())
        .execute(from, to, text, kind)
        .await?;
    Ok(StatusCode::OK)
}
