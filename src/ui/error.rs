//! Mapping from domain and usecase errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::{RepositoryError, ValidationError},
    usecase::{HeartbeatError, JoinError, PostMessageError},
};

/// Error type returned by every handler.
///
/// Validation failures and unknown identities map to 400, a duplicate join
/// to 409, and storage failures to 500 (never conflated with an empty
/// store). The body is the human-readable error message.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Join(JoinError),
    Heartbeat(HeartbeatError),
    Post(PostMessageError),
    Repository(RepositoryError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        Self::Join(err)
    }
}

impl From<HeartbeatError> for ApiError {
    fn from(err: HeartbeatError) -> Self {
        Self::Heartbeat(err)
    }
}

impl From<PostMessageError> for ApiError {
    fn from(err: PostMessageError) -> Self {
        Self::Post(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Join(JoinError::NameConflict(_)) => {
                (StatusCode::CONFLICT, "Name is already in use".to_string())
            }
            Self::Heartbeat(HeartbeatError::UserNotFound(_)) => {
                (StatusCode::BAD_REQUEST, "User not found".to_string())
            }
            Self::Post(PostMessageError::SenderNotRegistered(_)) => (
                StatusCode::BAD_REQUEST,
                "Sender is not on the list".to_string(),
            ),
            Self::Join(JoinError::Repository(err))
            | Self::Heartbeat(HeartbeatError::Repository(err))
            | Self::Post(PostMessageError::Repository(err))
            | Self::Repository(err) => {
                tracing::error!("Storage failure while handling request: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage unavailable".to_string(),
                )
            }
        };
        (status, message).into_response()
    }
}
