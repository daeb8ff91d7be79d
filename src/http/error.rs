use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::kitchen_actor::ScheduleError;
use crate::order_actor::OrderError;
use crate::validation::ValidationErrors;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => Self::NotFound(format!("Order with ID {id} not found")),
            OrderError::Rejected(reason) => ValidationErrors::single(&["body"], reason).into(),
            OrderError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::NotFound(id) => Self::NotFound(format!("Resource with ID {id} not found")),
            ScheduleError::Rejected(reason) => ValidationErrors::single(&["body"], reason).into(),
            ScheduleError::ActorCommunicationError(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": errors }))).into_response()
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "detail": msg }))).into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({ "detail": msg }))).into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
