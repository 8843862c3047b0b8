use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{field} {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("no movie with id {0}")]
    NotFound(MovieId),

    #[error("invalid movie id {0:?}")]
    InvalidId(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl StoreError {
    pub fn required(field: &'static str) -> Self {
        Self::Validation { field, reason: "is required".to_string() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Validation { .. } => "ValidationError",
            StoreError::NotFound(_) => "NotFound",
            StoreError::InvalidId(_) => "InvalidId",
            StoreError::Database(_) => "DatabaseError",
        }
    }
}

#[derive(Debug)]
pub struct AppError(StoreError);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self(StoreError::Database(err))
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0 {
            StoreError::Validation { .. } | StoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(kind = self.0.kind(), error = %self, "request rejected");
        }

        let body = json!({
            "error": {
                "kind": self.0.kind(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type StoreResult<T> = Result<T, StoreError>;
