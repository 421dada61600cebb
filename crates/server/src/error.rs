use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::advisor::{AdviceError, FailureKind};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Advice(#[from] AdviceError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Advice(e) if e.kind() == FailureKind::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::Advice(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Advice(e) => e.kind().as_str(),
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Advice(e) => e.to_string(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                msg.clone()
            }
        };

        (
            self.status(),
            Json(json!({ "error": message, "kind": self.kind() })),
        )
            .into_response()
    }
}
