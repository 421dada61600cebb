use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::{AdviceError, FailureKind, MoveAdvisor};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AdviseRequest {
    pub moves: Vec<String>,
}

/// `best_move` stays a bare UCI string: the browser client types it straight
/// into the move box.
#[derive(Debug, Serialize)]
pub struct AdviseResponse {
    pub best_move: String,
    pub best_move_san: String,
}

/// POST /
pub async fn advise(
    Extension(advisor): Extension<Arc<MoveAdvisor>>,
    payload: Result<Json<AdviseRequest>, JsonRejection>,
) -> Result<Json<AdviseResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected request body");
        AdviceError::InvalidInput("Invalid input".to_string())
    })?;

    tracing::Span::current().record("moves", request.moves.len());

    match advisor.advise(&request.moves).await {
        Ok(best_move) => {
            tracing::info!(uci = %best_move.uci, san = %best_move.san, "Best move");
            Ok(Json(AdviseResponse {
                best_move: best_move.uci,
                best_move_san: best_move.san,
            }))
        }
        Err(e) => {
            match e.kind() {
                FailureKind::EngineFailure => tracing::error!(error = %e, "Engine failure"),
                _ => tracing::warn!(error = %e, "Rejected move list"),
            }
            Err(e.into())
        }
    }
}
