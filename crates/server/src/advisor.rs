//! Move advisor: validates a SAN move list, asks the engine, answers in both notations.

use std::sync::Arc;

use chess_core::{to_algebraic, BoardTracker, NotationError};
use engine_client::{AnalysisEngine, EngineConfig, EngineError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Classification of a failed advisory request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    InvalidMove,
    EngineFailure,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "invalid_input",
            FailureKind::InvalidMove => "invalid_move",
            FailureKind::EngineFailure => "engine_failure",
        }
    }
}

/// The engine's suggestion in coordinate and algebraic form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMove {
    pub uci: String,
    pub san: String,
}

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid move at index {index}: {source}")]
    InvalidMove {
        index: usize,
        #[source]
        source: NotationError,
    },

    #[error("No move found")]
    NoMoveFound,

    #[error(transparent)]
    EngineUnavailable(#[from] EngineError),

    #[error("Engine suggested an unusable move: {0}")]
    UnusableEngineMove(NotationError),
}

impl AdviceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AdviceError::InvalidInput(_) => FailureKind::InvalidInput,
            AdviceError::InvalidMove { .. } => FailureKind::InvalidMove,
            AdviceError::NoMoveFound
            | AdviceError::EngineUnavailable(_)
            | AdviceError::UnusableEngineMove(_) => FailureKind::EngineFailure,
        }
    }
}

pub type AdvisoryResult = Result<BestMove, AdviceError>;

/// Request-independent half of the pipeline: the shared engine and its settings.
pub struct MoveAdvisor {
    engine: Arc<dyn AnalysisEngine>,
    config: EngineConfig,
}

impl MoveAdvisor {
    pub fn new(engine: Arc<dyn AnalysisEngine>, config: EngineConfig) -> Self {
        Self { engine, config }
    }

    /// Replay `moves` from the starting position and return the engine's best
    /// reply. Stops at the first illegal move; the engine is never consulted
    /// for an invalid sequence.
    pub async fn advise(&self, moves: &[String]) -> AdvisoryResult {
        let mut tracker = BoardTracker::new();
        for (index, token) in moves.iter().enumerate() {
            tracker
                .apply_move(token)
                .map_err(|source| AdviceError::InvalidMove { index, source })?;
        }
        let history = tracker.into_history();

        debug!(plies = history.len(), "Querying engine");
        let best = self
            .engine
            .best_move(&history, &self.config)
            .await?
            .ok_or(AdviceError::NoMoveFound)?;

        // Render from a fresh replay so the validation state stays untouched.
        let position = BoardTracker::replay(&history).map_err(AdviceError::UnusableEngineMove)?;
        let san = to_algebraic(&position, &best).map_err(AdviceError::UnusableEngineMove)?;

        debug!(uci = %best, san = %san, "Engine answered");
        Ok(BestMove {
            uci: best.to_string(),
            san,
        })
    }
}
