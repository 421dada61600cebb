//! Client side of an external UCI analysis engine.
//!
//! The engine is treated as stateless: every query sends the full move list
//! from the starting position and asks for one best move.

pub mod config;
pub mod error;
pub mod locate;
pub mod stockfish;

use async_trait::async_trait;
use shakmaty::uci::UciMove;

pub use config::EngineConfig;
pub use error::EngineError;
pub use locate::locate_engine;
pub use stockfish::StockfishEngine;

/// Anything that can answer "best move after these moves".
#[async_trait]
pub trait AnalysisEngine: Send + Sync {
    /// Search the position reached by `moves` from the start for
    /// `config.thinking_time_ms`.
    ///
    /// `Ok(None)` means the engine answered but had no move to offer
    /// (checkmate or stalemate).
    async fn best_move(
        &self,
        moves: &[UciMove],
        config: &EngineConfig,
    ) -> Result<Option<UciMove>, EngineError>;
}
