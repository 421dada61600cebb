//! Board state tracking for one advisory request.

use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Position};

use crate::error::NotationError;
use crate::notation::resolve_san;

/// A game replayed from the standard starting position, one SAN move at a time.
///
/// The position always reflects exactly the moves in `history`; a rejected
/// move leaves both untouched.
#[derive(Debug, Clone, Default)]
pub struct BoardTracker {
    position: Chess,
    history: Vec<UciMove>,
}

impl BoardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a SAN move if it is legal in the current position and return its
    /// coordinate form.
    pub fn apply_move(&mut self, san: &str) -> Result<&UciMove, NotationError> {
        let mv = resolve_san(&self.position, san)?;
        self.history.push(mv.to_uci(CastlingMode::Standard));
        self.position.play_unchecked(mv);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Coordinate moves applied so far, in game order.
    pub fn history(&self) -> &[UciMove] {
        &self.history
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn into_history(self) -> Vec<UciMove> {
        self.history
    }

    /// Replay a coordinate sequence from the starting position.
    pub fn replay(moves: &[UciMove]) -> Result<Chess, NotationError> {
        let mut pos = Chess::default();
        for uci in moves {
            let mv = uci
                .to_move(&pos)
                .map_err(|e| NotationError::unknown(uci, e))?;
            pos.play_unchecked(mv);
        }
        Ok(pos)
    }
}
