//! SAN <-> UCI conversion against a concrete position.

use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Move};

use crate::error::NotationError;

/// Resolve a SAN token to the legal move it denotes in `pos`.
pub(crate) fn resolve_san(pos: &Chess, token: &str) -> Result<Move, NotationError> {
    let cleaned = normalize_san(token);
    if cleaned.is_empty() {
        return Err(NotationError::illegal(token, "empty move"));
    }

    let san_plus: SanPlus = cleaned
        .parse()
        .map_err(|e| NotationError::illegal(token, format!("invalid SAN: {e}")))?;

    san_plus
        .san
        .to_move(pos)
        .map_err(|e| NotationError::illegal(token, e))
}

/// Convert a SAN token into the coordinate move it denotes in `pos`.
pub fn to_coordinate(pos: &Chess, token: &str) -> Result<UciMove, NotationError> {
    resolve_san(pos, token).map(|mv| mv.to_uci(CastlingMode::Standard))
}

/// Render a coordinate move as SAN (with `+`/`#` suffix) as played from `pos`.
pub fn to_algebraic(pos: &Chess, uci: &UciMove) -> Result<String, NotationError> {
    let mv = uci
        .to_move(pos)
        .map_err(|e| NotationError::unknown(uci, e))?;
    Ok(SanPlus::from_move(pos.clone(), mv).to_string())
}

/// Strip whitespace and move annotations, and accept zeros in castling.
fn normalize_san(token: &str) -> String {
    let trimmed = token.trim().trim_end_matches(['!', '?']);
    match trimmed.trim_end_matches(['+', '#']) {
        "0-0" => trimmed.replacen("0-0", "O-O", 1),
        "0-0-0" => trimmed.replacen("0-0-0", "O-O-O", 1),
        _ => trimmed.to_string(),
    }
}
