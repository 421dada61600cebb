use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A SAN token that is malformed, ambiguous or illegal in the position.
    #[error("illegal move '{token}': {reason}")]
    IllegalMove { token: String, reason: String },

    /// A coordinate move that does not parse or is not legal in the position.
    #[error("unknown move '{uci}': {reason}")]
    UnknownMove { uci: String, reason: String },
}

impl NotationError {
    pub(crate) fn illegal(token: &str, reason: impl ToString) -> Self {
        NotationError::IllegalMove {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn unknown(uci: impl ToString, reason: impl ToString) -> Self {
        NotationError::UnknownMove {
            uci: uci.to_string(),
            reason: reason.to_string(),
        }
    }
}
