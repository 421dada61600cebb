//! Chess rules glue for the move advisor.
//!
//! Legality, disambiguation and notation rendering all come from `shakmaty`;
//! this crate only tracks one game's history and converts between SAN (what
//! people type) and UCI coordinate moves (what engines speak).

pub mod board;
pub mod error;
pub mod notation;

pub use board::BoardTracker;
pub use error::NotationError;
pub use notation::{to_algebraic, to_coordinate};

pub use shakmaty::uci::UciMove;
pub use shakmaty::Chess;
