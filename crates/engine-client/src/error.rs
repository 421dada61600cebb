//! Engine client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to spawn engine '{path}': {source}")]
    Spawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Engine process closed its output")]
    Closed,

    #[error("Unexpected engine output: {0}")]
    Protocol(String),
}
