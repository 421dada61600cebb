//! Finding the engine binary on disk.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Places a Stockfish build is commonly installed.
pub const CANDIDATE_PATHS: &[&str] = &[
    "/usr/local/bin/stockfish",
    "/usr/bin/stockfish",
    "/usr/games/stockfish",
    "/opt/homebrew/bin/stockfish",
    "C:/Chess Engines/Stockfish 17/stockfish.exe",
];

/// Name handed to the OS when no candidate exists, resolved through `PATH`.
pub const FALLBACK_NAME: &str = "stockfish";

/// Pick the engine binary: an explicit path wins, then the first existing
/// candidate, then the bare name.
pub fn locate_engine(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        if !path.is_file() {
            warn!(path = %path.display(), "Configured engine path does not exist");
        }
        return path.to_path_buf();
    }

    locate_in(CANDIDATE_PATHS.iter().map(Path::new))
}

fn locate_in<'a>(candidates: impl IntoIterator<Item = &'a Path>) -> PathBuf {
    for candidate in candidates {
        if candidate.is_file() {
            info!(path = %candidate.display(), "Found engine binary");
            return candidate.to_path_buf();
        }
    }

    info!("No engine binary in known locations, falling back to PATH lookup");
    PathBuf::from(FALLBACK_NAME)
}
