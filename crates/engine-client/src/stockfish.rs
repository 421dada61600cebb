//! Stockfish engine wrapper using UCI protocol (async I/O)

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use shakmaty::uci::UciMove;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::AnalysisEngine;

/// Pipes to a running engine process.
struct UciProcess {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    /// A `go` was sent whose `bestmove` has not been read yet.
    searching: bool,
}

impl UciProcess {
    /// Send a command to the engine
    async fn send(&mut self, cmd: &str) -> Result<(), EngineError> {
        debug!(cmd, "engine <");
        self.stdin.write_all(format!("{cmd}\n").as_bytes()).await?;
        self.stdin.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        if self.stdout.read_line(&mut line).await? == 0 {
            return Err(EngineError::Closed);
        }
        let trimmed = line.trim().to_string();
        debug!(line = %trimmed, "engine >");
        Ok(trimmed)
    }

    /// Wait for a specific response line
    async fn wait_for(&mut self, expected: &str) -> Result<(), EngineError> {
        loop {
            if self.read_line().await? == expected {
                return Ok(());
            }
        }
    }

    /// Read until the `bestmove` line that ends the current search.
    async fn read_bestmove(&mut self) -> Result<Option<String>, EngineError> {
        loop {
            let line = self.read_line().await?;
            if let Some(best) = parse_bestmove(&line) {
                self.searching = false;
                return Ok(best.map(str::to_string));
            }
        }
    }

    /// Stop and drain a search left behind by a caller that went away mid-query.
    async fn finish_pending_search(&mut self) -> Result<(), EngineError> {
        if self.searching {
            warn!("Discarding result of an abandoned search");
            self.send("stop").await?;
            self.read_bestmove().await?;
        }
        Ok(())
    }
}

/// Stockfish engine instance
///
/// One process per instance; queries are serialized so that a `position`
/// and its `go` are never interleaved with another caller's.
pub struct StockfishEngine {
    inner: Mutex<UciProcess>,
}

impl StockfishEngine {
    /// Spawn the engine process, run the UCI handshake and apply `config`.
    pub async fn spawn(path: &Path, config: &EngineConfig) -> Result<Self, EngineError> {
        let mut process = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EngineError::Spawn {
                path: path.display().to_string(),
                source,
            })?;

        let stdin = process.stdin.take().ok_or(EngineError::Closed)?;
        let stdout = BufReader::new(process.stdout.take().ok_or(EngineError::Closed)?);

        let mut uci = UciProcess {
            process,
            stdin,
            stdout,
            searching: false,
        };

        uci.send("uci").await?;
        uci.wait_for("uciok").await?;

        uci.send(&format!("setoption name Threads value {}", config.threads)).await?;
        uci.send(&format!("setoption name Hash value {}", config.hash_mb)).await?;
        uci.send("isready").await?;
        uci.wait_for("readyok").await?;

        info!(
            path = %path.display(),
            threads = config.threads,
            hash_mb = config.hash_mb,
            "Engine ready"
        );

        Ok(Self {
            inner: Mutex::new(uci),
        })
    }

    /// Send quit command and wait for process to exit
    pub async fn quit(&self) {
        let mut uci = self.inner.lock().await;
        if let Err(e) = uci.send("quit").await {
            warn!(error = %e, "Failed to send quit");
        }
        if let Err(e) = uci.process.wait().await {
            warn!(error = %e, "Failed to reap engine process");
        }
    }
}

#[async_trait]
impl AnalysisEngine for StockfishEngine {
    async fn best_move(
        &self,
        moves: &[UciMove],
        config: &EngineConfig,
    ) -> Result<Option<UciMove>, EngineError> {
        let mut uci = self.inner.lock().await;
        uci.finish_pending_search().await?;

        uci.send(&position_command(moves)).await?;
        uci.send(&format!("go movetime {}", config.thinking_time_ms)).await?;
        uci.searching = true;

        match uci.read_bestmove().await? {
            Some(text) => text
                .parse::<UciMove>()
                .map(Some)
                .map_err(|_| EngineError::Protocol(format!("bestmove {text}"))),
            None => Ok(None),
        }
    }
}

/// Build the `position` command for a game from the standard start.
fn position_command(moves: &[UciMove]) -> String {
    if moves.is_empty() {
        return "position startpos".to_string();
    }
    let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    format!("position startpos moves {}", list.join(" "))
}

/// Parse a `bestmove` line.
///
/// Returns `None` for any other line, `Some(None)` when the engine has no
/// move to offer.
fn parse_bestmove(line: &str) -> Option<Option<&str>> {
    let mut parts = line.split_whitespace();
    if parts.next()? != "bestmove" {
        return None;
    }
    match parts.next() {
        None | Some("(none)") | Some("0000") => Some(None),
        Some(mv) => Some(Some(mv)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bestmove() {
        assert_eq!(parse_bestmove("bestmove e2e4 ponder e7e5"), Some(Some("e2e4")));
        assert_eq!(parse_bestmove("bestmove a7a8q"), Some(Some("a7a8q")));
    }

    #[test]
    fn test_parse_bestmove_none() {
        assert_eq!(parse_bestmove("bestmove (none)"), Some(None));
        assert_eq!(parse_bestmove("bestmove 0000"), Some(None));
    }

    #[test]
    fn test_parse_bestmove_ignores_info() {
        let line = "info depth 20 seldepth 25 multipv 1 score cp 35 nodes 100000 pv e2e4";
        assert_eq!(parse_bestmove(line), None);
        assert_eq!(parse_bestmove(""), None);
    }

    #[test]
    fn test_position_command() {
        assert_eq!(position_command(&[]), "position startpos");
        let moves: Vec<UciMove> = vec!["e2e4".parse().unwrap(), "e7e5".parse().unwrap()];
        assert_eq!(position_command(&moves), "position startpos moves e2e4 e7e5");
    }

    #[tokio::test]
    async fn test_spawn_missing_binary() {
        let result =
            StockfishEngine::spawn(Path::new("/nonexistent/stockfish"), &EngineConfig::default())
                .await;
        assert!(matches!(result, Err(EngineError::Spawn { .. })));
    }

    #[tokio::test]
    async fn test_spawn_non_uci_process() {
        // `true` exits at once, so the handshake hits a closed pipe.
        let result = StockfishEngine::spawn(Path::new("true"), &EngineConfig::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires a Stockfish binary"]
    async fn test_real_engine_opening_move() {
        let config = EngineConfig {
            thinking_time_ms: 100,
            threads: 1,
            hash_mb: 16,
        };
        let path = crate::locate_engine(None);
        let engine = StockfishEngine::spawn(&path, &config).await.unwrap();

        let best = engine.best_move(&[], &config).await.unwrap();
        assert!(best.is_some());

        // Fool's mate: white is checkmated.
        let mated: Vec<UciMove> = ["f2f3", "e7e5", "g2g4", "d8h4"]
            .iter()
            .map(|m| m.parse().unwrap())
            .collect();
        assert_eq!(engine.best_move(&mated, &config).await.unwrap(), None);

        engine.quit().await;
    }
}
