//! Minimal UCI engine that always plays the first legal move.
//!
//! Stands in for Stockfish in protocol tests and local runs:
//! `server --engine-path target/debug/uci-stub`.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Position};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut position = Chess::default();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("uci") => {
                writeln!(out, "id name uci-stub")?;
                writeln!(out, "uciok")?;
            }
            Some("isready") => writeln!(out, "readyok")?,
            Some("position") => position = parse_position(parts),
            Some("go") => {
                // Honour `movetime` so callers can observe a search in flight.
                if let Some(ms) = parse_movetime(parts) {
                    thread::sleep(Duration::from_millis(ms));
                }
                let best = position
                    .legal_moves()
                    .first()
                    .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
                    .unwrap_or_else(|| "(none)".to_string());
                writeln!(out, "info depth 1 score cp 0 pv {best}")?;
                writeln!(out, "bestmove {best}")?;
            }
            Some("quit") => break,
            _ => {}
        }
        out.flush()?;
    }
    Ok(())
}

/// `startpos [moves ...]`; stops at the first move that does not apply.
fn parse_position<'a>(mut parts: impl Iterator<Item = &'a str>) -> Chess {
    let mut pos = Chess::default();
    if parts.next() != Some("startpos") {
        return pos;
    }
    for text in parts.skip_while(|p| *p == "moves") {
        let Ok(uci) = text.parse::<UciMove>() else {
            break;
        };
        let Ok(mv) = uci.to_move(&pos) else {
            break;
        };
        pos.play_unchecked(mv);
    }
    pos
}

/// Value of `movetime` in a `go` command, if any.
fn parse_movetime<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<u64> {
    parts.find(|p| *p == "movetime")?;
    parts.next()?.parse().ok()
}
