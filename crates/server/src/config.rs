use std::path::PathBuf;

use clap::Parser;
use engine_client::EngineConfig;
use tracing::info;

/// Startup parameters, read from arguments with environment fallbacks.
#[derive(Parser, Clone, Debug)]
#[command(name = "server", about = "Best-move advisor backed by a UCI chess engine")]
pub struct Config {
    /// Thinking time in milliseconds
    #[arg(
        long,
        env = "THINK_TIME_MS",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub milliseconds: u64,

    /// Number of engine threads
    #[arg(
        long,
        env = "ENGINE_THREADS",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub threads: u32,

    /// Hash size in MB
    #[arg(
        long,
        env = "ENGINE_HASH_MB",
        default_value_t = 128,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub hash: u32,

    /// Engine binary; probed from well-known locations when absent
    #[arg(long, env = "STOCKFISH_PATH")]
    pub engine_path: Option<PathBuf>,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl Config {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            thinking_time_ms: self.milliseconds,
            threads: self.threads,
            hash_mb: self.hash,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log the effective configuration once for operators.
    pub fn log_summary(&self) {
        info!("=== Chess Engine Configuration ===");
        info!("Thinking time: {} ms", self.milliseconds);
        info!("Threads: {}", self.threads);
        info!("Hash size: {} MB", self.hash);
        match &self.engine_path {
            Some(path) => info!("Engine path: {}", path.display()),
            None => info!("Engine path: auto-detect"),
        }
        info!("==================================");
    }
}
