use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chess_core::{BoardTracker, UciMove};
use engine_client::{AnalysisEngine, EngineConfig, EngineError};
use reqwest::Client;
use server::advisor::MoveAdvisor;
use shakmaty::{CastlingMode, Position};
use tokio::net::TcpListener;

/// How the scripted engine answers.
pub enum Script {
    /// First legal move in generation order, `None` in terminal positions.
    FirstLegal,
    /// The engine process is gone.
    Unavailable,
    /// Blow up inside the handler.
    Panic,
}

/// In-process stand-in for the external engine.
pub struct ScriptedEngine {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisEngine for ScriptedEngine {
    async fn best_move(
        &self,
        moves: &[UciMove],
        _config: &EngineConfig,
    ) -> Result<Option<UciMove>, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::FirstLegal => {
                let pos = BoardTracker::replay(moves)
                    .map_err(|e| EngineError::Protocol(e.to_string()))?;
                Ok(pos
                    .legal_moves()
                    .first()
                    .map(|mv| mv.to_uci(CastlingMode::Standard)))
            }
            Script::Unavailable => Err(EngineError::Closed),
            Script::Panic => panic!("engine exploded"),
        }
    }
}

/// Start the router on an OS-assigned port and return its base URL.
pub async fn start_server(engine: Arc<ScriptedEngine>) -> String {
    let advisor = Arc::new(MoveAdvisor::new(engine, EngineConfig::default()));
    let app = server::routes::router(advisor);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", addr.port())
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}
