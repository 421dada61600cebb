//! Failures logged while serving a request carry that request's context.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{Script, ScriptedEngine};
use serde_json::json;
use tracing::Level;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Runs on the current-thread runtime so the server task sees the
// thread-local subscriber.
#[tokio::test]
async fn panic_log_names_the_request() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let engine = ScriptedEngine::new(Script::Panic);
    let base = common::start_server(engine).await;

    let resp = common::client()
        .post(format!("{base}/"))
        .json(&json!({ "moves": ["e4"] }))
        .send()
        .await
        .expect("Failed to send advise request");
    assert_eq!(resp.status(), 500);

    let output = logs.contents();
    let line = output
        .lines()
        .find(|line| line.contains("engine exploded"))
        .unwrap_or_else(|| panic!("no panic log in:\n{output}"));
    assert!(line.contains("method=POST"), "{line}");
    assert!(line.contains("uri=/"), "{line}");
    assert!(line.contains("moves=1"), "{line}");
}
