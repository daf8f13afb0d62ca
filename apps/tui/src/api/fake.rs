// Canned-response transport for tests

use crate::api::{ApiError, Transport};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    responses: HashMap<String, Result<Value, ApiError>>,
    gates: HashMap<String, oneshot::Receiver<()>>,
    requests: Vec<String>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, body: Value) -> Self {
        self.inner
            .lock()
            .responses
            .insert(url.to_string(), Ok(body));
        self
    }

    pub fn fail(self, url: &str, reason: &str) -> Self {
        self.inner
            .lock()
            .responses
            .insert(url.to_string(), Err(ApiError::Transport(reason.to_string())));
        self
    }

    /// Holds the response for `url` until the returned sender fires.
    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.lock().gates.insert(url.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().requests.clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        let gate = {
            let mut inner = self.inner.lock();
            inner.requests.push(url.to_string());
            inner.gates.remove(url)
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.inner
            .lock()
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("connection refused: {url}"))))
    }
}

/// Wraps `data` in a successful envelope.
pub fn ok(data: Value) -> Value {
    serde_json::json!({"success": true, "message": "ok", "data": data})
}
