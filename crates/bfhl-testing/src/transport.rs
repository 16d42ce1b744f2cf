//! In-memory transport with scripted results.

use async_trait::async_trait;
use bfhl_runtime::Transport;
use bfhl_types::{RequestFailure, RequestPayload, ResponsePayload};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Transport that replays queued results and records every request.
///
/// When the queue is empty, `send` fails with a network error.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    script: Mutex<VecDeque<Result<ResponsePayload, RequestFailure>>>,
    requests: Mutex<Vec<RequestPayload>>,
    sends: AtomicUsize,
    probes: AtomicUsize,
    operation_code: Option<i64>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response built from JSON.
    pub fn respond(self, body: serde_json::Value) -> Self {
        let payload = ResponsePayload::from_value(body).expect("response fixture must be an object");
        self.script.lock().unwrap().push_back(Ok(payload));
        self
    }

    /// Queue a failure.
    pub fn fail(self, failure: RequestFailure) -> Self {
        self.script.lock().unwrap().push_back(Err(failure));
        self
    }

    pub fn with_operation_code(mut self, code: i64) -> Self {
        self.operation_code = Some(code);
        self
    }

    /// Number of `send` calls made.
    pub fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RequestPayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &RequestPayload) -> Result<ResponsePayload, RequestFailure> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestFailure::Network("no scripted response".to_string())))
    }

    async fn probe(&self) -> Result<i64, RequestFailure> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.operation_code
            .ok_or_else(|| RequestFailure::Network("no scripted operation code".to_string()))
    }
}
