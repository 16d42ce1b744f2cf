//! Local `/bfhl` service stub for exercising the real transport.
//!
//! An axum app answers `POST /bfhl` and `GET /bfhl` with one canned
//! response. It runs on its own thread and runtime so synchronous CLI tests
//! and `#[tokio::test]` functions can both use it; dropping the stub shuts
//! the server down gracefully and joins that thread.

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Decoded JSON body; `Null` for requests without one
    pub body: Value,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        self.body.clone()
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Arc<str>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubState {
    // Recorded before the response goes out so callers see it as soon as
    // their await returns.
    fn record(&self, method: &str, uri: &Uri, body: Value) -> Response {
        self.requests
            .lock()
            .expect("stub requests lock")
            .push(RecordedRequest {
                method: method.to_string(),
                path: uri.path().to_string(),
                body,
            });

        (
            self.status,
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CONNECTION, "close"),
            ],
            self.body.to_string(),
        )
            .into_response()
    }
}

async fn submit(
    State(state): State<StubState>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    state.record("POST", &uri, body)
}

async fn probe(State(state): State<StubState>, uri: Uri) -> Response {
    state.record("GET", &uri, Value::Null)
}

pub struct StubServer {
    addr: SocketAddr,
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Serve `body` with HTTP `status` on a random local port.
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).expect("valid HTTP status"),
            body: Arc::from(body.into()),
            requests: Arc::clone(&requests),
        };
        let app = Router::new()
            .route("/bfhl", post(submit).get(probe))
            .with_state(state);

        // Bound up front so the address is known before the thread starts.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        listener
            .set_nonblocking(true)
            .expect("set stub listener non-blocking");
        let addr = listener.local_addr().expect("stub listener local addr");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build stub runtime");

            runtime.block_on(async move {
                let listener = TcpListener::from_std(listener).expect("adopt stub listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("run stub server");
            });
        });

        Self {
            addr,
            url: format!("http://{}/bfhl", addr),
            requests,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Serve a JSON value with status 200.
    pub fn json(body: &Value) -> Self {
        Self::start(200, body.to_string())
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Endpoint URL, including the `/bfhl` path.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("stub requests lock").len()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
