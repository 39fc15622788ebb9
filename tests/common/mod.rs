// Loopback stand-in for the Hive API, served by axum on a background tokio
// runtime. The upload route records what it received and answers with a
// canned status and body.

#![allow(dead_code)]

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::put;
use axum::Router;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One multipart field as the server saw it.
pub struct CapturedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

pub struct CapturedRequest {
    pub hive_id: String,
    pub headers: HeaderMap,
    pub parts: Vec<CapturedPart>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn part(&self, name: &str) -> Option<&CapturedPart> {
        self.parts.iter().find(|p| p.name == name)
    }
}

struct StubState {
    status: StatusCode,
    body: String,
    requests: Mutex<Sender<CapturedRequest>>,
}

pub struct StubHive {
    pub base_url: String,
    requests: Receiver<CapturedRequest>,
}

impl StubHive {
    pub fn start(status: u16, body: &str) -> Self {
        let (tx, requests) = mpsc::channel();
        let state = Arc::new(StubState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            requests: Mutex::new(tx),
        });

        let (addr_tx, addr_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .expect("building stub runtime failed");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind loopback");
                addr_tx
                    .send(listener.local_addr().expect("local addr"))
                    .expect("report stub address");
                axum::serve(listener, router(state))
                    .await
                    .expect("stub server failed");
            });
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("stub did not start");
        StubHive {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn received(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(10))
            .expect("stub received no request")
    }

    pub fn assert_untouched(&self) {
        assert!(
            self.requests
                .recv_timeout(Duration::from_millis(300))
                .is_err(),
            "expected no request to reach the stub"
        );
    }
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/api/hives/{id}/from-mcp-server", put(update_from_mcp_server))
        .with_state(state)
}

async fn update_from_mcp_server(
    State(state): State<Arc<StubState>>,
    Path(hive_id): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let content = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(CapturedPart {
            name,
            file_name,
            content_type,
            content,
        });
    }

    if let Ok(tx) = state.requests.lock() {
        let _ = tx.send(CapturedRequest {
            hive_id,
            headers,
            parts,
        });
    }

    (
        state.status,
        [("content-type", "application/json"), ("x-stub", "hive")],
        state.body.clone(),
    )
}

/// Base URL of a port nothing is listening on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
