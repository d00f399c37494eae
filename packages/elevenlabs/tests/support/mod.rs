//! In-process stand-in for the text-to-speech service.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use elevenlabs_tts::{ClientConfig, ElevenLabsClient};
use futures::StreamExt;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const API_KEY: &str = "test-key";

/// What the mock answers with.
#[derive(Clone, Debug)]
pub enum Reply {
    /// 200 with an `audio/mpeg` body.
    Audio(Vec<u8>),
    /// Any status with a raw body.
    Status(u16, String),
    /// 200, sends the first chunk and then never finishes the body.
    Stall(Vec<u8>),
    /// Any status, sends the first chunk and then never finishes the body.
    StallStatus(u16, Vec<u8>),
    /// Never sends response headers.
    Hang,
}

#[derive(Clone, Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockService {
    pub async fn start(reply: Reply) -> Self {
        Self::start_at(reply, "").await
    }

    /// Serve with the client's base url pointing at `prefix` on the mock.
    pub async fn start_at(reply: Reply, prefix: &str) -> Self {
        init_tracing();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            requests: requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}{prefix}"),
            requests,
        }
    }

    pub fn client(&self) -> ElevenLabsClient {
        self.client_with(ClientConfig::default())
    }

    pub fn client_with(&self, config: ClientConfig) -> ElevenLabsClient {
        ElevenLabsClient::new_with_config(
            API_KEY,
            ClientConfig {
                base_url: self.base_url.clone(),
                ..config
            },
        )
        .unwrap()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    state.requests.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    });

    match state.reply {
        Reply::Audio(audio) => Response::builder()
            .status(StatusCode::OK)
            .header("content-type", "audio/mpeg")
            .body(Body::from(audio))
            .unwrap(),
        Reply::Status(code, body) => Response::builder()
            .status(StatusCode::from_u16(code).unwrap())
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        Reply::Stall(first) => stalled(StatusCode::OK, "audio/mpeg", first),
        Reply::StallStatus(code, first) => {
            stalled(StatusCode::from_u16(code).unwrap(), "application/json", first)
        }
        Reply::Hang => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Response::new(Body::empty())
        }
    }
}

fn stalled(status: StatusCode, content_type: &str, first: Vec<u8>) -> Response {
    let stream = futures::stream::once(async move { Ok::<_, Infallible>(Bytes::from(first)) })
        .chain(futures::stream::pending());
    Response::builder()
        .status(status)
        .header("content-type", content_type)
        .body(Body::from_stream(stream))
        .unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Log output collected from the client crate on the current thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Route `elevenlabs_tts` events at `directive` level into a buffer until the guard drops.
pub fn capture_logs(directive: &str) -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

/// Deterministic fake MP3 payload of `len` bytes, starting with a frame sync.
pub fn fake_mp3(len: usize) -> Vec<u8> {
    let mut audio = vec![0xFF, 0xFB, 0x90, 0x64];
    audio.extend((0..len.saturating_sub(4)).map(|i| (i * 31 % 251) as u8));
    audio.truncate(len);
    audio
}
