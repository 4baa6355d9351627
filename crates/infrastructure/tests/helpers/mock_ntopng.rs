#![allow(dead_code)]
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const INTERFACES_PATH: &str = "/lua/rest/v1/get/ntopng/interfaces.lua";
pub const HOSTS_PATH: &str = "/lua/rest/v1/get/host/custom_data.lua";

pub fn envelope(rsp: &str) -> String {
    format!(
        r#"{{"rc":0,"rc_str":"OK","rc_str_hr":"Success","rsp":{}}}"#,
        rsp
    )
}

#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub path: String,
    pub cookie: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct MockState {
    interfaces: Mutex<(u16, String)>,
    hosts: Mutex<HashMap<i64, (u16, String)>>,
    delay: Mutex<Option<Duration>>,
    recorded: Mutex<Vec<RecordedRequest>>,
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

async fn interfaces_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    state.recorded.lock().unwrap().push(RecordedRequest {
        path: INTERFACES_PATH.to_string(),
        cookie: header(&headers, "cookie"),
        authorization: header(&headers, "authorization"),
        content_type: header(&headers, "content-type"),
        body: String::new(),
    });
    let delay = *state.delay.lock().unwrap();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    let (status, body) = state.interfaces.lock().unwrap().clone();
    (StatusCode::from_u16(status).unwrap(), body)
}

async fn hosts_handler(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.recorded.lock().unwrap().push(RecordedRequest {
        path: HOSTS_PATH.to_string(),
        cookie: header(&headers, "cookie"),
        authorization: header(&headers, "authorization"),
        content_type: header(&headers, "content-type"),
        body: body.clone(),
    });
    let ifid = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["ifid"].as_i64());
    let response = ifid.and_then(|id| state.hosts.lock().unwrap().get(&id).cloned());
    match response {
        Some((status, body)) => (StatusCode::from_u16(status).unwrap(), body),
        None => (StatusCode::NOT_FOUND, "unknown interface".to_string()),
    }
}

pub struct MockNtopngServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockNtopngServer {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        *state.interfaces.lock().unwrap() = (200, envelope("[]"));

        let app = Router::new()
            .route(INTERFACES_PATH, get(interfaces_handler))
            .route(HOSTS_PATH, post(hosts_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn set_interfaces(&self, status: u16, body: impl Into<String>) {
        *self.state.interfaces.lock().unwrap() = (status, body.into());
    }

    pub fn set_hosts(&self, ifid: i64, status: u16, body: impl Into<String>) {
        self.state
            .hosts
            .lock()
            .unwrap()
            .insert(ifid, (status, body.into()));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.state.delay.lock().unwrap() = Some(delay);
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.state.recorded.lock().unwrap().clone()
    }
}

impl Drop for MockNtopngServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
