//! Mock university directory for client tests.

#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self { status: 200, body: body.to_string() }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self { status, body: format!(r#"{{"error": "{}"}}"#, message) }
    }
}

#[derive(Clone)]
struct MockState {
    response: MockResponse,
    countries: Arc<Mutex<Vec<String>>>,
}

pub struct MockDirectory {
    pub addr: SocketAddr,
    countries: Arc<Mutex<Vec<String>>>,
}

impl MockDirectory {
    pub async fn start(response: MockResponse) -> Self {
        let countries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { response, countries: countries.clone() };
        let app = Router::new().route("/search", get(search)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock directory");
        let addr = listener.local_addr().expect("mock directory addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self { addr, countries }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Decoded `country` parameter of every request received so far.
    pub async fn requested_countries(&self) -> Vec<String> {
        self.countries.lock().await.clone()
    }
}

async fn search(State(state): State<MockState>, Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    state
        .countries
        .lock()
        .await
        .push(params.get("country").cloned().unwrap_or_default());
    let status = StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [("content-type", "application/json")], state.response.body.clone())
}

pub const MEXICO_PAYLOAD: &str = r#"[
    {
        "name": "UNAM",
        "country": "Mexico",
        "alpha_two_code": "MX",
        "state-province": "CDMX",
        "domains": ["unam.mx"],
        "web_pages": ["https://www.unam.mx/"]
    },
    {
        "name": "ITESM",
        "country": "Mexico",
        "alpha_two_code": "MX",
        "state-province": "Nuevo Leon",
        "domains": ["tec.mx", "itesm.mx"],
        "web_pages": ["https://tec.mx/"]
    },
    {
        "name": "McGill University",
        "country": "Canada",
        "alpha_two_code": "CA",
        "state-province": null,
        "domains": ["mcgill.ca"],
        "web_pages": ["https://www.mcgill.ca/"]
    }
]"#;
