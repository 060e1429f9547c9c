//! In-process stub backend shared by the session flow tests.

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use charter_core::routes::{Endpoints, RouteSet};
use charter_core::transport::TransportClient;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One canned answer.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Canned {
    pub fn json(body: serde_json::Value) -> Canned {
        Canned::json_status(StatusCode::OK, body)
    }

    pub fn json_status(status: StatusCode, body: serde_json::Value) -> Canned {
        Canned {
            status,
            content_type: "application/json",
            body: body.to_string().into_bytes(),
        }
    }

    pub fn raw(status: StatusCode, content_type: &'static str, body: &[u8]) -> Canned {
        Canned {
            status,
            content_type,
            body: body.to_vec(),
        }
    }
}

/// A request as the stub received it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub body: Vec<u8>,
}

#[derive(Clone, Default)]
struct StubState {
    answers: Arc<HashMap<String, Canned>>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

pub struct Stub {
    pub base: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    /// Serve `answers` (keyed by path) on an ephemeral port.
    pub async fn start(answers: Vec<(&str, Canned)>) -> Stub {
        let state = StubState {
            answers: Arc::new(
                answers
                    .into_iter()
                    .map(|(path, canned)| (path.to_string(), canned))
                    .collect(),
            ),
            recorded: Arc::new(Mutex::new(Vec::new())),
        };
        let recorded = state.recorded.clone();
        let app = Router::new().fallback(answer).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Stub {
            base: format!("http://{}", addr),
            recorded,
        }
    }

    /// A client for the backend route set.
    pub fn client(&self) -> TransportClient {
        TransportClient::new(Endpoints::new(&self.base, RouteSet::Backend))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

async fn answer(State(state): State<StubState>, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().to_string();
    state.recorded.lock().unwrap().push(Recorded {
        path: path.clone(),
        body: body.to_vec(),
    });
    match state.answers.get(&path) {
        Some(canned) => (
            canned.status,
            [(header::CONTENT_TYPE, canned.content_type)],
            canned.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "no such route").into_response(),
    }
}

pub fn sample_catalog() -> serde_json::Value {
    serde_json::from_str(charter_core::catalog::SAMPLE_CATALOG).unwrap()
}

pub fn sample_price() -> serde_json::Value {
    serde_json::json!({
        "route": {"depart": "KTEB", "arrive": "KMIA", "distance_nm": 949.0},
        "aircraft": {"category": "Light", "model": "Phenom 300", "speed_kts": 420.0},
        "assumptions": {
            "avg_wind_kts": 0.0,
            "margin_pct": 20.0,
            "taxi_min": 20.0,
            "reposition_nm": 0.0,
            "density_altitude_ft": {"depart": 520.0, "arrive": 1240.0},
            "required_runway_ft": 3138.0
        },
        "time": {"air_time_hr": 2.26, "taxi_hr": 0.67, "block_hr": 2.93},
        "costs": {"doc_total": 8790.0, "airport_fees": 1550.0, "cost_basis": 10340.0},
        "sell_price_usd": 12408.0,
        "ml_prediction_usd": 12011.54,
        "ml_delta_usd": 396.46
    })
}
