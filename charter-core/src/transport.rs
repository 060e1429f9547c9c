//! JSON request/response helper with uniform error surfacing.
//!
//! No retries and no timeout: a hung backend keeps the caller pending.

use crate::routes::{Endpoints, Route};
use log::{debug, warn};
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum TransportError {
    /// Non-success status on a read request.
    #[error("{}", status_line_ref(.status, .status_text))]
    Status { status: u16, status_text: String },
    /// Non-success status on a write request. `message` is the body's
    /// `error` field when it had one, otherwise the status line.
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    /// A success body that was not the expected JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } | TransportError::Backend { status, .. } => {
                Some(*status)
            }
            TransportError::Network(e) => e.status().map(|s| s.as_u16()),
            TransportError::Decode(_) => None,
        }
    }
}

/// `"<status> <reason>"`, e.g. `"502 Bad Gateway"`.
pub fn status_line(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{} {}", status, status_text)
    }
}

fn status_line_ref(status: &u16, status_text: &str) -> String {
    status_line(*status, status_text)
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Thin wrapper over `reqwest::Client` bound to one set of endpoints.
#[derive(Debug, Clone)]
pub struct TransportClient {
    http: Client,
    endpoints: Endpoints,
}

impl TransportClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    pub fn with_client(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET a route and decode its JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, route: Route) -> Result<T, TransportError> {
        let url = self.endpoints.url(route);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET {} failed: {}", url, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                status_text: reason(status),
            });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Serialize `body` as JSON, POST it, and decode the JSON answer.
    pub async fn post_json<T, B>(&self, route: Route, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let bytes = serde_json::to_vec(body)?;
        self.post_json_bytes(route, bytes).await
    }

    /// POST an already-serialized JSON body and decode the JSON answer.
    pub async fn post_json_bytes<T: DeserializeOwned>(
        &self,
        route: Route,
        body: Vec<u8>,
    ) -> Result<T, TransportError> {
        let response = self.send_json_bytes(route, body).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| status_line(status.as_u16(), &reason(status)));
            warn!(
                "POST {} failed: {} ({})",
                route.path(self.endpoints.set()),
                status,
                message
            );
            return Err(TransportError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST an already-serialized JSON body and hand back the raw response.
    ///
    /// Used where the answer is not JSON (the PDF quote).
    pub async fn send_json_bytes(
        &self,
        route: Route,
        body: Vec<u8>,
    ) -> Result<Response, TransportError> {
        let url = self.endpoints.url(route);
        debug!("POST {} ({} bytes)", url, body.len());
        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        Ok(response)
    }
}
