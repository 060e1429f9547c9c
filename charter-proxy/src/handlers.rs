//! Forwarding handlers.
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use charter_core::routes::{Endpoints, Route, RouteSet};
use log::{debug, warn};
use serde_json::json;

const JSON: &str = "application/json";
const PDF: &str = "application/pdf";
const PDF_DISPOSITION: &str = "inline; filename=\"quote.pdf\"";

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend: Endpoints,
}

impl ProxyState {
    pub fn new(backend_base: &str) -> Self {
        Self::with_client(reqwest::Client::new(), backend_base)
    }

    pub fn with_client(http: reqwest::Client, backend_base: &str) -> Self {
        Self {
            http,
            backend: Endpoints::new(backend_base, RouteSet::Backend),
        }
    }

    pub fn backend(&self) -> &Endpoints {
        &self.backend
    }
}

pub async fn forward_read(State(state): State<ProxyState>, route: Route) -> Response {
    let url = state.backend.url(route);
    debug!("GET {} -> {}", route.local_path(), url);
    relay(route, state.http.get(&url).send().await).await
}

pub async fn forward_write(State(state): State<ProxyState>, route: Route, body: Bytes) -> Response {
    let url = state.backend.url(route);
    debug!("POST {} -> {} ({} bytes)", route.local_path(), url, body.len());
    let sent = state
        .http
        .post(&url)
        .header(header::CONTENT_TYPE, JSON)
        .body(body)
        .send()
        .await;
    relay(route, sent).await
}

async fn relay(route: Route, sent: reqwest::Result<reqwest::Response>) -> Response {
    let upstream = match sent {
        Ok(upstream) => upstream,
        Err(e) => return unreachable_backend(route, e),
    };
    let status = upstream.status();
    let body = match upstream.bytes().await {
        Ok(body) => body,
        Err(e) => return unreachable_backend(route, e),
    };
    debug!("{} <- {}", route.local_path(), status);

    let content_type = if route == Route::QuotePdf { PDF } else { JSON };
    let mut response = (status, [(header::CONTENT_TYPE, content_type)], body).into_response();
    if route == Route::QuotePdf {
        response.headers_mut().insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(PDF_DISPOSITION),
        );
    }
    response
}

fn unreachable_backend(route: Route, e: reqwest::Error) -> Response {
    warn!("Backend unreachable for {}: {}", route.local_path(), e);
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "error": format!("Backend unreachable: {}", e) })),
    )
        .into_response()
}
