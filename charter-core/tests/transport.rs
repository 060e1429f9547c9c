//! Transport client against an in-process stub backend.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use charter_core::catalog::Catalog;
use charter_core::pricing::PriceResult;
use charter_core::routes::{Endpoints, Route, RouteSet};
use charter_core::transport::{TransportClient, TransportError};
use serde_json::json;

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base: &str) -> TransportClient {
    TransportClient::new(Endpoints::new(base, RouteSet::Backend))
}

#[tokio::test]
async fn get_json_decodes_catalog() {
    let app = Router::new().route(
        "/catalog",
        get(|| async {
            Json(json!({
                "airports": [{"icao": "KTEB", "fees": 650, "rwy": 7000}],
                "jets": [{"category": "Light", "model": "Phenom 300"}]
            }))
        }),
    );
    let base = spawn(app).await;

    let catalog: Catalog = client(&base).get_json(Route::Catalog).await.unwrap();
    assert_eq!(catalog.airports[0].icao, "KTEB");
    assert_eq!(catalog.first_selection(), Some(("Light", "Phenom 300")));
}

#[tokio::test]
async fn get_json_reports_status_line() {
    let app = Router::new().route(
        "/catalog",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let base = spawn(app).await;

    let err = client(&base)
        .get_json::<Catalog>(Route::Catalog)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 503, .. }));
    assert_eq!(err.to_string(), "503 Service Unavailable");
}

#[tokio::test]
async fn post_json_prefers_body_error_message() {
    let app = Router::new().route(
        "/optimizer/run",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Provide 'aircraft' and 'legs' arrays"})),
            )
        }),
    );
    let base = spawn(app).await;

    let err = client(&base)
        .post_json::<serde_json::Value, _>(Route::OptimizerRun, &json!({"aircraft": []}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Provide 'aircraft' and 'legs' arrays");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn post_json_falls_back_to_status_line_for_non_json_errors() {
    let app = Router::new().route(
        "/price",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>Server Error</html>") }),
    );
    let base = spawn(app).await;

    let err = client(&base)
        .post_json::<PriceResult, _>(Route::Price, &json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "500 Internal Server Error");
}

#[tokio::test]
async fn post_json_sends_json_content_type() {
    let app = Router::new().route(
        "/price",
        post(|headers: axum::http::HeaderMap, body: String| async move {
            let content_type = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({"error": format!("{}|{}", content_type, body)})).into_response()
        }),
    );
    let base = spawn(app).await;

    let result: PriceResult = client(&base)
        .post_json(Route::Price, &json!({"jet_model": "Phenom 300"}))
        .await
        .unwrap();
    assert_eq!(
        result.domain_error(),
        Some(r#"application/json|{"jet_model":"Phenom 300"}"#)
    );
}

#[tokio::test]
async fn malformed_success_body_surfaces_decode_error() {
    let app = Router::new().route("/price", post(|| async { "not json at all" }));
    let base = spawn(app).await;

    let err = client(&base)
        .post_json::<PriceResult, _>(Route::Price, &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .get_json::<Catalog>(Route::Catalog)
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
    assert!(!err.to_string().is_empty());
}
