//! Local `/api/*` routes in front of the pricing backend.
//!
//! Every route forwards the request body and hands back the backend's status
//! and body unchanged. The quote route additionally restates the PDF content
//! type and an inline disposition.

pub mod handlers;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Router,
};
use charter_core::routes::Route;
pub use handlers::ProxyState;
use log::info;

pub fn create_app(state: ProxyState) -> Router {
    Route::ALL
        .into_iter()
        .fold(Router::<ProxyState>::new(), |router, route| {
            let method = match route {
                Route::Catalog => get(move |s: State<ProxyState>| handlers::forward_read(s, route)),
                _ => post(move |s: State<ProxyState>, body: Bytes| {
                    handlers::forward_write(s, route, body)
                }),
            };
            router.route(route.local_path(), method)
        })
        .with_state(state)
}

pub async fn run(addr: &str, backend: &str) -> anyhow::Result<()> {
    let app = create_app(ProxyState::new(backend));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Charter proxy listening on {} -> {}", addr, backend);
    axum::serve(listener, app).await.context("proxy server error")?;
    Ok(())
}
