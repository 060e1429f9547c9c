//! Local proxy server.

use log::info;

pub async fn run_serve(listen: &str, backend: &str) -> anyhow::Result<()> {
    info!("Starting proxy on {} for backend {}", listen, backend);
    charter_proxy::run(listen, backend).await
}
