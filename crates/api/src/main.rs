use std::net::SocketAddr;

use anyhow::Context;

use storefront_api::config::{self, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init_with(config::log_format_from_env());

    let config = Config::from_env();
    let app = storefront_api::app::build_app(&config)
        .await
        .context("failed to set up the catalog source")?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited with an error")?;
    Ok(())
}
