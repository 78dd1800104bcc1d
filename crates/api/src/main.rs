use anyhow::Context;

use orgdesk_auth::AuthConfig;

const BIND_ADDR_VAR: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    orgdesk_observability::init();

    // Refuse to serve anything without a signing key.
    let config = AuthConfig::from_env()
        .inspect_err(|e| tracing::error!("configuration error: {e}"))
        .context("failed to load authentication configuration")?;

    let bind_addr =
        std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let app = orgdesk_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
