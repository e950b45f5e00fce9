use std::{sync::Arc, time::Duration};

use form_relay::{build_router, config::load_settings, relay::HttpUpstream, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    if settings.access_key.is_none() {
        warn!("WEB3FORMS_ACCESS_KEY is not set; every submission will fail with 500");
    }

    let upstream = HttpUpstream::new(
        settings.upstream_url.clone(),
        Duration::from_secs(settings.upstream_timeout_seconds),
    )?;
    let state = AppState {
        upstream: Arc::new(upstream),
        access_key: settings.access_key.clone(),
        max_body_bytes: settings.max_body_bytes,
    };
    let app = build_router(Arc::new(state));

    let addr = settings.socket_addr()?;
    info!(%addr, upstream = %settings.upstream_url, "form relay listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
