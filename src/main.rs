// src/main.rs
mod config;
mod content;
mod handlers;
mod middleware;
mod referral;
mod routes;
mod templates;
mod utils;

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::middleware::cache::PageCache;
use crate::middleware::rate_limit::RateLimiter;
use crate::routes::create_router;

pub struct AppState {
    pub config: Config,
    pub cache: PageCache,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            cache: PageCache::new(config.page_cache_ttl),
            rate_limiter: RateLimiter::new(config.rate_limit_max, config.rate_limit_window),
            config,
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so load it before the subscriber
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting RubleMining landing server...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.server_addr()?;

    let state = Arc::new(AppState::new(config));

    let rate_limiter = state.rate_limiter.clone();
    let cleanup_every = state.config.rate_limit_window.max(Duration::from_secs(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_every);
        loop {
            interval.tick().await;
            rate_limiter.cleanup().await;
            tracing::debug!("Rate limiter cleanup completed");
        }
    });

    let app = create_router(state.clone());

    tracing::info!("Listening on {}", addr);
    match &state.config.public_origin {
        Some(origin) => tracing::info!("Referral links use origin {}", origin),
        None => tracing::info!("Referral links use the request Host header"),
    }
    tracing::info!("Static assets served from {}", state.config.static_dir.display());
    tracing::info!(
        "Rate limit: {} requests per {}s per client",
        state.config.rate_limit_max,
        state.config.rate_limit_window.as_secs()
    );
    if state.config.enable_hsts {
        tracing::info!("HSTS enabled");
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    Ok(())
}
