//! HTTP surface of the dashboard daemon.
//!
//! One page route plus the component routes it embeds, and the usual
//! liveness/status endpoints.

use crate::bundle;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::ui;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info, warn};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub dist_dir: PathBuf,
    pub metrics: Arc<Metrics>,
    pub started: Instant,
}

impl AppState {
    pub fn new(dist_dir: PathBuf) -> Self {
        Self {
            dist_dir,
            metrics: Arc::new(Metrics::new()),
            started: Instant::now(),
        }
    }
}

/// Build the daemon router.
///
/// Everything under `/component/` except the bundle document itself falls
/// through to static files from the dist directory, so relative asset
/// references inside the bundle resolve.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.dist_dir.clone());
    let component = Router::new()
        .route("/bundle", get(component_bundle))
        .fallback_service(assets);

    Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(healthz))
        .route("/status", get(status))
        .nest("/component", component)
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::new(config.dashboard.dist_dir.clone());
    let app = router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener
        .local_addr()
        .context("failed to resolve local address")?;
    info!("[server] dashboard available at http://{local}/");
    info!(
        "[server] serving bundle from {}",
        config.dashboard.dist_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("[server] shutdown signal received"),
        Err(err) => {
            error!("[server] failed to listen for shutdown signal: {err}");
            std::future::pending::<()>().await;
        }
    }
}

/// GET / - the dashboard page.
///
/// Presence is checked here without opening the file; the component route
/// does the actual read when the iframe loads.
async fn dashboard(State(state): State<AppState>) -> Html<String> {
    state.metrics.record_page_load();
    let path = bundle::bundle_path(&state.dist_dir);
    let present = path.exists();
    if !present {
        warn!("[server] bundle missing at {}", path.display());
    }
    Html(ui::dashboard_page(present))
}

/// GET /component/bundle - the bundle bytes, verbatim.
async fn component_bundle(State(state): State<AppState>) -> Response {
    match bundle::load(&state.dist_dir) {
        Ok(Some(html)) => {
            state.metrics.record_component_serve();
            Html(html).into_response()
        }
        Ok(None) => {
            state.metrics.record_component_miss();
            (StatusCode::NOT_FOUND, ui::MISSING_BUNDLE_MESSAGE).into_response()
        }
        Err(err) => {
            error!(
                "[server] failed to read bundle {}: {err}",
                bundle::bundle_path(&state.dist_dir).display()
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /healthz - liveness probe.
async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /status - daemon status.
async fn status(State(state): State<AppState>) -> Json<Value> {
    let path = bundle::bundle_path(&state.dist_dir);
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_s": state.started.elapsed().as_secs(),
        "bundle_path": path.display().to_string(),
        "bundle_present": path.exists(),
        "metrics": state.metrics.snapshot(),
    }))
}
