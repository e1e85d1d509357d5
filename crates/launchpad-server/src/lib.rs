//! # launchpad-server
//!
//! HTTP layer for the Launchpad host. Composes the routes plugins
//! registered into a served router and adds host-owned routes:
//!
//! - `GET /health` — liveness and version
//! - `GET /metrics` — Prometheus text exposition
//! - `GET /client/modules` — ordered client-side module names declared by
//!   plugins, consumed by the client bootstrapper
//! - `/views/*` — static template assets when the `views` setting names an
//!   existing directory

pub mod metrics;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
};
use launchpad_config::ServerConfig;
use launchpad_plugin::PluginHost;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

/// Shared server state.
pub struct AppState {
    pub metrics: metrics::Metrics,
    /// Flattened, ordered client modules declared by all plugins.
    pub client_modules: Vec<String>,
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_secs: u64,
}

/// Build the Axum router from a finished plugin host.
pub fn build_router(host: PluginHost, config: &ServerConfig) -> Router {
    let m = metrics::Metrics::new();
    m.set_plugins_registered(host.plugin_names().len() as u64);

    let client_modules = host.client_dependencies();
    let views_dir = host.setting("views").map(PathBuf::from);
    let plugin_routes = host.into_router();

    let state = Arc::new(AppState {
        metrics: m,
        client_modules,
    });

    let host_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/client/modules", get(client_modules_handler))
        .with_state(state);

    let mut router = host_routes.merge(plugin_routes);

    // Serve plugin template assets read-only under /views
    if let Some(dir) = views_dir {
        if dir.is_dir() {
            info!(path = %dir.display(), "serving view assets");
            router = router.nest_service("/views", ServeDir::new(dir));
        }
    }

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    state.metrics.inc_http_requests();
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_secs: state.metrics.uptime_secs(),
    })
}

/// Prometheus-compatible metrics endpoint.
async fn metrics_handler(
    State(state): State<Arc<AppState>>,
) -> (
    StatusCode,
    [(axum::http::header::HeaderName, &'static str); 1],
    String,
) {
    state.metrics.inc_http_requests();
    let body = state.metrics.render_prometheus();
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

/// Client modules the bootstrapper loads, in plugin-declaration order.
async fn client_modules_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    state.metrics.inc_http_requests();
    Json(state.client_modules.clone())
}

/// Start the HTTP server.
pub async fn start_server(router: Router, config: &ServerConfig) -> launchpad_core::Result<()> {
    info!(listen = %config.listen, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .map_err(|e| {
            launchpad_core::LaunchpadError::Server(format!(
                "failed to bind {}: {}",
                config.listen, e
            ))
        })?;

    axum::serve(listener, router)
        .await
        .map_err(|e| launchpad_core::LaunchpadError::Server(format!("server error: {}", e)))?;

    Ok(())
}
