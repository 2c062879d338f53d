use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::LogEntryService;
use crate::state::SharedState;

mod error;
mod logs;
mod observability;
mod types;
mod users;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub log_entries: Arc<dyn LogEntryService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn default_limit(&self) -> u64 {
        self.config.pagination.default_limit
    }
}

#[must_use]
pub fn create_app_state(
    shared: &SharedState,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: shared.config.clone(),
        log_entries: shared.log_entries.clone(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = SharedState::new(config).await?;
    Ok(create_app_state(&shared, prometheus_handle))
}

/// Builds state around an arbitrary service, e.g. a test double.
#[must_use]
pub fn create_app_state_with_service(
    config: Config,
    log_entries: Arc<dyn LogEntryService>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: Arc::new(config),
        log_entries,
        prometheus_handle,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let mut api_router = Router::new()
        .route("/v1/logs", get(logs::list_logs).post(logs::create_log))
        .route(
            "/v1/logs/{id}",
            put(logs::update_log).delete(logs::delete_log),
        )
        .route("/v1/users", get(users::list_users));

    if state.prometheus_handle.is_some() {
        api_router = api_router.route("/metrics", get(observability::get_metrics));
    }

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    api_router
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
