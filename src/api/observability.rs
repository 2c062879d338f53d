use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state
        .prometheus_handle
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Wraps each request in a span and records one metrics sample plus one
/// `Request finished` event when the response is ready.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();

    let method = req.method().to_string();
    // Unmatched paths share one label to keep the metric cardinality bounded.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |mp| mp.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %req.uri().path(),
        route = %route,
    );

    async move {
        let response = next.run(req).await;
        let elapsed = started.elapsed();
        let status = response.status().as_u16();

        record_request(&method, &route, status, elapsed);

        info!(
            status_code = status,
            duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            outcome = outcome_for(status),
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

fn record_request(method: &str, route: &str, status: u16, elapsed: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", route.to_string()),
        ("status", status.to_string()),
    ];

    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_request_duration_seconds", &labels).record(elapsed.as_secs_f64());
}

const fn outcome_for(status: u16) -> &'static str {
    match status {
        500.. => "error",
        400..=499 => "client_error",
        _ => "success",
    }
}
