//! # Request Metrics
//!
//! Lightweight request metrics using atomic counters, served as JSON at
//! `/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared metrics state.
#[derive(Debug, Clone)]
pub struct ApiMetrics {
    request_count: Arc<AtomicU64>,
    error_count: Arc<AtomicU64>,
}

impl ApiMetrics {
    /// Create a new metrics instance.
    pub fn new() -> Self {
        Self {
            request_count: Arc::new(AtomicU64::new(0)),
            error_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Return current request count.
    pub fn requests(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Return current error count (4xx and 5xx responses).
    pub fn errors(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    fn record(&self, is_error: bool) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        if is_error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter snapshot.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub errors: u64,
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        let status = response.status();
        m.record(status.is_client_error() || status.is_server_error());
    }

    response
}

/// GET /metrics: Current counters.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Request counters", body = MetricsSnapshot),
    ),
    tag = "operations"
)]
pub async fn metrics_snapshot(Extension(metrics): Extension<ApiMetrics>) -> Json<MetricsSnapshot> {
    Json(MetricsSnapshot {
        requests: metrics.requests(),
        errors: metrics.errors(),
    })
}
