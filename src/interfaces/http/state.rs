//! Shared router state

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;

use super::modules::health::HealthState;
use super::modules::metrics::MetricsState;
use crate::domain::RepositoryProvider;
use crate::shared::PageLimits;

/// State for the resource handlers.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub pagination: PageLimits,
}

/// Everything the router needs. Handlers extract the narrower state they
/// use through `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub app: AppState,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
    pub prometheus: PrometheusHandle,
}

impl FromRef<ApiState> for AppState {
    fn from_ref(s: &ApiState) -> Self {
        s.app.clone()
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<ApiState> for MetricsState {
    fn from_ref(s: &ApiState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}
