use profile_identity::IdentityGateway;
use profile_sync::{ConsumerStatus, Reconciler, ShutdownCoordinator};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared handles for every request. Built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub reconciler: Reconciler,
    pub identity: Arc<dyn IdentityGateway>,
    pub consumer_status: ConsumerStatus,
    pub shutdown: ShutdownCoordinator,
    /// Answer 404 instead of 503 when the identity service cannot be reached
    pub unavailable_as_not_found: bool,
    pub metrics: Option<PrometheusHandle>,
}
