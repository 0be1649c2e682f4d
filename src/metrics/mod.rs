pub mod middleware;

pub use middleware::MetricsMiddleware;

use std::sync::{Arc, OnceLock};

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::config::AppConfig;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

const HTTP_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0];
const DB_BUCKETS: &[f64] = &[0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5];

/// Handle to the process wide Prometheus recorder
#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::with_config(None)
    }

    /// The first call installs the global recorder, labels from later calls
    /// are ignored.
    pub fn with_config(config: Option<&AppConfig>) -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let mut builder = Self::builder();

            if let Some(cfg) = config {
                builder = builder
                    .add_global_label("service", cfg.app.name.clone())
                    .add_global_label("version", cfg.app.version.clone())
                    .add_global_label("environment", cfg.app.environment.clone());
            }

            let recorder = builder.build_recorder();
            let handle = recorder.handle();
            if metrics::set_global_recorder(recorder).is_err() {
                ::tracing::warn!("A metrics recorder is already installed, Prometheus output stays empty");
            }

            Self::describe_metrics();

            handle
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn builder() -> PrometheusBuilder {
        let buckets = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full("http_requests_duration_seconds".to_string()),
                HTTP_BUCKETS,
            )
            .and_then(|builder| {
                builder.set_buckets_for_metric(
                    Matcher::Full("database_queries_duration_seconds".to_string()),
                    DB_BUCKETS,
                )
            });

        match buckets {
            Ok(builder) => builder,
            Err(e) => {
                ::tracing::warn!("Falling back to summaries: {}", e);
                PrometheusBuilder::new()
            }
        }
    }

    fn describe_metrics() {
        describe_counter!("http_requests_total", "Total number of HTTP requests");
        describe_histogram!(
            "http_requests_duration_seconds",
            "HTTP request duration in seconds"
        );
        describe_gauge!(
            "http_requests_in_flight",
            "Number of HTTP requests currently being processed"
        );

        describe_counter!("database_queries_total", "Total number of database queries");
        describe_histogram!(
            "database_queries_duration_seconds",
            "Database query duration in seconds"
        );

        describe_counter!("cache_hits_total", "Total number of response cache hits");
        describe_counter!("cache_misses_total", "Total number of response cache misses");
        describe_counter!(
            "cache_invalidations_total",
            "Total number of cache namespace invalidations"
        );

        describe_counter!("auth_login_attempts_total", "Total number of login attempts");
        describe_counter!(
            "auth_access_denied_total",
            "Requests redirected to the login page"
        );
    }

    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => path.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_requests_duration_seconds",
            "method" => method.to_string(),
            "path" => path.to_string()
        )
        .record(duration_secs);
    }

    pub fn http_request_start(&self) {
        gauge!("http_requests_in_flight").increment(1.0);
    }

    pub fn http_request_end(&self) {
        gauge!("http_requests_in_flight").decrement(1.0);
    }

    pub fn record_db_query(&self, operation: &str, duration_secs: f64) {
        record_db_query(operation, duration_secs);
    }

    pub fn record_cache_hit(&self, namespace: &str) {
        counter!("cache_hits_total", "namespace" => namespace.to_string()).increment(1);
    }

    pub fn record_cache_miss(&self, namespace: &str) {
        counter!("cache_misses_total", "namespace" => namespace.to_string()).increment(1);
    }

    pub fn record_cache_invalidation(&self, namespace: &str) {
        counter!("cache_invalidations_total", "namespace" => namespace.to_string()).increment(1);
    }

    pub fn record_login_attempt(&self, success: bool) {
        counter!("auth_login_attempts_total", "success" => success.to_string()).increment(1);
    }

    pub fn record_access_denied(&self, method: &str) {
        counter!("auth_access_denied_total", "method" => method.to_string()).increment(1);
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Repositories record through the global recorder without holding a handle
pub fn record_db_query(operation: &str, duration_secs: f64) {
    counter!("database_queries_total", "operation" => operation.to_string()).increment(1);
    histogram!("database_queries_duration_seconds", "operation" => operation.to_string())
        .record(duration_secs);
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppMetrics").finish_non_exhaustive()
    }
}
