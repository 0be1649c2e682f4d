use crate::metrics::AppMetrics;
use crate::prelude::*;

/// Prometheus text exposition, mounted at `metrics.path`
pub async fn metrics(metrics: Data<AppMetrics>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics.render())
}
