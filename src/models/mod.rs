//! Repositories: query functions on the entity models and the mappers from
//! entities to response DTOs.

use std::future::Future;
use std::time::Instant;

use sea_orm::DbErr;

pub mod v1;

/// Run a query, recording its latency and logging a failure
pub(crate) async fn observe<T, F>(operation: &'static str, query: F) -> Result<T, DbErr>
where
    F: Future<Output = Result<T, DbErr>>,
{
    let start = Instant::now();
    let result = query.await;

    crate::metrics::record_db_query(operation, start.elapsed().as_secs_f64());

    if let Err(e) = &result {
        ::tracing::error!(operation, "Database query failed: {}", e);
    }

    result
}
