//! Liveness and readiness probes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cache::ResponseCache;
use crate::database;
use crate::prelude::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LivenessResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `connected` or `disconnected`
    pub database: String,
    /// `available` or `unavailable`
    pub cache: String,
}

/// Always 200 while the process serves requests
#[utoipa::path(
    tag = "Health",
    responses((status = 200, description = "Service is alive", body = LivenessResponse)),
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    ::tracing::debug!("Liveness check: healthy");

    Json(LivenessResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Ready when the database answers and the cache is reachable
#[utoipa::path(
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse),
    ),
)]
#[get("/ready")]
pub async fn ready(db: Data<DatabaseConnection>, cache: Data<ResponseCache>) -> impl Responder {
    let db_connected = database::ping(&db).await.is_ok();
    let cache_available = cache.is_available().await;

    let database = if db_connected { "connected" } else { "disconnected" };
    let cache = if cache_available { "available" } else { "unavailable" };
    let is_ready = db_connected && cache_available;
    let status = if is_ready { "ready" } else { "not_ready" };

    ::tracing::debug!(status, database, cache, "Readiness check performed");

    let response = ReadinessResponse {
        status: status.to_string(),
        timestamp: Utc::now(),
        database: database.to_string(),
        cache: cache.to_string(),
    };

    if is_ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
