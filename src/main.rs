use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

use movie_catalog::cache::ResponseCache;
use movie_catalog::metrics::{AppMetrics, MetricsMiddleware};
use movie_catalog::security::{PasswordHasher, SecurityFilter, Sessions};
use movie_catalog::{config, database, logging, router};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    logging::init(&config.observability);

    ::tracing::info!(
        name = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Starting service"
    );

    let metrics = AppMetrics::with_config(Some(&config));
    let db = database::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    let cache = ResponseCache::from_config(&config.cache).with_metrics(metrics.clone());
    let sessions = Sessions::new(cache.backend(), config.auth.session_cache_ttl());
    let hasher = PasswordHasher::from_config(&config.auth.argon2)
        .map_err(|e| anyhow::anyhow!("Invalid argon2 parameters: {e}"))?;

    ::tracing::info!(
        backend = cache.backend().name(),
        ttl = config.cache.ttl,
        "Response cache ready"
    );

    let db = Data::new(db);
    let cache = Data::new(cache);
    let sessions = Data::new(sessions);
    let hasher = Data::new(hasher);
    let auth = Data::new(config.auth.clone());
    let app_metrics = Data::new(metrics.clone());
    let server_config = config.server.clone();
    let metrics_config = config.metrics.clone();
    let swagger_enabled = config.api.swagger_enabled;

    let address = (config.server.host.clone(), config.server.port);
    ::tracing::info!(host = %address.0, port = address.1, "Listening");

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        if server_config.cors_origins.is_empty() {
            cors = cors.allow_any_origin();
        } else {
            for origin in &server_config.cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(db.clone())
            .app_data(cache.clone())
            .app_data(sessions.clone())
            .app_data(hasher.clone())
            .app_data(auth.clone())
            .app_data(app_metrics.clone())
            .wrap(SecurityFilter)
            .wrap(MetricsMiddleware::new(metrics.clone()))
            .wrap(cors)
            .configure(router::route)
            .configure(|app| {
                if metrics_config.enabled {
                    router::metrics(app, &metrics_config.path);
                }
            })
            .configure(|app| {
                if swagger_enabled {
                    router::docs(app);
                }
            })
    })
    .workers(config.server.workers())
    .shutdown_timeout(config.app.shutdown_timeout)
    .bind(address)?
    .run()
    .await?;

    ::tracing::info!("Server stopped");

    Ok(())
}
