//! Layered configuration: files, `APP_ENV` and `MOVIE_CATALOG__*` variables

use std::env;

use movie_catalog::config::*;
use serial_test::serial;

fn clean_env_vars() {
    let keys: Vec<String> = env::vars()
        .filter(|(k, _)| k.starts_with("MOVIE_CATALOG") || k == "APP_ENV")
        .map(|(k, _)| k)
        .collect();

    for key in keys {
        unsafe { env::remove_var(&key) };
    }
}

#[test]
#[serial]
fn test_load_default_config() {
    clean_env_vars();

    let config = load().expect("default configuration loads");

    assert_eq!(config.app.name, "movie-catalog");
    assert_eq!(config.app.environment, "development");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.url, "sqlite://movie-catalog.db?mode=rwc");
    assert!(config.cache.enabled);
    assert_eq!(config.cache.ttl, 300);
    assert_eq!(config.auth.token_expiration, 3600);
    assert_eq!(config.auth.argon2.memory_cost, 65536);
    assert_eq!(config.metrics.path, "/metrics");
    assert!(config.api.swagger_enabled);
}

#[test]
#[serial]
fn test_production_overrides() {
    clean_env_vars();
    unsafe { env::set_var("APP_ENV", "production") };

    let config = load();
    clean_env_vars();

    let config = config.unwrap();
    assert_eq!(config.app.environment, "production");
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(!config.observability.ansi);
    // untouched sections keep the defaults
    assert_eq!(config.server.port, 8080);
}

#[test]
#[serial]
fn test_environment_variables_win() {
    clean_env_vars();
    unsafe {
        env::set_var("APP_ENV", "production");
        env::set_var("MOVIE_CATALOG__SERVER__HOST", "10.0.0.1");
        env::set_var("MOVIE_CATALOG__CACHE__ENABLED", "false");
        env::set_var("MOVIE_CATALOG__SERVER__CORS_ORIGINS", "https://a.example,https://b.example");
    };

    let config = load();
    clean_env_vars();

    let config = config.unwrap();
    assert_eq!(config.server.host, "10.0.0.1");
    assert!(!config.cache.enabled);
    assert_eq!(
        config.server.cors_origins,
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    for (key, value) in [
        ("MOVIE_CATALOG__SERVER__PORT", "0"),
        ("MOVIE_CATALOG__CACHE__TTL", "0"),
        ("MOVIE_CATALOG__AUTH__ARGON2__TIME_COST", "0"),
        ("MOVIE_CATALOG__METRICS__PATH", "metrics"),
    ] {
        clean_env_vars();
        unsafe { env::set_var(key, value) };

        let config = load();
        clean_env_vars();

        assert!(
            matches!(config, Err(ConfigError::ValidationError(_))),
            "{key}={value} should be rejected"
        );
    }
}

#[test]
#[serial]
fn test_unparsable_value_is_a_load_error() {
    clean_env_vars();
    unsafe { env::set_var("MOVIE_CATALOG__SERVER__PORT", "eighty") };

    let config = load();
    clean_env_vars();

    assert!(matches!(config, Err(ConfigError::Load(_))));
}
