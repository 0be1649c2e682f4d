use serde::{Deserialize, Serialize};

use super::{
    AuthConfig, CacheConfig, ConfigError, DatabaseConfig, ENV_PREFIX, MetricsConfig,
    ObservabilityConfig, ServerConfig, Validate, WithDefaults,
};

/// Top-level application configuration that aggregates all config sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppMetadata,
    /// Server configuration (host, port, workers, CORS)
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration (connection pool, timeouts, migrations)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Response cache configuration (TTL, shards)
    #[serde(default)]
    pub cache: CacheConfig,
    /// Authentication configuration (tokens, Argon2)
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// API documentation configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Application environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

/// Swagger UI is served under `/docs/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_swagger_enabled")]
    pub swagger_enabled: bool,
}

fn default_app_name() -> String {
    "movie-catalog".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30
}

fn default_swagger_enabled() -> bool {
    true
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            swagger_enabled: default_swagger_enabled(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError("app.environment cannot be empty".to_string()));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError("app.shutdown_timeout must be > 0".to_string()));
        }
        Ok(())
    }
}


impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.cache.validate()?;
        self.auth.validate()?;
        self.observability.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

impl WithDefaults for AppConfig {
    fn with_defaults() -> Self {
        Self {
            app: AppMetadata::default(),
            server: ServerConfig::with_defaults(),
            database: DatabaseConfig::with_defaults(),
            cache: CacheConfig::with_defaults(),
            auth: AuthConfig::with_defaults(),
            observability: ObservabilityConfig::with_defaults(),
            metrics: MetricsConfig::with_defaults(),
            api: ApiConfig::default(),
        }
    }
}

/// Load configuration from files and environment variables
///
/// Sources in order of precedence (highest first):
/// 1. Environment variables: `MOVIE_CATALOG__SERVER__PORT=8080`
/// 2. `config/local.toml` (git-ignored, developer overrides)
/// 3. `config/{APP_ENV}.toml`
/// 4. `config/default.toml`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}
