pub mod app;
pub mod auth;
pub mod infrastructure;

pub use app::{ApiConfig, AppConfig, AppMetadata};
pub use auth::{Argon2Config, AuthConfig};
pub use infrastructure::{
    CacheConfig, DatabaseConfig, MetricsConfig, ObservabilityConfig, ServerConfig,
};

/// Prefix of environment variables overriding file configuration,
/// e.g. `MOVIE_CATALOG__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "MOVIE_CATALOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Semantic checks run after deserialization
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub trait WithDefaults {
    fn with_defaults() -> Self;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
