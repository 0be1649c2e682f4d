use std::time::Duration;

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr};

use crate::cache::{CacheBackend, LocalCache, ResponseCache};
use crate::config::{Argon2Config, AuthConfig};
use crate::entities::v1::users::{self, Role};
use crate::metrics::AppMetrics;
use crate::security::{PasswordHasher, Sessions};

/// Password of every user created by [`create_user`]
pub const PASSWORD: &str = "password";

/// Everything the router expects to find in the application data
#[derive(Clone)]
pub struct Context {
    pub db: DatabaseConnection,
    pub cache: ResponseCache,
    pub sessions: Sessions,
    pub hasher: PasswordHasher,
    pub auth: AuthConfig,
    pub metrics: AppMetrics,
}

impl Context {
    /// Fresh in-memory database, local cache and fast hashing
    pub async fn new() -> Self {
        let db = database().await;
        let cache = ResponseCache::new(
            CacheBackend::Local(LocalCache::with_shard_count(4)),
            Duration::from_secs(60),
        );
        let auth = AuthConfig {
            argon2: argon2(),
            ..Default::default()
        };

        Self {
            sessions: Sessions::new(cache.backend(), auth.session_cache_ttl()),
            cache,
            hasher: password_hasher(),
            auth,
            metrics: AppMetrics::new(),
            db,
        }
    }

    pub async fn user(&self, email: &str, role: Role) -> users::Model {
        create_user(&self.db, &self.hasher, email, role).await
    }

    /// Bearer token of a newly created user with the given role
    pub async fn token(&self, role: Role) -> String {
        let email = format!("{}@example.com", role.to_string().to_lowercase());
        let user = self.user(&email, role).await;

        token(&self.db, &user).await
    }
}

/// In-memory SQLite with every migration applied
///
/// # Panics
/// Panics when the database cannot be created, tests should fail fast.
pub async fn database() -> DatabaseConnection {
    crate::database::memory()
        .await
        .expect("Failed to create in-memory database")
}

/// Reduced argon2 cost, production parameters would make tests crawl
pub fn argon2() -> Argon2Config {
    Argon2Config {
        memory_cost: 8192,
        time_cost: 1,
        parallelism: 1,
        hash_length: 32,
    }
}

pub fn password_hasher() -> PasswordHasher {
    PasswordHasher::from_config(&argon2()).expect("Test argon2 parameters are valid")
}

/// User with [`PASSWORD`] as password
pub async fn create_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    email: &str,
    role: Role,
) -> users::Model {
    try_create_user(db, hasher, email, role)
        .await
        .expect("Failed to create user")
}

async fn try_create_user(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    email: &str,
    role: Role,
) -> Result<users::Model, DbErr> {
    let password = hasher
        .hash(PASSWORD)
        .map_err(|e| DbErr::Custom(e.to_string()))?;

    users::ActiveModel {
        id: NotSet,
        email: Set(email.to_lowercase()),
        nick_name: Set("tester".to_string()),
        password: Set(password),
        role: Set(role),
    }
    .insert(db)
    .await
}

/// Token without expiry, in the form clients send it
pub async fn token(db: &DatabaseConnection, user: &users::Model) -> String {
    let token = user
        .generate_token(db, None)
        .await
        .expect("Failed to generate token");

    token.id.simple().to_string()
}

/// Builds the full application (middleware, routes and shared state) as
/// an actix test service from a [`Context`].
#[macro_export]
macro_rules! service {
    ($ctx:expr) => {{
        let ctx: &$crate::testing::setup::Context = &$ctx;
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(ctx.db.clone()))
            .app_data(::actix_web::web::Data::new(ctx.cache.clone()))
            .app_data(::actix_web::web::Data::new(ctx.sessions.clone()))
            .app_data(::actix_web::web::Data::new(ctx.hasher.clone()))
            .app_data(::actix_web::web::Data::new(ctx.auth.clone()))
            .app_data(::actix_web::web::Data::new(ctx.metrics.clone()))
            .wrap($crate::security::SecurityFilter)
            .wrap($crate::metrics::MetricsMiddleware::new(ctx.metrics.clone()))
            .configure($crate::router::route)
            .configure(|app| $crate::router::metrics(app, "/metrics"));

        ::actix_web::test::init_service(app).await
    }};
}
