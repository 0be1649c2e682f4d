use crate::config::AuthConfig;
use crate::errors::ErrorResponse;
use crate::metrics::AppMetrics;
use crate::prelude::*;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::{Authenticated, LoginHint};
use crate::security::{Identity, PasswordHasher, Sessions};
use crate::services;

/// Where to authenticate, target of every access denial redirect
#[utoipa::path(
    tag = "Auth",
    responses((status = 200, body = LoginHint)),
)]
#[get("/login")]
pub async fn hint() -> impl Responder {
    Json(services::v1::auth::login::hint())
}

/// Create a new session
///
/// Fail if the email is unknown or the password is incorrect
#[utoipa::path(
    tag = "Auth",
    responses(
        (status = 201, body = Authenticated),
        (status = 401, body = ErrorResponse),
    ),
)]
#[post("/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    sessions: Data<Sessions>,
    config: Data<AuthConfig>,
    metrics: Data<AppMetrics>,
    Json(request): Json<LoginRequest>,
) -> Result<impl Responder, Error> {
    let authenticated =
        services::v1::auth::login::login(&db, &hasher, &sessions, &config, &metrics, request)
            .await?;

    Ok(HttpResponse::Created().json(authenticated))
}

/// Current session
#[utoipa::path(
    tag = "Auth",
    security(("token" = [])),
    responses((status = 200, body = Identity)),
)]
#[get("/me")]
pub async fn me(identity: Identity) -> impl Responder {
    Json(services::v1::auth::me::me(identity).await)
}

/// Destroy every session of the current user
#[utoipa::path(
    tag = "Auth",
    security(("token" = [])),
    responses((status = 200, description = "Success")),
)]
#[post("/logout")]
pub async fn logout(
    db: Data<DatabaseConnection>,
    sessions: Data<Sessions>,
    identity: Identity,
) -> Result<impl Responder, Error> {
    services::v1::auth::logout::logout(&db, &sessions, &identity).await
}
