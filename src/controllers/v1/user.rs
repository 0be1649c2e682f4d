use crate::errors::ErrorResponse;
use crate::prelude::*;
use crate::requests::v1::user::RegisterRequest;
use crate::responses::v1::user::{User, UserWithFeedback};
use crate::security::{PasswordHasher, Sessions};
use crate::services;

/// Register a new account with the `USER` role
///
/// Fail if
/// - email already exists
/// - password is too short
#[utoipa::path(
    tag = "User",
    responses(
        (status = 201, body = User),
        (status = 409, body = ErrorResponse),
        (status = 422, description = "Validation failed"),
    ),
)]
#[post("/register")]
pub async fn register(
    db: Data<DatabaseConnection>,
    hasher: Data<PasswordHasher>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl Responder, Error> {
    let user = services::v1::user::register::register(&db, &hasher, request).await?;

    Ok(HttpResponse::Created().json(user))
}

#[utoipa::path(
    tag = "User",
    security(("token" = [])),
    responses((status = 200, body = Vec<User>)),
)]
#[get("/users")]
pub async fn all(db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    Ok(Json(services::v1::user::find::all(&db).await?))
}

/// Find user by id with their feedback
#[utoipa::path(
    tag = "User",
    security(("token" = [])),
    responses(
        (status = 200, body = UserWithFeedback),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/users/{id}")]
pub async fn show(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::user::find::find_by_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "User",
    security(("token" = [])),
    responses(
        (status = 200, body = User),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/users/email/{email}")]
pub async fn by_email(
    db: Data<DatabaseConnection>,
    email: Path<String>,
) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::user::find::find_by_email(&db, email.into_inner()).await?,
    ))
}

/// Delete user by id, revoking their sessions
#[utoipa::path(
    tag = "User",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 404, body = ErrorResponse),
    ),
)]
#[delete("/users/{id}")]
pub async fn delete(
    db: Data<DatabaseConnection>,
    sessions: Data<Sessions>,
    id: Path<i64>,
) -> Result<impl Responder, Error> {
    services::v1::user::delete::delete(&db, &sessions, id.into_inner()).await
}
