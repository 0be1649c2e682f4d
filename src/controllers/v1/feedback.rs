use crate::errors::ErrorResponse;
use crate::prelude::*;
use crate::requests::v1::feedback::FeedbackStoreRequest;
use crate::responses::v1::feedback::Feedback;
use crate::security::Identity;
use crate::services;

/// Leave feedback on a movie as the current user
#[utoipa::path(
    tag = "Feedback",
    security(("token" = [])),
    responses(
        (status = 201, body = Feedback),
        (status = 404, body = ErrorResponse),
        (status = 422, description = "Validation failed"),
    ),
)]
#[post("/feedbacks")]
pub async fn store(
    db: Data<DatabaseConnection>,
    identity: Identity,
    Json(request): Json<FeedbackStoreRequest>,
) -> Result<impl Responder, Error> {
    let feedback = services::v1::feedback::store::store(&db, &identity, request).await?;

    Ok(HttpResponse::Created().json(feedback))
}

#[utoipa::path(
    tag = "Feedback",
    security(("token" = [])),
    responses((status = 200, body = Vec<Feedback>)),
)]
#[get("/feedbacks")]
pub async fn all(db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    Ok(Json(services::v1::feedback::find::all(&db).await?))
}

#[utoipa::path(
    tag = "Feedback",
    security(("token" = [])),
    responses(
        (status = 200, body = Feedback),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/feedbacks/{id}")]
pub async fn show(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::feedback::find::find_by_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "Feedback",
    security(("token" = [])),
    responses((status = 200, body = Vec<Feedback>)),
)]
#[get("/feedbacks/movie/{id}")]
pub async fn by_movie(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::feedback::find::find_by_movie_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "Feedback",
    security(("token" = [])),
    responses((status = 200, body = Vec<Feedback>)),
)]
#[get("/feedbacks/user/{id}")]
pub async fn by_user(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::feedback::find::find_by_user_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "Feedback",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 404, body = ErrorResponse),
    ),
)]
#[delete("/feedbacks/{id}")]
pub async fn delete(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    services::v1::feedback::delete::delete(&db, id.into_inner()).await
}
