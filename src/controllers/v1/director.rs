use crate::cache::ResponseCache;
use crate::errors::ErrorResponse;
use crate::prelude::*;
use crate::requests::v1::director::DirectorStoreRequest;
use crate::responses::v1::director::Director;
use crate::responses::v1::movie::Movie;
use crate::services;

/// Store new director
#[utoipa::path(
    tag = "Director",
    security(("token" = [])),
    responses(
        (status = 201, body = Director),
        (status = 422, description = "Validation failed"),
    ),
)]
#[post("/directors")]
pub async fn store(
    db: Data<DatabaseConnection>,
    Json(request): Json<DirectorStoreRequest>,
) -> Result<impl Responder, Error> {
    let director = services::v1::director::store::store(&db, request).await?;

    Ok(HttpResponse::Created().json(director))
}

/// Find all directors
#[utoipa::path(
    tag = "Director",
    security(("token" = [])),
    responses((status = 200, body = Vec<Director>)),
)]
#[get("/directors")]
pub async fn all(db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    Ok(Json(services::v1::director::find::all(&db).await?))
}

/// Find director by id
#[utoipa::path(
    tag = "Director",
    security(("token" = [])),
    responses(
        (status = 200, body = Director),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/directors/{id}")]
pub async fn show(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::director::find::find_by_id(&db, id.into_inner()).await?,
    ))
}

/// Movies of a director
#[utoipa::path(
    tag = "Director",
    security(("token" = [])),
    responses(
        (status = 200, body = Vec<Movie>),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/directors/{id}/movies")]
pub async fn movies(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::director::find::movies(&db, id.into_inner()).await?,
    ))
}

/// Delete director by id together with their movies
#[utoipa::path(
    tag = "Director",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 404, body = ErrorResponse),
    ),
)]
#[delete("/directors/{id}")]
pub async fn delete(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    id: Path<i64>,
) -> Result<impl Responder, Error> {
    services::v1::director::delete::delete(&db, &cache, id.into_inner()).await
}
