use crate::errors::ErrorResponse;
use crate::prelude::*;
use crate::requests::v1::actor::ActorStoreRequest;
use crate::responses::v1::actor::Actor;
use crate::services;

/// Store new actor
#[utoipa::path(
    tag = "Actor",
    security(("token" = [])),
    responses(
        (status = 201, body = Actor),
        (status = 422, description = "Validation failed"),
    ),
)]
#[post("/actors")]
pub async fn store(
    db: Data<DatabaseConnection>,
    Json(request): Json<ActorStoreRequest>,
) -> Result<impl Responder, Error> {
    let actor = services::v1::actor::store::store(&db, request).await?;

    Ok(HttpResponse::Created().json(actor))
}

#[utoipa::path(
    tag = "Actor",
    security(("token" = [])),
    responses((status = 200, body = Vec<Actor>)),
)]
#[get("/actors")]
pub async fn all(db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    Ok(Json(services::v1::actor::find::all(&db).await?))
}

#[utoipa::path(
    tag = "Actor",
    security(("token" = [])),
    responses(
        (status = 200, body = Actor),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/actors/{id}")]
pub async fn show(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::actor::find::find_by_id(&db, id.into_inner()).await?,
    ))
}

/// Delete actor by id, their casts go with them
#[utoipa::path(
    tag = "Actor",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 404, body = ErrorResponse),
    ),
)]
#[delete("/actors/{id}")]
pub async fn delete(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    services::v1::actor::delete::delete(&db, id.into_inner()).await
}
