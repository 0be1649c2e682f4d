use crate::errors::ErrorResponse;
use crate::prelude::*;
use crate::requests::v1::actor_cast::ActorCastStoreRequest;
use crate::responses::v1::actor_cast::ActorCast;
use crate::services;

/// Cast an actor in a movie
///
/// Fail if the actor or the movie does not exist
#[utoipa::path(
    tag = "Actor cast",
    security(("token" = [])),
    responses(
        (status = 201, body = ActorCast),
        (status = 404, body = ErrorResponse),
        (status = 422, description = "Validation failed"),
    ),
)]
#[post("/actorsCasts")]
pub async fn store(
    db: Data<DatabaseConnection>,
    Json(request): Json<ActorCastStoreRequest>,
) -> Result<impl Responder, Error> {
    let cast = services::v1::actor_cast::store::store(&db, request).await?;

    Ok(HttpResponse::Created().json(cast))
}

#[utoipa::path(
    tag = "Actor cast",
    security(("token" = [])),
    responses((status = 200, body = Vec<ActorCast>)),
)]
#[get("/actorsCasts")]
pub async fn all(db: Data<DatabaseConnection>) -> Result<impl Responder, Error> {
    Ok(Json(services::v1::actor_cast::find::all(&db).await?))
}

#[utoipa::path(
    tag = "Actor cast",
    security(("token" = [])),
    responses(
        (status = 200, body = ActorCast),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/actorsCasts/{id}")]
pub async fn show(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::actor_cast::find::find_by_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "Actor cast",
    security(("token" = [])),
    responses((status = 200, body = Vec<ActorCast>)),
)]
#[get("/actorsCasts/movie/{id}")]
pub async fn by_movie(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::actor_cast::find::find_by_movie_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "Actor cast",
    security(("token" = [])),
    responses((status = 200, body = Vec<ActorCast>)),
)]
#[get("/actorsCasts/actor/{id}")]
pub async fn by_actor(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::actor_cast::find::find_by_actor_id(&db, id.into_inner()).await?,
    ))
}

#[utoipa::path(
    tag = "Actor cast",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 404, body = ErrorResponse),
    ),
)]
#[delete("/actorsCasts/{id}")]
pub async fn delete(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    services::v1::actor_cast::delete::delete(&db, id.into_inner()).await
}
