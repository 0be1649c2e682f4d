use crate::cache::ResponseCache;
use crate::entities::v1::movies::Genre;
use crate::errors::ErrorResponse;
use crate::prelude::*;
use crate::requests::v1::movie::MovieStoreRequest;
use crate::responses::v1::movie::Movie;
use crate::services;

/// Save a new movie
///
/// Fail if
/// - a movie with the same title exists
/// - duration is not positive
/// - director does not exist
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 201, body = Movie),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 422, description = "Validation failed"),
    ),
)]
#[post("/movies")]
pub async fn store(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    Json(request): Json<MovieStoreRequest>,
) -> Result<impl Responder, Error> {
    let movie = services::v1::movie::store::store(&db, &cache, request).await?;

    Ok(HttpResponse::Created().json(movie))
}

/// Find all movies
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses((status = 200, body = Vec<Movie>)),
)]
#[get("/movies")]
pub async fn all(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
) -> Result<impl Responder, Error> {
    Ok(Json(services::v1::movie::find::all(&db, &cache).await?))
}

/// Find movie by id
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Movie),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/movies/{id}")]
pub async fn show(db: Data<DatabaseConnection>, id: Path<i64>) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::movie::find::find_by_id(&db, id.into_inner()).await?,
    ))
}

/// Find movie by exact title
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Movie),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/movies/title/{title}")]
pub async fn by_title(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    title: Path<String>,
) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::movie::find::find_by_title(&db, &cache, title.into_inner()).await?,
    ))
}

/// Find movie by exact description
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Movie),
        (status = 404, body = ErrorResponse),
    ),
)]
#[get("/movies/description/{description}")]
pub async fn by_description(
    db: Data<DatabaseConnection>,
    description: Path<String>,
) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::movie::find::find_by_description(&db, description.into_inner()).await?,
    ))
}

/// Find movies released on a date (`YYYY-MM-DD`)
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Vec<Movie>),
        (status = 400, body = ErrorResponse),
    ),
)]
#[get("/movies/released/{date}")]
pub async fn by_date_of_release(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    date: Path<String>,
) -> Result<impl Responder, Error> {
    let date = services::v1::movie::find::parse_date(&date)?;

    Ok(Json(
        services::v1::movie::find::find_by_date_of_release(&db, &cache, date).await?,
    ))
}

/// Find movies by genre
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Vec<Movie>),
        (status = 400, body = ErrorResponse),
    ),
)]
#[get("/movies/genre/{genre}")]
pub async fn by_genre(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    genre: Path<String>,
) -> Result<impl Responder, Error> {
    let genre: Genre = genre.parse()?;

    Ok(Json(
        services::v1::movie::find::find_by_genre(&db, &cache, genre).await?,
    ))
}

/// Find movies by duration in minutes
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Vec<Movie>),
        (status = 400, body = ErrorResponse),
    ),
)]
#[get("/movies/duration/{duration}")]
pub async fn by_duration(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    duration: Path<i32>,
) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::movie::find::find_by_duration(&db, &cache, duration.into_inner()).await?,
    ))
}

/// Find movies of a director
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, body = Vec<Movie>),
        (status = 400, body = ErrorResponse),
    ),
)]
#[get("/movies/director/{id}")]
pub async fn by_director(
    db: Data<DatabaseConnection>,
    id: Path<i64>,
) -> Result<impl Responder, Error> {
    Ok(Json(
        services::v1::movie::find::find_by_director_id(&db, id.into_inner()).await?,
    ))
}

/// Delete every movie
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses((status = 200, description = "Success")),
)]
#[delete("/movies")]
pub async fn delete_all(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
) -> Result<impl Responder, Error> {
    services::v1::movie::delete::delete_all(&db, &cache).await
}

/// Delete movie by id, a missing movie is not an error
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 400, body = ErrorResponse),
    ),
)]
#[delete("/movies/{id}")]
pub async fn delete(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    id: Path<i64>,
) -> Result<impl Responder, Error> {
    services::v1::movie::delete::delete_by_id(&db, &cache, id.into_inner()).await
}

/// Delete movies whose title matches a SQL `LIKE` pattern
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses((status = 200, description = "Success")),
)]
#[delete("/movies/title/{title}")]
pub async fn delete_by_title(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    title: Path<String>,
) -> Result<impl Responder, Error> {
    services::v1::movie::delete::delete_by_title(&db, &cache, title.into_inner()).await
}

/// Delete movies of a director
#[utoipa::path(
    tag = "Movie",
    security(("token" = [])),
    responses(
        (status = 200, description = "Success"),
        (status = 400, body = ErrorResponse),
    ),
)]
#[delete("/movies/director/{id}")]
pub async fn delete_by_director(
    db: Data<DatabaseConnection>,
    cache: Data<ResponseCache>,
    id: Path<i64>,
) -> Result<impl Responder, Error> {
    services::v1::movie::delete::delete_by_director_id(&db, &cache, id.into_inner()).await
}
