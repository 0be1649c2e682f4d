use crate::cache::{CacheKey, ResponseCache};
use crate::entities::v1::movies::{Genre, Model};
use crate::prelude::*;
use crate::responses::v1::movie::Movie;

fn collect(movies: Vec<Model>) -> Vec<Movie> {
    movies.into_iter().map(Into::into).collect()
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Movie, Error> {
    Error::ensure_positive(id, "id")?;

    Model::find_by_id(db, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| super::not_found(id))
}

#[::tracing::instrument(skip(db, cache))]
pub async fn find_by_title(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    title: String,
) -> Result<Movie, Error> {
    cache
        .remember(CacheKey::movie_title(&title), || async move {
            Model::find_by_title(db, &title)
                .await?
                .map(Into::into)
                .ok_or_else(|| Error::not_found(format!("Movie with title {title} not found")))
        })
        .await
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_description(
    db: &DatabaseConnection,
    description: String,
) -> Result<Movie, Error> {
    Model::find_by_description(db, &description)
        .await?
        .map(Into::into)
        .ok_or_else(|| {
            Error::not_found(format!("Movie with description {description} not found"))
        })
}

#[::tracing::instrument(skip(db, cache))]
pub async fn all(db: &DatabaseConnection, cache: &ResponseCache) -> Result<Vec<Movie>, Error> {
    cache
        .remember(CacheKey::movies_all(), || async move {
            Ok(collect(Model::all(db).await?))
        })
        .await
}

#[::tracing::instrument(skip(db, cache))]
pub async fn find_by_date_of_release(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    date: NaiveDate,
) -> Result<Vec<Movie>, Error> {
    cache
        .remember(CacheKey::movie_released(date), || async move {
            Ok(collect(Model::find_by_date_of_release(db, date).await?))
        })
        .await
}

#[::tracing::instrument(skip(db, cache))]
pub async fn find_by_genre(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    genre: Genre,
) -> Result<Vec<Movie>, Error> {
    cache
        .remember(CacheKey::movie_genre(genre), || async move {
            Ok(collect(Model::find_by_genre(db, genre).await?))
        })
        .await
}

#[::tracing::instrument(skip(db, cache))]
pub async fn find_by_duration(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    duration: i32,
) -> Result<Vec<Movie>, Error> {
    Error::ensure_positive(duration.into(), "duration")?;

    cache
        .remember(CacheKey::movie_duration(duration), || async move {
            Ok(collect(Model::find_by_duration(db, duration).await?))
        })
        .await
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_director_id(
    db: &DatabaseConnection,
    director_id: i64,
) -> Result<Vec<Movie>, Error> {
    Error::ensure_positive(director_id, "id")?;

    Ok(collect(Model::find_by_director_id(db, director_id).await?))
}

/// Parse a `YYYY-MM-DD` path segment
pub fn parse_date(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| Error::invalid_argument(format!("Invalid date {value}, expected YYYY-MM-DD")))
}
