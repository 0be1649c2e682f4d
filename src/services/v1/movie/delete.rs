use crate::cache::ResponseCache;
use crate::entities::v1::movies::Model;
use crate::prelude::*;

#[::tracing::instrument(skip(db, cache))]
pub async fn delete_by_id(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    id: i64,
) -> Result<Success, Error> {
    Error::ensure_positive(id, "id")?;

    let removed = Model::delete_by_id(db, id).await?;
    cache.invalidate_movies().await;

    ::tracing::info!(removed, "Movie deleted");

    Ok(Success)
}

#[::tracing::instrument(skip(db, cache))]
pub async fn delete_all(db: &DatabaseConnection, cache: &ResponseCache) -> Result<Success, Error> {
    let removed = Model::delete_all(db).await?;
    cache.invalidate_movies().await;

    ::tracing::info!(removed, "All movies deleted");

    Ok(Success)
}

/// `pattern` is matched with SQL `LIKE`
#[::tracing::instrument(skip(db, cache))]
pub async fn delete_by_title(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    pattern: String,
) -> Result<Success, Error> {
    let removed = Model::delete_by_title_like(db, &pattern).await?;
    cache.invalidate_movies().await;

    ::tracing::info!(removed, "Movies deleted by title");

    Ok(Success)
}

#[::tracing::instrument(skip(db, cache))]
pub async fn delete_by_director_id(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    director_id: i64,
) -> Result<Success, Error> {
    Error::ensure_positive(director_id, "id")?;

    let removed = Model::delete_by_director_id(db, director_id).await?;
    cache.invalidate_movies().await;

    ::tracing::info!(removed, "Movies deleted by director");

    Ok(Success)
}
