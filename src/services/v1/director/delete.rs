use crate::cache::ResponseCache;
use crate::entities::v1::{directors, movies};
use crate::prelude::*;

/// Removes the director's movies first, then the director
#[::tracing::instrument(skip(db, cache))]
pub async fn delete(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    id: i64,
) -> Result<Success, Error> {
    Error::ensure_positive(id, "id")?;

    if !directors::Model::exists(db, id).await? {
        return Err(super::find::not_found(id));
    }

    let movies = movies::Model::delete_by_director_id(db, id).await?;
    directors::Model::delete_by_id(db, id).await?;
    cache.invalidate_movies().await;

    ::tracing::info!(movies, "Director deleted");

    Ok(Success)
}
