use crate::entities::v1::{directors, movies};
use crate::prelude::*;
use crate::responses::v1::director::Director;
use crate::responses::v1::movie::Movie;

pub(crate) fn not_found(id: i64) -> Error {
    Error::not_found(format!("Director with id {id} not found"))
}

#[::tracing::instrument(skip(db))]
pub async fn all(db: &DatabaseConnection) -> Result<Vec<Director>, Error> {
    let directors = directors::Model::all(db).await?;

    Ok(directors.into_iter().map(Into::into).collect())
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Director, Error> {
    Error::ensure_positive(id, "id")?;

    directors::Model::find_by_id(db, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found(id))
}

/// Movies of an existing director
#[::tracing::instrument(skip(db))]
pub async fn movies(db: &DatabaseConnection, id: i64) -> Result<Vec<Movie>, Error> {
    Error::ensure_positive(id, "id")?;

    if !directors::Model::exists(db, id).await? {
        return Err(not_found(id));
    }

    let movies = movies::Model::find_by_director_id(db, id).await?;

    Ok(movies.into_iter().map(Into::into).collect())
}
