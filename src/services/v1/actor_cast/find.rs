use crate::entities::v1::actor_casts::Model;
use crate::prelude::*;
use crate::responses::v1::actor_cast::ActorCast;

fn collect(casts: Vec<Model>) -> Vec<ActorCast> {
    casts.into_iter().map(Into::into).collect()
}

#[::tracing::instrument(skip(db))]
pub async fn all(db: &DatabaseConnection) -> Result<Vec<ActorCast>, Error> {
    Ok(collect(Model::all(db).await?))
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<ActorCast, Error> {
    Error::ensure_positive(id, "id")?;

    Model::find_by_id(db, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| super::not_found(id))
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_movie_id(db: &DatabaseConnection, movie_id: i64) -> Result<Vec<ActorCast>, Error> {
    Error::ensure_positive(movie_id, "id")?;

    Ok(collect(Model::find_by_movie_id(db, movie_id).await?))
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_actor_id(db: &DatabaseConnection, actor_id: i64) -> Result<Vec<ActorCast>, Error> {
    Error::ensure_positive(actor_id, "id")?;

    Ok(collect(Model::find_by_actor_id(db, actor_id).await?))
}
