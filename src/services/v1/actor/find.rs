use crate::entities::v1::actors::Model;
use crate::prelude::*;
use crate::responses::v1::actor::Actor;

#[::tracing::instrument(skip(db))]
pub async fn all(db: &DatabaseConnection) -> Result<Vec<Actor>, Error> {
    Ok(Model::all(db).await?.into_iter().map(Into::into).collect())
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Actor, Error> {
    Error::ensure_positive(id, "id")?;

    Model::find_by_id(db, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| super::not_found(id))
}
