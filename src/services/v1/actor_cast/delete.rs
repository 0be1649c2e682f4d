use crate::entities::v1::actor_casts::Model;
use crate::prelude::*;

#[::tracing::instrument(skip(db))]
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<Success, Error> {
    Error::ensure_positive(id, "id")?;

    if Model::delete_by_id(db, id).await? == 0 {
        return Err(super::not_found(id));
    }

    Ok(Success)
}
