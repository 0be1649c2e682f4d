use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::v1::directors::{ActiveModel, Model};
use crate::prelude::*;
use crate::requests::v1::director::DirectorStoreRequest;
use crate::responses::v1::director::Director;

#[::tracing::instrument(skip(db))]
pub async fn store(
    db: &DatabaseConnection,
    request: DirectorStoreRequest,
) -> Result<Director, Error> {
    request.validate()?;

    let model = ActiveModel {
        id: NotSet,
        first_name: Set(request.first_name.trim().to_string()),
        last_name: Set(request.last_name.trim().to_string()),
        date_of_birth: Set(request.date_of_birth),
    };

    let director = Model::store(db, model).await?;

    ::tracing::info!(director_id = director.id, "Director stored");

    Ok(director.into())
}
