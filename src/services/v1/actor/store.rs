use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::v1::actors::{ActiveModel, Model};
use crate::prelude::*;
use crate::requests::v1::actor::ActorStoreRequest;
use crate::responses::v1::actor::Actor;

#[::tracing::instrument(skip(db))]
pub async fn store(db: &DatabaseConnection, request: ActorStoreRequest) -> Result<Actor, Error> {
    request.validate()?;

    let model = ActiveModel {
        id: NotSet,
        first_name: Set(request.first_name.trim().to_string()),
        last_name: Set(request.last_name.trim().to_string()),
        date_of_birth: Set(request.date_of_birth),
    };

    let actor = Model::store(db, model).await?;

    ::tracing::info!(actor_id = actor.id, "Actor stored");

    Ok(actor.into())
}
