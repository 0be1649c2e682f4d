use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::v1::{actor_casts, actors, movies};
use crate::prelude::*;
use crate::requests::v1::actor_cast::ActorCastStoreRequest;
use crate::responses::v1::actor_cast::ActorCast;
use crate::services;

#[::tracing::instrument(skip(db))]
pub async fn store(
    db: &DatabaseConnection,
    request: ActorCastStoreRequest,
) -> Result<ActorCast, Error> {
    request.validate()?;

    if !actors::Model::exists(db, request.actor_id).await? {
        return Err(services::v1::actor::not_found(request.actor_id));
    }

    if movies::Model::find_by_id(db, request.movie_id).await?.is_none() {
        return Err(services::v1::movie::not_found(request.movie_id));
    }

    let model = actor_casts::ActiveModel {
        id: NotSet,
        actor_id: Set(request.actor_id),
        movie_id: Set(request.movie_id),
        character_name: Set(request.character_name.trim().to_string()),
    };

    let cast = actor_casts::Model::store(db, model).await?;

    ::tracing::info!(actor_cast_id = cast.id, "Actor cast stored");

    Ok(cast.into())
}
