use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};

use crate::entities::v1::actor_casts::{ActiveModel, Column, Entity, Model};
use crate::models::observe;
use crate::responses::v1::actor_cast::ActorCast;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        observe("actor_casts.find_by_id", Entity::find_by_id(id).one(db)).await
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find().order_by_asc(Column::Id);

        observe("actor_casts.all", query.all(db)).await
    }

    pub async fn find_by_movie_id(db: &DatabaseConnection, movie_id: i64) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::MovieId.eq(movie_id))
            .order_by_asc(Column::Id);

        observe("actor_casts.find_by_movie_id", query.all(db)).await
    }

    pub async fn find_by_actor_id(db: &DatabaseConnection, actor_id: i64) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::ActorId.eq(actor_id))
            .order_by_asc(Column::Id);

        observe("actor_casts.find_by_actor_id", query.all(db)).await
    }

    pub async fn store(db: &DatabaseConnection, model: ActiveModel) -> Result<Self, DbErr> {
        observe("actor_casts.store", model.insert(db)).await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_by_id(id).exec(db);

        Ok(observe("actor_casts.delete_by_id", query).await?.rows_affected)
    }
}

impl From<Model> for ActorCast {
    fn from(val: Model) -> Self {
        ActorCast {
            id: val.id,
            actor_id: val.actor_id,
            movie_id: val.movie_id,
            character_name: val.character_name,
        }
    }
}

impl From<&Model> for ActorCast {
    fn from(val: &Model) -> Self {
        ActorCast {
            id: val.id,
            actor_id: val.actor_id,
            movie_id: val.movie_id,
            character_name: val.character_name.clone(),
        }
    }
}
