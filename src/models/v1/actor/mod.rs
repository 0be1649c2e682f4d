use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};

use crate::entities::v1::actors::{ActiveModel, Column, Entity, Model};
use crate::models::observe;
use crate::responses::v1::actor::Actor;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        observe("actors.find_by_id", Entity::find_by_id(id).one(db)).await
    }

    pub async fn exists(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let query = Entity::find().filter(Column::Id.eq(id)).count(db);

        Ok(observe("actors.exists", query).await? > 0)
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName);

        observe("actors.all", query.all(db)).await
    }

    pub async fn store(db: &DatabaseConnection, model: ActiveModel) -> Result<Self, DbErr> {
        observe("actors.store", model.insert(db)).await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_by_id(id).exec(db);

        Ok(observe("actors.delete_by_id", query).await?.rows_affected)
    }
}

impl From<Model> for Actor {
    fn from(val: Model) -> Self {
        Actor {
            id: val.id,
            first_name: val.first_name,
            last_name: val.last_name,
            date_of_birth: val.date_of_birth,
        }
    }
}

impl From<&Model> for Actor {
    fn from(val: &Model) -> Self {
        Actor {
            id: val.id,
            first_name: val.first_name.clone(),
            last_name: val.last_name.clone(),
            date_of_birth: val.date_of_birth,
        }
    }
}
