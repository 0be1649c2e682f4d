use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, Condition};

use crate::entities::v1::tokens::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::users;
use crate::models::observe;
use crate::prelude::now;

impl Model {
    /// The token and its owner, unless the token expired
    pub async fn find_active_with_user(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(Self, users::Model)>, DbErr> {
        let query = Entity::find_by_id(id)
            .filter(
                Condition::any()
                    .add(Column::ExpiredAt.is_null())
                    .add(Column::ExpiredAt.gt(now())),
            )
            .find_also_related(users::Entity)
            .one(db);

        let found = observe("tokens.find_active_with_user", query).await?;

        Ok(found.and_then(|(token, user)| user.map(|user| (token, user))))
    }

    pub async fn find_by_user_id(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find().filter(Column::UserId.eq(user_id));

        observe("tokens.find_by_user_id", query.all(db)).await
    }

    pub async fn store(&self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        observe("tokens.store", ActiveModel::from(self.clone()).insert(db)).await
    }

    pub async fn delete_by_user_id(db: &DatabaseConnection, user_id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_many().filter(Column::UserId.eq(user_id)).exec(db);

        Ok(observe("tokens.delete_by_user_id", query).await?.rows_affected)
    }

    /// Drop expired tokens, returns how many were removed
    pub async fn purge_expired(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let query = Entity::delete_many()
            .filter(Column::ExpiredAt.is_not_null())
            .filter(Column::ExpiredAt.lte(now()))
            .exec(db);

        Ok(observe("tokens.purge_expired", query).await?.rows_affected)
    }
}
