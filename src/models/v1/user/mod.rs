use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder, Set};

use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::{feedbacks, tokens};
use crate::models::observe;
use crate::responses::v1::user::User;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        observe("users.find_by_id", Entity::find_by_id(id).one(db)).await
    }

    /// Emails are stored lowercased, the lookup normalizes its argument
    pub async fn find_by_email<T: ToString>(
        db: &DatabaseConnection,
        email: T,
    ) -> Result<Option<Self>, DbErr> {
        let query = Entity::find().filter(Column::Email.eq(email.to_string().trim().to_lowercase()));

        observe("users.find_by_email", query.one(db)).await
    }

    pub async fn email_exists<T: ToString>(db: &DatabaseConnection, email: T) -> Result<bool, DbErr> {
        let query = Entity::find()
            .filter(Column::Email.eq(email.to_string().trim().to_lowercase()))
            .count(db);

        Ok(observe("users.email_exists", query).await? > 0)
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find().order_by_asc(Column::Id);

        observe("users.all", query.all(db)).await
    }

    pub async fn store(db: &DatabaseConnection, model: ActiveModel) -> Result<Self, DbErr> {
        observe("users.store", model.insert(db)).await
    }

    pub async fn update_password<T: ToString>(
        &self,
        db: &DatabaseConnection,
        password: T,
    ) -> Result<Self, DbErr> {
        let mut model = ActiveModel::from(self.clone());

        model.password = Set(password.to_string());

        observe("users.update_password", model.update(db)).await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_by_id(id).exec(db);

        Ok(observe("users.delete_by_id", query).await?.rows_affected)
    }

    pub async fn feedbacks(&self, db: &DatabaseConnection) -> Result<Vec<feedbacks::Model>, DbErr> {
        feedbacks::Model::find_by_user_id(db, self.id).await
    }

    pub async fn generate_token(
        &self,
        db: &DatabaseConnection,
        expired_at: Option<DateTime>,
    ) -> Result<tokens::Model, DbErr> {
        let token = tokens::Model {
            id: Uuid::new_v4(),
            user_id: self.id,
            expired_at,
        };

        token.store(db).await
    }
}

impl From<Model> for User {
    fn from(val: Model) -> Self {
        User {
            id: val.id,
            email: val.email,
            nick_name: val.nick_name,
            role: val.role,
        }
    }
}

impl From<&Model> for User {
    fn from(val: &Model) -> Self {
        User {
            id: val.id,
            email: val.email.clone(),
            nick_name: val.nick_name.clone(),
            role: val.role,
        }
    }
}
