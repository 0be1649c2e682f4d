use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};

use crate::entities::v1::feedbacks::{ActiveModel, Column, Entity, Model};
use crate::models::observe;
use crate::responses::v1::feedback::Feedback;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        observe("feedbacks.find_by_id", Entity::find_by_id(id).one(db)).await
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find().order_by_desc(Column::CreatedAt);

        observe("feedbacks.all", query.all(db)).await
    }

    pub async fn find_by_movie_id(db: &DatabaseConnection, movie_id: i64) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::MovieId.eq(movie_id))
            .order_by_desc(Column::CreatedAt);

        observe("feedbacks.find_by_movie_id", query.all(db)).await
    }

    pub async fn find_by_user_id(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt);

        observe("feedbacks.find_by_user_id", query.all(db)).await
    }

    pub async fn store(db: &DatabaseConnection, model: ActiveModel) -> Result<Self, DbErr> {
        observe("feedbacks.store", model.insert(db)).await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_by_id(id).exec(db);

        Ok(observe("feedbacks.delete_by_id", query).await?.rows_affected)
    }
}

impl From<Model> for Feedback {
    fn from(val: Model) -> Self {
        Feedback {
            id: val.id,
            user_id: val.user_id,
            movie_id: val.movie_id,
            text: val.text,
            rating: val.rating,
            created_at: val.created_at,
        }
    }
}

impl From<&Model> for Feedback {
    fn from(val: &Model) -> Self {
        Feedback {
            id: val.id,
            user_id: val.user_id,
            movie_id: val.movie_id,
            text: val.text.clone(),
            rating: val.rating,
            created_at: val.created_at,
        }
    }
}
