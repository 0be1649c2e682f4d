use sea_orm::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder};

use crate::entities::v1::movies::{ActiveModel, Column, Entity, Genre, Model};
use crate::models::observe;
use crate::responses::v1::movie::Movie;

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        observe("movies.find_by_id", Entity::find_by_id(id).one(db)).await
    }

    pub async fn find_by_title<T: ToString>(
        db: &DatabaseConnection,
        title: T,
    ) -> Result<Option<Self>, DbErr> {
        let query = Entity::find().filter(Column::Title.eq(title.to_string()));

        observe("movies.find_by_title", query.one(db)).await
    }

    pub async fn find_by_description<T: ToString>(
        db: &DatabaseConnection,
        description: T,
    ) -> Result<Option<Self>, DbErr> {
        let query = Entity::find().filter(Column::Description.eq(description.to_string()));

        observe("movies.find_by_description", query.one(db)).await
    }

    pub async fn title_exists<T: ToString>(db: &DatabaseConnection, title: T) -> Result<bool, DbErr> {
        let query = Entity::find()
            .filter(Column::Title.eq(title.to_string()))
            .count(db);

        Ok(observe("movies.title_exists", query).await? > 0)
    }

    pub async fn all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find().order_by_asc(Column::Id);

        observe("movies.all", query.all(db)).await
    }

    pub async fn find_by_date_of_release(
        db: &DatabaseConnection,
        date: Date,
    ) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::DateOfRelease.eq(date))
            .order_by_asc(Column::Id);

        observe("movies.find_by_date_of_release", query.all(db)).await
    }

    pub async fn find_by_genre(db: &DatabaseConnection, genre: Genre) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::Genre.eq(genre))
            .order_by_asc(Column::Id);

        observe("movies.find_by_genre", query.all(db)).await
    }

    pub async fn find_by_duration(db: &DatabaseConnection, duration: i32) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::Duration.eq(duration))
            .order_by_asc(Column::Id);

        observe("movies.find_by_duration", query.all(db)).await
    }

    pub async fn find_by_director_id(
        db: &DatabaseConnection,
        director_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        let query = Entity::find()
            .filter(Column::DirectorId.eq(director_id))
            .order_by_asc(Column::Id);

        observe("movies.find_by_director_id", query.all(db)).await
    }

    pub async fn store(db: &DatabaseConnection, model: ActiveModel) -> Result<Self, DbErr> {
        observe("movies.store", model.insert(db)).await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_many().filter(Column::Id.eq(id)).exec(db);

        Ok(observe("movies.delete_by_id", query).await?.rows_affected)
    }

    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let query = Entity::delete_many().exec(db);

        Ok(observe("movies.delete_all", query).await?.rows_affected)
    }

    /// `pattern` is a SQL `LIKE` pattern, `%` and `_` keep their meaning
    pub async fn delete_by_title_like<T: ToString>(
        db: &DatabaseConnection,
        pattern: T,
    ) -> Result<u64, DbErr> {
        let query = Entity::delete_many()
            .filter(Column::Title.like(pattern.to_string()))
            .exec(db);

        Ok(observe("movies.delete_by_title_like", query).await?.rows_affected)
    }

    pub async fn delete_by_director_id(db: &DatabaseConnection, director_id: i64) -> Result<u64, DbErr> {
        let query = Entity::delete_many()
            .filter(Column::DirectorId.eq(director_id))
            .exec(db);

        Ok(observe("movies.delete_by_director_id", query).await?.rows_affected)
    }
}

impl From<Model> for Movie {
    fn from(val: Model) -> Self {
        Movie {
            id: val.id,
            title: val.title,
            description: val.description,
            date_of_release: val.date_of_release,
            genre: val.genre,
            duration: val.duration,
            director_id: val.director_id,
        }
    }
}

impl From<&Model> for Movie {
    fn from(val: &Model) -> Self {
        Movie {
            id: val.id,
            title: val.title.clone(),
            description: val.description.clone(),
            date_of_release: val.date_of_release,
            genre: val.genre,
            duration: val.duration,
            director_id: val.director_id,
        }
    }
}
