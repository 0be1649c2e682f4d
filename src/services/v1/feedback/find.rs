use crate::entities::v1::feedbacks::Model;
use crate::prelude::*;
use crate::responses::v1::feedback::Feedback;

fn collect(feedbacks: Vec<Model>) -> Vec<Feedback> {
    feedbacks.into_iter().map(Into::into).collect()
}

#[::tracing::instrument(skip(db))]
pub async fn all(db: &DatabaseConnection) -> Result<Vec<Feedback>, Error> {
    Ok(collect(Model::all(db).await?))
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Feedback, Error> {
    Error::ensure_positive(id, "id")?;

    Model::find_by_id(db, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| super::not_found(id))
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_movie_id(db: &DatabaseConnection, movie_id: i64) -> Result<Vec<Feedback>, Error> {
    Error::ensure_positive(movie_id, "id")?;

    Ok(collect(Model::find_by_movie_id(db, movie_id).await?))
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_user_id(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Feedback>, Error> {
    Error::ensure_positive(user_id, "id")?;

    Ok(collect(Model::find_by_user_id(db, user_id).await?))
}
