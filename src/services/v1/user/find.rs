use crate::entities::v1::users::Model;
use crate::prelude::*;
use crate::responses::v1::user::{User, UserWithFeedback};

#[::tracing::instrument(skip(db))]
pub async fn all(db: &DatabaseConnection) -> Result<Vec<User>, Error> {
    Ok(Model::all(db).await?.into_iter().map(Into::into).collect())
}

/// The user with every feedback they wrote
#[::tracing::instrument(skip(db))]
pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<UserWithFeedback, Error> {
    Error::ensure_positive(id, "id")?;

    let user = Model::find_by_id(db, id)
        .await?
        .ok_or_else(|| super::not_found(id))?;
    let feedbacks = user.feedbacks(db).await?;

    Ok((user, feedbacks).into())
}

#[::tracing::instrument(skip(db))]
pub async fn find_by_email(db: &DatabaseConnection, email: String) -> Result<User, Error> {
    Model::find_by_email(db, &email)
        .await?
        .map(Into::into)
        .ok_or_else(|| Error::not_found(format!("User with email {email} not found")))
}
