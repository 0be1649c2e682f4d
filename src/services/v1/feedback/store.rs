use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::v1::{feedbacks, movies};
use crate::prelude::*;
use crate::requests::v1::feedback::FeedbackStoreRequest;
use crate::responses::v1::feedback::Feedback;
use crate::security::Identity;
use crate::services;

/// The caller becomes the author
#[::tracing::instrument(skip(db, author, request), fields(user_id = author.id, movie_id = request.movie_id))]
pub async fn store(
    db: &DatabaseConnection,
    author: &Identity,
    request: FeedbackStoreRequest,
) -> Result<Feedback, Error> {
    request.validate()?;

    if movies::Model::find_by_id(db, request.movie_id).await?.is_none() {
        return Err(services::v1::movie::not_found(request.movie_id));
    }

    let model = feedbacks::ActiveModel {
        id: NotSet,
        user_id: Set(author.id),
        movie_id: Set(request.movie_id),
        text: Set(request.text.trim().to_string()),
        rating: Set(request.rating),
        created_at: Set(now()),
    };

    let feedback = feedbacks::Model::store(db, model).await?;

    ::tracing::info!(feedback_id = feedback.id, "Feedback stored");

    Ok(feedback.into())
}
