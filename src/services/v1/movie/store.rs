use sea_orm::ActiveValue::{NotSet, Set};

use crate::cache::ResponseCache;
use crate::entities::v1::{directors, movies};
use crate::prelude::*;
use crate::requests::v1::movie::MovieStoreRequest;
use crate::responses::v1::movie::Movie;

#[::tracing::instrument(skip(db, cache, request), fields(title = %request.title))]
pub async fn store(
    db: &DatabaseConnection,
    cache: &ResponseCache,
    request: MovieStoreRequest,
) -> Result<Movie, Error> {
    request.validate()?;

    let title = request.title.trim().to_string();

    if movies::Model::title_exists(db, &title).await? {
        ::tracing::debug!("Duplicate movie title rejected");
        return Err(Error::conflict(format!(
            "Movie with title {title} already exists"
        )));
    }

    if let Some(director_id) = request.director_id {
        if !directors::Model::exists(db, director_id).await? {
            return Err(Error::not_found(format!(
                "Director with id {director_id} not found"
            )));
        }
    }

    let model = movies::ActiveModel {
        id: NotSet,
        title: Set(title.clone()),
        description: Set(request.description.trim().to_string()),
        date_of_release: Set(request.date_of_release),
        genre: Set(request.genre),
        duration: Set(request.duration),
        director_id: Set(request.director_id),
    };

    // the unique index catches a concurrent insert of the same title
    let movie = match movies::Model::store(db, model).await {
        Ok(movie) => movie,
        Err(e) => {
            return Err(match Error::from(e) {
                Error::Conflict { .. } => {
                    Error::conflict(format!("Movie with title {title} already exists"))
                }
                e => e,
            });
        }
    };

    cache.invalidate_movies().await;

    ::tracing::info!(movie_id = movie.id, "Movie stored");

    Ok(movie.into())
}
