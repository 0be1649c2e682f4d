use crate::entities::v1::{tokens, users};
use crate::prelude::*;
use crate::security::Sessions;

/// Tokens and feedback of the user go with it
#[::tracing::instrument(skip(db, sessions))]
pub async fn delete(db: &DatabaseConnection, sessions: &Sessions, id: i64) -> Result<Success, Error> {
    Error::ensure_positive(id, "id")?;

    let tokens = tokens::Model::find_by_user_id(db, id).await?;

    if users::Model::delete_by_id(db, id).await? == 0 {
        return Err(super::not_found(id));
    }

    for token in tokens {
        sessions.evict(token.id).await;
    }

    Ok(Success)
}
