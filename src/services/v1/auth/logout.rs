use crate::entities::v1::tokens::Model;
use crate::prelude::*;
use crate::security::{Identity, Sessions};

/// Revoke every token of the caller
#[::tracing::instrument(skip_all, fields(user_id = identity.id))]
pub async fn logout(
    db: &DatabaseConnection,
    sessions: &Sessions,
    identity: &Identity,
) -> Result<Success, Error> {
    let tokens = Model::find_by_user_id(db, identity.id).await?;
    let removed = Model::delete_by_user_id(db, identity.id).await?;

    for token in tokens {
        sessions.evict(token.id).await;
    }

    ::tracing::info!(removed, "User logged out");

    Ok(Success)
}
