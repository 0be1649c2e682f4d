use crate::security::Identity;

#[::tracing::instrument(skip_all, fields(user_id = identity.id))]
pub async fn me(identity: Identity) -> Identity {
    ::tracing::debug!("Returning authenticated identity");

    identity
}
