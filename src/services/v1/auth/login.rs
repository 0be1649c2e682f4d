use std::time::Duration;

use crate::config::AuthConfig;
use crate::entities::v1::{tokens, users};
use crate::metrics::AppMetrics;
use crate::prelude::*;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::{Authenticated, LoginHint};
use crate::security::rules::LOGIN_PATH;
use crate::security::{AuthenticationProvider, Identity, PasswordHasher, Sessions};

/// Verify the credentials and issue a session token
#[::tracing::instrument(skip_all, fields(email = %request.email))]
pub async fn login(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    sessions: &Sessions,
    config: &AuthConfig,
    metrics: &AppMetrics,
    request: LoginRequest,
) -> Result<Authenticated, Error> {
    let email = request.email.trim().to_lowercase();

    let user = match AuthenticationProvider::new(db, hasher)
        .authenticate(&email, &request.password)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            metrics.record_login_attempt(false);
            return Err(e);
        }
    };

    metrics.record_login_attempt(true);

    let user = rehash(db, hasher, user, &request.password).await;

    let purged = tokens::Model::purge_expired(db).await?;
    if purged > 0 {
        ::tracing::debug!(purged, "Expired tokens purged");
    }

    let token = user.generate_token(db, expiry(config.token_expiration())).await?;
    sessions.remember(&Identity::new(&user, token.id), &token).await;

    ::tracing::info!(user_id = user.id, "User logged in");

    Ok(Authenticated {
        token: token.id.simple().to_string(),
        user: user.into(),
    })
}

/// Upgrade a hash produced with outdated argon2 parameters. Failures only
/// cost the upgrade, never the login.
async fn rehash(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    user: users::Model,
    password: &str,
) -> users::Model {
    match hasher.needs_rehash(&user.password) {
        Ok(true) => {}
        Ok(false) => return user,
        Err(e) => {
            ::tracing::warn!(user_id = user.id, "Stored hash is unreadable: {}", e);
            return user;
        }
    }

    let hash = match hasher.hash(password) {
        Ok(hash) => hash,
        Err(e) => {
            ::tracing::warn!(user_id = user.id, "Rehash failed: {}", e);
            return user;
        }
    };

    match user.update_password(db, hash).await {
        Ok(updated) => {
            ::tracing::info!(user_id = updated.id, "Password hash upgraded");
            updated
        }
        Err(_) => user,
    }
}

fn expiry(lifetime: Duration) -> Option<NaiveDateTime> {
    chrono::Duration::from_std(lifetime)
        .ok()
        .map(|lifetime| now() + lifetime)
}

/// Where unauthenticated clients are sent
pub fn hint() -> LoginHint {
    LoginHint {
        message: "Authentication required".to_string(),
        method: "POST".to_string(),
        path: LOGIN_PATH.to_string(),
    }
}
