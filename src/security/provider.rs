use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::entities::v1::users;
use crate::errors::Error;
use crate::security::PasswordHasher;

const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Loads the account a login identifier refers to
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn load_user_by_username(&self, username: &str) -> Result<Option<users::Model>, Error>;
}

#[async_trait]
impl UserLookup for DatabaseConnection {
    async fn load_user_by_username(&self, username: &str) -> Result<Option<users::Model>, Error> {
        Ok(users::Model::find_by_email(self, username).await?)
    }
}

/// Checks submitted credentials against the stored password hash
pub struct AuthenticationProvider<'a, L: UserLookup + ?Sized> {
    lookup: &'a L,
    hasher: &'a PasswordHasher,
}

impl<'a, L: UserLookup + ?Sized> AuthenticationProvider<'a, L> {
    pub fn new(lookup: &'a L, hasher: &'a PasswordHasher) -> Self {
        Self { lookup, hasher }
    }

    /// Unknown accounts and wrong passwords fail with the same error
    #[::tracing::instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<users::Model, Error> {
        let Some(user) = self.lookup.load_user_by_username(username).await? else {
            ::tracing::info!("Unknown account");
            return Err(Error::unauthorized(BAD_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password)? {
            ::tracing::info!(user_id = user.id, "Password mismatch");
            return Err(Error::unauthorized(BAD_CREDENTIALS));
        }

        Ok(user)
    }
}
