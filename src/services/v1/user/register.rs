use sea_orm::ActiveValue::{NotSet, Set};

use crate::entities::v1::users::{ActiveModel, Model, Role};
use crate::prelude::*;
use crate::requests::v1::user::RegisterRequest;
use crate::responses::v1::user::User;
use crate::security::PasswordHasher;

/// Public sign up, every new account gets the `USER` role
#[::tracing::instrument(skip(db, hasher, request), fields(email = %request.email))]
pub async fn register(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
    request: RegisterRequest,
) -> Result<User, Error> {
    request.validate()?;

    let email = request.email.trim().to_lowercase();

    if Model::email_exists(db, &email).await? {
        return Err(Error::conflict(format!("User with email {email} already exists")));
    }

    let password = hasher.hash(&request.password)?;

    let model = ActiveModel {
        id: NotSet,
        email: Set(email),
        nick_name: Set(request.nick_name.trim().to_string()),
        password: Set(password),
        role: Set(Role::User),
    };

    let user = Model::store(db, model).await?;

    ::tracing::info!(user_id = user.id, "User registered");

    Ok(user.into())
}
