use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString},
};
use rand::rngs::OsRng;
use sea_orm_migration::prelude::*;

use crate::m20240301_000005_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ADMIN_EMAIL: &str = "admin@local";
const ADMIN_NICK_NAME: &str = "admin";
const ADMIN_PASSWORD: &[u8] = b"password";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // argon2id, 19 MiB, 2 iterations, 1 lane; rehashed on first login
        // when the configured parameters differ
        let params = Params::new(19456, 2, 1, Some(32))
            .map_err(|e| DbErr::Custom(format!("Invalid Argon2 parameters: {e}")))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(ADMIN_PASSWORD, &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))?
            .to_string();

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(User::Table)
                    .columns(vec![User::Email, User::NickName, User::Password, User::Role])
                    .values_panic(vec![
                        ADMIN_EMAIL.into(),
                        ADMIN_NICK_NAME.into(),
                        password_hash.into(),
                        "ADMIN".into(),
                    ])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col(User::Email).eq(ADMIN_EMAIL))
                    .to_owned(),
            )
            .await
    }
}
