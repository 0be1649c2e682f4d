use sea_orm_migration::prelude::*;

use crate::m20240301_000002_create_movies::Movie;
use crate::m20240301_000005_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Feedback::Table)
                    .col(
                        ColumnDef::new(Feedback::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedback::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Feedback::MovieId).big_integer().not_null())
                    .col(ColumnDef::new(Feedback::Text).text().not_null())
                    .col(ColumnDef::new(Feedback::Rating).small_integer().not_null())
                    .col(ColumnDef::new(Feedback::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedbacks_user_id")
                            .from(Feedback::Table, Feedback::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_feedbacks_movie_id")
                            .from(Feedback::Table, Feedback::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Feedback::Table)
                    .col(Feedback::MovieId)
                    .name("idx_feedbacks_movie_id")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Feedback::Table)
                    .col(Feedback::UserId)
                    .name("idx_feedbacks_user_id")
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Feedback::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
enum Feedback {
    #[sea_orm(iden = "feedbacks")]
    Table,
    Id,
    UserId,
    MovieId,
    Text,
    Rating,
    CreatedAt,
}
