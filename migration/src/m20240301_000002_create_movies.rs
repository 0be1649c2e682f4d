use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_directors::Director;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Movie::Table)
                    .col(
                        ColumnDef::new(Movie::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movie::Title).string().not_null().unique_key())
                    .col(ColumnDef::new(Movie::Description).text().not_null())
                    .col(ColumnDef::new(Movie::DateOfRelease).date().not_null())
                    .col(ColumnDef::new(Movie::Genre).string_len(32).not_null())
                    .col(ColumnDef::new(Movie::Duration).integer().not_null())
                    .col(ColumnDef::new(Movie::DirectorId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movies_director_id")
                            .from(Movie::Table, Movie::DirectorId)
                            .to(Director::Table, Director::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movie::Table)
                    .col(Movie::Genre)
                    .name("idx_movies_genre")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movie::Table)
                    .col(Movie::DateOfRelease)
                    .name("idx_movies_date_of_release")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Movie::Table)
                    .col(Movie::DirectorId)
                    .name("idx_movies_director_id")
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Movie::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Movie {
    #[sea_orm(iden = "movies")]
    Table,
    Id,
    Title,
    Description,
    DateOfRelease,
    Genre,
    Duration,
    DirectorId,
}
