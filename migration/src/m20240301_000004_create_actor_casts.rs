use sea_orm_migration::prelude::*;

use crate::m20240301_000002_create_movies::Movie;
use crate::m20240301_000003_create_actors::Actor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(ActorCast::Table)
                    .col(
                        ColumnDef::new(ActorCast::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActorCast::ActorId).big_integer().not_null())
                    .col(ColumnDef::new(ActorCast::MovieId).big_integer().not_null())
                    .col(ColumnDef::new(ActorCast::CharacterName).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actor_casts_actor_id")
                            .from(ActorCast::Table, ActorCast::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_actor_casts_movie_id")
                            .from(ActorCast::Table, ActorCast::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ActorCast::Table)
                    .col(ActorCast::MovieId)
                    .name("idx_actor_casts_movie_id")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ActorCast::Table)
                    .col(ActorCast::ActorId)
                    .name("idx_actor_casts_actor_id")
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(ActorCast::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActorCast {
    #[sea_orm(iden = "actor_casts")]
    Table,
    Id,
    ActorId,
    MovieId,
    CharacterName,
}
