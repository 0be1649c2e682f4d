use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .if_not_exists()
                    .table(Actor::Table)
                    .col(
                        ColumnDef::new(Actor::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Actor::FirstName).string().not_null())
                    .col(ColumnDef::new(Actor::LastName).string().not_null())
                    .col(ColumnDef::new(Actor::DateOfBirth).date().null())
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Actor::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Actor {
    #[sea_orm(iden = "actors")]
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
}
