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
                    .table(Director::Table)
                    .col(
                        ColumnDef::new(Director::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Director::FirstName).string().not_null())
                    .col(ColumnDef::new(Director::LastName).string().not_null())
                    .col(ColumnDef::new(Director::DateOfBirth).date().null())
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Director::Table)
                    .col(Director::LastName)
                    .name("idx_directors_last_name")
                    .take(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Director::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Director {
    #[sea_orm(iden = "directors")]
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
}
