use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(string(Restaurant::Name))
                    .col(string(Restaurant::AddressFirstLine))
                    .col(string(Restaurant::PhoneNumber))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    #[sea_orm(iden = "restaurants")]
    Table,
    Id,
    Name,
    AddressFirstLine,
    PhoneNumber,
}
