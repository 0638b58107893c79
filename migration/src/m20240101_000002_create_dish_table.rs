use super::m20240101_000001_create_restaurant_table::Restaurant;
use sea_orm_migration::sea_orm::DbBackend;
use sea_orm_migration::{prelude::*, schema::*};

const FK_DISH_RESTAURANT: &str = "fk-dish-restaurant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(string(Dish::Name))
                    .col(decimal_len(Dish::Price, 10, 2))
                    .col(integer(Dish::RestaurantId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DISH_RESTAURANT)
                            .from(Dish::Table, Dish::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot drop a foreign key without rebuilding the table.
        if manager.get_database_backend() != DbBackend::Sqlite {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .table(Dish::Table)
                        .name(FK_DISH_RESTAURANT)
                        .to_owned(),
                )
                .await?;
        }
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Dish {
    #[sea_orm(iden = "dishes")]
    Table,
    Id,
    Name,
    Price,
    RestaurantId,
}
