use sea_orm_migration::{prelude::*, schema::*};

use super::m20250722_000004_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocationValidDay::Table)
                    .if_not_exists()
                    .col(integer(LocationValidDay::LocationId))
                    .col(integer(LocationValidDay::DayOfWeek))
                    .primary_key(
                        Index::create()
                            .col(LocationValidDay::LocationId)
                            .col(LocationValidDay::DayOfWeek),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_valid_day_location_id")
                            .from(LocationValidDay::Table, LocationValidDay::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocationValidDay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LocationValidDay {
    Table,
    LocationId,
    DayOfWeek,
}
