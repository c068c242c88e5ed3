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
                    .table(DailySlot::Table)
                    .if_not_exists()
                    .col(pk_auto(DailySlot::Id))
                    .col(integer(DailySlot::LocationId))
                    .col(integer(DailySlot::DayOfWeek))
                    .col(time(DailySlot::StartHour))
                    .col(time(DailySlot::EndHour))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_slot_location_id")
                            .from(DailySlot::Table, DailySlot::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_daily_slot_location_day")
                    .table(DailySlot::Table)
                    .col(DailySlot::LocationId)
                    .col(DailySlot::DayOfWeek)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailySlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailySlot {
    Table,
    Id,
    LocationId,
    DayOfWeek,
    StartHour,
    EndHour,
}
