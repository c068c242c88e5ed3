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
                    .table(TimeSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(TimeSlot::Id))
                    .col(integer(TimeSlot::LocationId))
                    .col(time(TimeSlot::StartHour))
                    .col(time(TimeSlot::EndHour))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_slot_location_id")
                            .from(TimeSlot::Table, TimeSlot::LocationId)
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
            .drop_table(Table::drop().table(TimeSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimeSlot {
    Table,
    Id,
    LocationId,
    StartHour,
    EndHour,
}
