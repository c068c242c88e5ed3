use sea_orm_migration::{prelude::*, schema::*};

use super::m20250722_000004_create_location_table::Location;
use super::m20250722_000007_create_daily_slot_table::DailySlot;
use crate::constraint;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DisabledSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(DisabledSlot::Id))
                    .col(integer(DisabledSlot::LocationId))
                    .col(integer(DisabledSlot::DailySlotId))
                    .col(date(DisabledSlot::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_disabled_slot_location_id")
                            .from(DisabledSlot::Table, DisabledSlot::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_disabled_slot_daily_slot_id")
                            .from(DisabledSlot::Table, DisabledSlot::DailySlotId)
                            .to(DailySlot::Table, DailySlot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(constraint::disabled_slot_unique())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DisabledSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DisabledSlot {
    Table,
    Id,
    LocationId,
    DailySlotId,
    Date,
}
