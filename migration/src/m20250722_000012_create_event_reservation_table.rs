use sea_orm_migration::{prelude::*, schema::*};

use super::m20250722_000004_create_location_table::Location;
use super::m20250722_000007_create_daily_slot_table::DailySlot;
use super::m20250722_000010_create_event_table::Event;
use crate::constraint;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventReservation::Table)
                    .if_not_exists()
                    .col(pk_auto(EventReservation::Id))
                    .col(integer(EventReservation::EventId))
                    .col(integer(EventReservation::LocationId))
                    .col(integer(EventReservation::DailySlotId))
                    .col(date(EventReservation::ReservationDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_reservation_event_id")
                            .from(EventReservation::Table, EventReservation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_reservation_location_id")
                            .from(EventReservation::Table, EventReservation::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_reservation_daily_slot_id")
                            .from(EventReservation::Table, EventReservation::DailySlotId)
                            .to(DailySlot::Table, DailySlot::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(constraint::event_reservation_unique())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventReservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventReservation {
    Table,
    Id,
    EventId,
    LocationId,
    DailySlotId,
    ReservationDate,
}
