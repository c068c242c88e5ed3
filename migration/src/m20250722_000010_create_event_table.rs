use sea_orm_migration::{prelude::*, schema::*};

use super::m20250722_000002_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::ClubId))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(timestamp_with_time_zone(Event::StartDate))
                    .col(timestamp_with_time_zone(Event::EndDate))
                    .col(integer(Event::MaxParticipants))
                    .col(string_null(Event::Category))
                    .col(string(Event::Status).default("advisor_pending"))
                    .col(text_null(Event::RejectReason))
                    .col(string_null(Event::ResultReportDocumentId))
                    .col(timestamp_with_time_zone(Event::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone_null(Event::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_club_id")
                            .from(Event::Table, Event::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    ClubId,
    Name,
    Description,
    StartDate,
    EndDate,
    MaxParticipants,
    Category,
    Status,
    RejectReason,
    ResultReportDocumentId,
    CreatedAt,
    UpdatedAt,
}
