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
                    .table(LocationDisabledDate::Table)
                    .if_not_exists()
                    .col(integer(LocationDisabledDate::LocationId))
                    .col(date(LocationDisabledDate::Date))
                    .primary_key(
                        Index::create()
                            .col(LocationDisabledDate::LocationId)
                            .col(LocationDisabledDate::Date),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_disabled_date_location_id")
                            .from(LocationDisabledDate::Table, LocationDisabledDate::LocationId)
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
            .drop_table(Table::drop().table(LocationDisabledDate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LocationDisabledDate {
    Table,
    LocationId,
    Date,
}
