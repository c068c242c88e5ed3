use sea_orm_migration::{prelude::*, schema::*};

use super::m20250722_000001_create_user_table::User;
use super::m20250722_000002_create_club_table::Club;
use crate::constraint;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClubMembership::Table)
                    .if_not_exists()
                    .col(pk_auto(ClubMembership::Id))
                    .col(integer(ClubMembership::ClubId))
                    .col(integer(ClubMembership::UserId))
                    .col(string(ClubMembership::Status).default("pending"))
                    .col(string(ClubMembership::Role).default("member"))
                    .col(
                        timestamp_with_time_zone(ClubMembership::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_membership_club_id")
                            .from(ClubMembership::Table, ClubMembership::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_club_membership_user_id")
                            .from(ClubMembership::Table, ClubMembership::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(constraint::club_membership_unique())
            .await?;

        let db = manager.get_connection();
        db.execute_unprepared(constraint::ONE_PRESIDENT_PER_CLUB)
            .await?;
        db.execute_unprepared(constraint::ONE_PRESIDENCY_PER_USER)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(constraint::DROP_ONE_PRESIDENCY_PER_USER)
            .await?;
        db.execute_unprepared(constraint::DROP_ONE_PRESIDENT_PER_CLUB)
            .await?;

        manager
            .drop_table(Table::drop().table(ClubMembership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClubMembership {
    Table,
    Id,
    ClubId,
    UserId,
    Status,
    Role,
    JoinedAt,
}
