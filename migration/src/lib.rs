pub use sea_orm_migration::prelude::*;

pub mod constraint;

mod m20250722_000001_create_user_table;
mod m20250722_000002_create_club_table;
mod m20250722_000003_create_club_membership_table;
mod m20250722_000004_create_location_table;
mod m20250722_000005_create_location_valid_day_table;
mod m20250722_000006_create_location_disabled_date_table;
mod m20250722_000007_create_daily_slot_table;
mod m20250722_000008_create_time_slot_table;
mod m20250722_000009_create_disabled_slot_table;
mod m20250722_000010_create_event_table;
mod m20250722_000011_create_event_participant_table;
mod m20250722_000012_create_event_reservation_table;
mod m20250722_000013_create_notification_table;
mod m20250722_000014_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250722_000001_create_user_table::Migration),
            Box::new(m20250722_000002_create_club_table::Migration),
            Box::new(m20250722_000003_create_club_membership_table::Migration),
            Box::new(m20250722_000004_create_location_table::Migration),
            Box::new(m20250722_000005_create_location_valid_day_table::Migration),
            Box::new(m20250722_000006_create_location_disabled_date_table::Migration),
            Box::new(m20250722_000007_create_daily_slot_table::Migration),
            Box::new(m20250722_000008_create_time_slot_table::Migration),
            Box::new(m20250722_000009_create_disabled_slot_table::Migration),
            Box::new(m20250722_000010_create_event_table::Migration),
            Box::new(m20250722_000011_create_event_participant_table::Migration),
            Box::new(m20250722_000012_create_event_reservation_table::Migration),
            Box::new(m20250722_000013_create_notification_table::Migration),
            Box::new(m20250722_000014_create_setting_table::Migration),
        ]
    }
}
