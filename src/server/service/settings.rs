//! Application-wide settings stored as key/value rows.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::setting::SettingRepository,
    error::AppError,
    model::settings::{ClubCreateDates, CLUB_CREATE_END_DATE, CLUB_CREATE_START_DATE},
    util::parse::parse_date,
};

const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the club creation window. Unset or unreadable values come back as `None`.
    pub async fn club_create_dates(&self) -> Result<ClubCreateDates, AppError> {
        let setting_repo = SettingRepository::new(self.db);

        Ok(ClubCreateDates {
            start_date: read_date(setting_repo.get(CLUB_CREATE_START_DATE).await?),
            end_date: read_date(setting_repo.get(CLUB_CREATE_END_DATE).await?),
        })
    }

    /// Stores the club creation window. A `None` end clears that setting.
    ///
    /// # Returns
    /// - `Ok(ClubCreateDates)` - The stored window
    /// - `Err(AppError::BadRequest)` - Start date after end date
    pub async fn set_club_create_dates(
        &self,
        dates: ClubCreateDates,
    ) -> Result<ClubCreateDates, AppError> {
        if let (Some(start), Some(end)) = (dates.start_date, dates.end_date) {
            if start > end {
                return Err(AppError::BadRequest(
                    "Club creation start date must not be after its end date".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;
        let setting_repo = SettingRepository::new(&txn);
        for (key, value) in [
            (CLUB_CREATE_START_DATE, dates.start_date),
            (CLUB_CREATE_END_DATE, dates.end_date),
        ] {
            match value {
                Some(date) => {
                    setting_repo
                        .set(key, date.format(STORED_DATE_FORMAT).to_string())
                        .await?
                }
                None => setting_repo.delete(key).await?,
            }
        }
        txn.commit().await?;

        tracing::info!(
            "Club creation window set to {:?} - {:?}",
            dates.start_date,
            dates.end_date
        );

        Ok(dates)
    }
}

fn read_date(value: Option<String>) -> Option<NaiveDate> {
    let value = value?;

    match parse_date(&value) {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!("Ignoring unreadable stored date '{}'", value);
            None
        }
    }
}
