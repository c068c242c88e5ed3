//! Location factory, including valid weekdays and disabled dates.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with their calendar rules.
///
/// # Example
///
/// ```rust,ignore
/// let location = LocationFactory::new(&db)
///     .valid_days(vec![0, 2, 4])
///     .disabled_date(NaiveDate::from_ymd_opt(2030, 1, 7).unwrap())
///     .build()
///     .await?;
/// ```
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    valid_days: Vec<i32>,
    disabled_dates: Vec<NaiveDate>,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory named `"Location {id}"`, open every day.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Location {}", id),
            valid_days: Vec::new(),
            disabled_dates: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Restricts the location to the given weekdays (0 = Monday).
    pub fn valid_days(mut self, valid_days: Vec<i32>) -> Self {
        self.valid_days = valid_days;
        self
    }

    /// Closes the location on a calendar date.
    pub fn disabled_date(mut self, date: NaiveDate) -> Self {
        self.disabled_dates.push(date);
        self
    }

    /// Inserts the location followed by its weekday and date rows.
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        let location = entity::location::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await?;

        for day_of_week in self.valid_days {
            entity::location_valid_day::ActiveModel {
                location_id: ActiveValue::Set(location.id),
                day_of_week: ActiveValue::Set(day_of_week),
            }
            .insert(self.db)
            .await?;
        }

        for date in self.disabled_dates {
            entity::location_disabled_date::ActiveModel {
                location_id: ActiveValue::Set(location.id),
                date: ActiveValue::Set(date),
            }
            .insert(self.db)
            .await?;
        }

        Ok(location)
    }
}

/// Creates a location open every day.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
