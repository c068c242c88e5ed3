//! Location data repository.
//!
//! Valid weekdays and disabled dates live in child tables and are always replaced as
//! a whole set.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::location::{CreateLocationParams, Location};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a location together with its valid weekdays and disabled dates.
    pub async fn create(&self, params: CreateLocationParams) -> Result<Location, DbErr> {
        let location = entity::location::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_valid_days(location.id, &params.valid_days)
            .await?;
        self.replace_disabled_dates(location.id, &params.disabled_dates)
            .await?;

        self.find_by_id(location.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Location with id {} not found after creation",
                location.id
            )))
    }

    /// Finds a location with its valid weekdays and disabled dates.
    pub async fn find_by_id(&self, location_id: i32) -> Result<Option<Location>, DbErr> {
        let Some(location) = entity::prelude::Location::find_by_id(location_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let valid_days = entity::prelude::LocationValidDay::find()
            .filter(entity::location_valid_day::Column::LocationId.eq(location_id))
            .all(self.db)
            .await?;

        let disabled_dates = entity::prelude::LocationDisabledDate::find()
            .filter(entity::location_disabled_date::Column::LocationId.eq(location_id))
            .all(self.db)
            .await?;

        Ok(Some(Location::from_entity(
            location,
            valid_days,
            disabled_dates,
        )))
    }

    /// All locations with their details, ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Location>, DbErr> {
        let locations = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await?;

        let mut valid_days: HashMap<i32, Vec<entity::location_valid_day::Model>> = HashMap::new();
        for day in entity::prelude::LocationValidDay::find().all(self.db).await? {
            valid_days.entry(day.location_id).or_default().push(day);
        }

        let mut disabled_dates: HashMap<i32, Vec<entity::location_disabled_date::Model>> =
            HashMap::new();
        for date in entity::prelude::LocationDisabledDate::find()
            .all(self.db)
            .await?
        {
            disabled_dates.entry(date.location_id).or_default().push(date);
        }

        Ok(locations
            .into_iter()
            .map(|location| {
                let days = valid_days.remove(&location.id).unwrap_or_default();
                let dates = disabled_dates.remove(&location.id).unwrap_or_default();
                Location::from_entity(location, days, dates)
            })
            .collect())
    }

    /// Renames a location.
    ///
    /// # Returns
    /// - `Ok(true)` - Location renamed
    /// - `Ok(false)` - No location with that id
    pub async fn rename(&self, location_id: i32, name: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::update_many()
            .filter(entity::location::Column::Id.eq(location_id))
            .col_expr(
                entity::location::Column::Name,
                sea_orm::sea_query::Expr::value(name),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the valid weekdays of a location. Duplicates are collapsed.
    pub async fn replace_valid_days(&self, location_id: i32, days: &[i32]) -> Result<(), DbErr> {
        entity::prelude::LocationValidDay::delete_many()
            .filter(entity::location_valid_day::Column::LocationId.eq(location_id))
            .exec(self.db)
            .await?;

        let mut days = days.to_vec();
        days.sort_unstable();
        days.dedup();

        for day_of_week in days {
            entity::location_valid_day::ActiveModel {
                location_id: ActiveValue::Set(location_id),
                day_of_week: ActiveValue::Set(day_of_week),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the disabled dates of a location. Duplicates are collapsed.
    pub async fn replace_disabled_dates(
        &self,
        location_id: i32,
        dates: &[NaiveDate],
    ) -> Result<(), DbErr> {
        entity::prelude::LocationDisabledDate::delete_many()
            .filter(entity::location_disabled_date::Column::LocationId.eq(location_id))
            .exec(self.db)
            .await?;

        let mut dates = dates.to_vec();
        dates.sort_unstable();
        dates.dedup();

        for date in dates {
            entity::location_disabled_date::ActiveModel {
                location_id: ActiveValue::Set(location_id),
                date: ActiveValue::Set(date),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
