//! Key/value setting repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::Setting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|setting| setting.value))
    }

    /// Inserts or overwrites a setting.
    pub async fn set(&self, key: &str, value: String) -> Result<(), DbErr> {
        entity::prelude::Setting::insert(entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
        })
        .on_conflict(
            OnConflict::column(entity::setting::Column::Key)
                .update_column(entity::setting::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), DbErr> {
        entity::prelude::Setting::delete_by_id(key.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
