use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Window during which new clubs may be founded. Both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClubCreateDatesDto {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
