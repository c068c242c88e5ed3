use chrono::NaiveDate;

use crate::model::settings::ClubCreateDatesDto;

pub const CLUB_CREATE_START_DATE: &str = "ClubCreateStartDate";
pub const CLUB_CREATE_END_DATE: &str = "ClubCreateEndDate";

/// Window in which clubs may be founded. Either end may be unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubCreateDates {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ClubCreateDates {
    pub fn from_dto(dto: ClubCreateDatesDto) -> Self {
        Self {
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }

    pub fn into_dto(self) -> ClubCreateDatesDto {
        ClubCreateDatesDto {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
