//! Provider weekly availability.

use crate::model::provider::{AvailabilityDto, AvailabilitySlotDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub id: i32,
    pub provider_id: i32,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    pub max_appointments: i32,
    pub location: Option<String>,
}

impl Availability {
    pub fn from_entity(entity: entity::provider_availability::Model) -> Self {
        Self {
            id: entity.id,
            provider_id: entity.provider_id,
            day_of_week: entity.day_of_week,
            start_time: entity.start_time,
            end_time: entity.end_time,
            is_available: entity.is_available,
            max_appointments: entity.max_appointments,
            location: entity.location,
        }
    }

    pub fn into_dto(self) -> AvailabilityDto {
        AvailabilityDto {
            id: self.id,
            provider_id: self.provider_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            is_available: self.is_available,
            max_appointments: self.max_appointments,
            location: self.location,
        }
    }
}

/// One weekly slot to store for a provider.
#[derive(Debug, Clone)]
pub struct AvailabilitySlotParams {
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    pub max_appointments: i32,
    pub location: Option<String>,
}

impl AvailabilitySlotParams {
    pub fn from_dto(dto: AvailabilitySlotDto) -> Self {
        Self {
            day_of_week: dto.day_of_week,
            start_time: dto.start_time,
            end_time: dto.end_time,
            is_available: dto.is_available,
            max_appointments: dto.max_appointments,
            location: dto.location,
        }
    }
}
