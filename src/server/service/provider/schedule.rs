//! Provider availability, appointments, session notes and notifications.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use crate::{
    model::{
        appointment::{CreateAppointmentDto, CreateSessionNoteDto, UpdateAppointmentStatusDto},
        provider::{ParticipantDto, SetAvailabilityDto},
        referral::ReferralStatus,
    },
    server::{
        data::{
            appointment::{session_note::SessionNoteRepository, AppointmentRepository},
            availability::AvailabilityRepository,
            notification::NotificationRepository,
            referral::ReferralRepository,
        },
        error::AppError,
        model::{
            appointment::{
                Appointment, CreateAppointmentParams, CreateSessionNoteParams, SessionNote,
            },
            availability::{Availability, AvailabilitySlotParams},
            notification::Notification,
        },
        util::date::start_of_day,
    },
};

use super::{referral_not_found, ProviderService};

/// Days covered by the schedule when no end date is given.
const DEFAULT_SCHEDULE_DAYS: i64 = 7;

/// Referral statuses whose participants the provider is working with.
const PARTICIPANT_STATUSES: [ReferralStatus; 3] = [
    ReferralStatus::Accepted,
    ReferralStatus::InProgress,
    ReferralStatus::Completed,
];

impl<'a> ProviderService<'a> {
    /// Gets the provider's weekly availability.
    pub async fn get_availability(&self, provider_id: i32) -> Result<Vec<Availability>, AppError> {
        Ok(AvailabilityRepository::new(self.db)
            .get_by_provider(provider_id)
            .await?)
    }

    /// Replaces the provider's weekly availability.
    ///
    /// # Returns
    /// - `Ok(Vec<Availability>)` - Stored slots
    /// - `Err(AppError::BadRequest)` - Day outside 0..=6, malformed time or empty slot
    pub async fn set_availability(
        &self,
        provider_id: i32,
        dto: SetAvailabilityDto,
    ) -> Result<Vec<Availability>, AppError> {
        let mut slots = Vec::with_capacity(dto.slots.len());
        for slot in dto.slots {
            validate_slot(slot.day_of_week, &slot.start_time, &slot.end_time)?;
            if slot.max_appointments < 0 {
                return Err(AppError::BadRequest(
                    "max_appointments cannot be negative".to_string(),
                ));
            }
            slots.push(AvailabilitySlotParams::from_dto(slot));
        }

        let stored = AvailabilityRepository::new(self.db)
            .replace_for_provider(provider_id, slots)
            .await?;

        tracing::info!(
            "Provider {} set {} availability slots",
            provider_id,
            stored.len()
        );

        Ok(stored)
    }

    /// Gets the provider's appointments between two dates, inclusive.
    ///
    /// Starts today by default and covers a week when no end date is given.
    pub async fn get_schedule(
        &self,
        provider_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Appointment>, AppError> {
        let start_date = start_date.unwrap_or_else(|| Utc::now().date_naive());
        let end_date = end_date.unwrap_or(start_date + Duration::days(DEFAULT_SCHEDULE_DAYS));

        if end_date < start_date {
            return Err(AppError::BadRequest(
                "end_date must not be before start_date".to_string(),
            ));
        }

        Ok(AppointmentRepository::new(self.db)
            .get_by_provider_between(
                provider_id,
                start_of_day(start_date),
                start_of_day(end_date) + Duration::days(1),
            )
            .await?)
    }

    /// Schedules an appointment for one of the provider's referrals.
    ///
    /// The service type defaults to what the referral was made for.
    pub async fn create_appointment(
        &self,
        provider_id: i32,
        dto: CreateAppointmentDto,
    ) -> Result<Appointment, AppError> {
        if dto.duration_minutes <= 0 {
            return Err(AppError::BadRequest(
                "duration_minutes must be positive".to_string(),
            ));
        }

        let referral = ReferralRepository::new(self.db)
            .find_for_provider(dto.referral_id, provider_id)
            .await?
            .ok_or_else(referral_not_found)?;

        let service_type = dto
            .service_type
            .filter(|service_type| !service_type.trim().is_empty())
            .unwrap_or(referral.referred_for);

        let appointment = AppointmentRepository::new(self.db)
            .create(CreateAppointmentParams {
                referral_id: referral.id,
                provider_id,
                appointment_date: dto.appointment_date,
                duration_minutes: dto.duration_minutes,
                service_type,
                location: dto.location,
                appointment_notes: dto.appointment_notes,
            })
            .await?;

        tracing::info!(
            "Provider {} scheduled appointment #{} for referral #{}",
            provider_id,
            appointment.id,
            referral.id
        );

        Ok(appointment)
    }

    /// Sets the status of one of the provider's appointments.
    pub async fn update_appointment_status(
        &self,
        provider_id: i32,
        appointment_id: i32,
        dto: UpdateAppointmentStatusDto,
    ) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        if repo
            .find_for_provider(appointment_id, provider_id)
            .await?
            .is_none()
        {
            return Err(appointment_not_found());
        }

        repo.update_status(
            appointment_id,
            dto.status.as_str(),
            dto.cancellation_reason,
        )
        .await?
        .ok_or_else(appointment_not_found)
    }

    /// Records notes for a session held at one of the provider's appointments.
    ///
    /// Session date and duration default to the appointment's.
    pub async fn add_session_note(
        &self,
        provider_id: i32,
        appointment_id: i32,
        dto: CreateSessionNoteDto,
    ) -> Result<SessionNote, AppError> {
        if dto.participant_response.trim().is_empty() {
            return Err(AppError::BadRequest(
                "participant_response is required".to_string(),
            ));
        }
        if dto.progress_notes.trim().is_empty() {
            return Err(AppError::BadRequest("progress_notes is required".to_string()));
        }

        let appointment = AppointmentRepository::new(self.db)
            .find_for_provider(appointment_id, provider_id)
            .await?
            .ok_or_else(appointment_not_found)?;

        let note = SessionNoteRepository::new(self.db)
            .create(CreateSessionNoteParams {
                appointment_id: appointment.id,
                referral_id: appointment.referral_id,
                provider_id,
                session_date: dto.session_date.unwrap_or(appointment.appointment_date),
                duration_minutes: dto.duration_minutes.unwrap_or(appointment.duration_minutes),
                session_type: dto.session_type,
                participant_response: dto.participant_response,
                progress_notes: dto.progress_notes,
                goals_addressed: dto.goals_addressed,
                homework_assigned: dto.homework_assigned,
                next_session_focus: dto.next_session_focus,
                risk_level: dto.risk_level.as_str().to_string(),
            })
            .await?;

        Ok(note)
    }

    /// Gets the provider's session notes for one of their referrals.
    pub async fn get_session_notes(
        &self,
        provider_id: i32,
        referral_id: i32,
    ) -> Result<Vec<SessionNote>, AppError> {
        if ReferralRepository::new(self.db)
            .find_for_provider(referral_id, provider_id)
            .await?
            .is_none()
        {
            return Err(referral_not_found());
        }

        Ok(SessionNoteRepository::new(self.db)
            .get_by_referral(referral_id, provider_id)
            .await?)
    }

    /// Lists the people the provider is supporting.
    ///
    /// A participant referred more than once is listed once, using the most recent
    /// referral.
    pub async fn get_participants(&self, provider_id: i32) -> Result<Vec<ParticipantDto>, AppError> {
        let referrals = ReferralRepository::new(self.db)
            .get_by_provider_and_statuses(provider_id, &PARTICIPANT_STATUSES)
            .await?;

        let mut participants: Vec<ParticipantDto> = Vec::new();
        for referral in referrals.into_iter().rev() {
            let seen = participants.iter().any(|p| {
                p.first_name.eq_ignore_ascii_case(&referral.first_name)
                    && p.last_name.eq_ignore_ascii_case(&referral.last_name)
                    && p.date_of_birth == referral.date_of_birth
            });
            if !seen {
                participants.push(referral.into_participant_dto());
            }
        }

        Ok(participants)
    }

    /// Gets the provider's notifications, newest first.
    pub async fn get_notifications(
        &self,
        provider_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_by_provider(provider_id, unread_only)
            .await?)
    }

    /// Marks one of the provider's notifications as read.
    pub async fn mark_notification_read(
        &self,
        provider_id: i32,
        notification_id: i32,
    ) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(notification_id, provider_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }
}

fn appointment_not_found() -> AppError {
    AppError::NotFound("Appointment not found".to_string())
}

/// Checks the day index and that the slot is a non-empty `HH:MM` range.
fn validate_slot(day_of_week: i32, start_time: &str, end_time: &str) -> Result<(), AppError> {
    if !(0..=6).contains(&day_of_week) {
        return Err(AppError::BadRequest(format!(
            "day_of_week must be between 0 and 6, got {}",
            day_of_week
        )));
    }

    let parse = |value: &str| {
        NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
            AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value))
        })
    };
    let start = parse(start_time)?;
    let end = parse(end_time)?;

    if start >= end {
        return Err(AppError::BadRequest(format!(
            "start_time {} must be before end_time {}",
            start_time, end_time
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_slot() {
        assert!(validate_slot(0, "09:00", "17:00").is_ok());
        assert!(validate_slot(6, "00:00", "23:59").is_ok());
    }

    #[test]
    fn rejects_bad_day_or_time() {
        assert!(validate_slot(7, "09:00", "17:00").is_err());
        assert!(validate_slot(-1, "09:00", "17:00").is_err());
        assert!(validate_slot(1, "9am", "17:00").is_err());
        assert!(validate_slot(1, "25:00", "26:00").is_err());
    }

    #[test]
    fn rejects_empty_range() {
        assert!(validate_slot(2, "17:00", "09:00").is_err());
        assert!(validate_slot(2, "09:00", "09:00").is_err());
    }
}
