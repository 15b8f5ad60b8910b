use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{CreateSessionNoteParams, SessionNote};

/// Repository providing database operations for session notes.
pub struct SessionNoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionNoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a session note. Goals are stored as a JSON array of strings.
    pub async fn create(&self, params: CreateSessionNoteParams) -> Result<SessionNote, DbErr> {
        let now = Utc::now();

        let entity = entity::session_note::ActiveModel {
            appointment_id: ActiveValue::Set(params.appointment_id),
            referral_id: ActiveValue::Set(params.referral_id),
            provider_id: ActiveValue::Set(params.provider_id),
            session_date: ActiveValue::Set(params.session_date),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            session_type: ActiveValue::Set(params.session_type),
            participant_response: ActiveValue::Set(params.participant_response),
            progress_notes: ActiveValue::Set(params.progress_notes),
            goals_addressed: ActiveValue::Set(Some(serde_json::json!(params.goals_addressed))),
            homework_assigned: ActiveValue::Set(params.homework_assigned),
            next_session_focus: ActiveValue::Set(params.next_session_focus),
            risk_level: ActiveValue::Set(params.risk_level),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SessionNote::from_entity(entity))
    }

    /// Gets a provider's notes for one referral, latest session first.
    pub async fn get_by_referral(
        &self,
        referral_id: i32,
        provider_id: i32,
    ) -> Result<Vec<SessionNote>, DbErr> {
        let entities = entity::prelude::SessionNote::find()
            .filter(entity::session_note::Column::ReferralId.eq(referral_id))
            .filter(entity::session_note::Column::ProviderId.eq(provider_id))
            .order_by_desc(entity::session_note::Column::SessionDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SessionNote::from_entity).collect())
    }
}
