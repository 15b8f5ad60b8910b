use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session_notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub appointment_id: i32,
    pub referral_id: i32,
    pub provider_id: i32,
    pub session_date: DateTimeUtc,
    pub duration_minutes: i32,
    pub session_type: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub participant_response: String,
    #[sea_orm(column_type = "Text")]
    pub progress_notes: String,
    pub goals_addressed: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub homework_assigned: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub next_session_focus: Option<String>,
    pub risk_level: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment::Entity",
        from = "Column::AppointmentId",
        to = "super::appointment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Appointment,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
