use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub referral_id: i32,
    pub provider_id: i32,
    pub appointment_date: DateTimeUtc,
    pub duration_minutes: i32,
    pub status: String,
    pub service_type: String,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub appointment_notes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cancellation_reason: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::referral::Entity",
        from = "Column::ReferralId",
        to = "super::referral::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Referral,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ProviderId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Provider,
    #[sea_orm(has_many = "super::session_note::Entity")]
    SessionNote,
}

impl Related<super::referral::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referral.def()
    }
}

impl Related<super::session_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionNote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
