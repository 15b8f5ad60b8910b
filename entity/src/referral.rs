use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "referrals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    // Client
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub preferred_contact: String,

    // Representative
    pub rep_first_name: Option<String>,
    pub rep_last_name: Option<String>,
    pub rep_phone_number: Option<String>,
    pub rep_email_address: Option<String>,
    pub rep_street_address: Option<String>,
    pub rep_city: Option<String>,
    pub rep_state: Option<String>,
    pub rep_postcode: Option<String>,
    pub rep_relationship: Option<String>,

    // NDIS plan
    pub plan_type: String,
    pub plan_manager_name: Option<String>,
    pub plan_manager_agency: Option<String>,
    pub ndis_number: Option<String>,
    pub available_funding: Option<String>,
    pub plan_start_date: String,
    pub plan_review_date: String,
    #[sea_orm(column_type = "Text")]
    pub client_goals: String,

    // Referrer
    pub referrer_first_name: String,
    pub referrer_last_name: String,
    pub referrer_agency: Option<String>,
    pub referrer_role: Option<String>,
    pub referrer_email: String,
    pub referrer_phone: String,

    pub referred_for: String,
    #[sea_orm(column_type = "Text")]
    pub reason_for_referral: String,
    pub consent_checkbox: bool,
    pub disability_type: Option<String>,
    pub urgency_level: Option<String>,

    // Workflow
    pub status: String,
    pub priority: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub assigned_provider_id: Option<i32>,
    pub accepted_at: Option<DateTimeUtc>,

    // Audit
    pub raw_submission: Json,
    pub form_metadata: Json,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedProviderId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    AssignedProvider,
    #[sea_orm(has_many = "super::email_log::Entity")]
    EmailLog,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedProvider.def()
    }
}

impl Related<super::email_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmailLog.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
