use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub hashed_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub service_type: Option<String>,
    pub provider_license: Option<String>,
    pub provider_agency: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub provider_bio: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::referral::Entity")]
    Referral,
    #[sea_orm(has_many = "super::provider_availability::Entity")]
    ProviderAvailability,
    #[sea_orm(has_many = "super::provider_notification::Entity")]
    ProviderNotification,
}

impl Related<super::referral::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Referral.def()
    }
}

impl Related<super::provider_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderAvailability.def()
    }
}

impl Related<super::provider_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderNotification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
