use crate::{
    model::referral::{CreateReferralDto, ReferralStatus},
    server::{
        data::referral::ReferralRepository,
        model::referral::{CreateReferralParams, ReferralFilter, UpdateReferralParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::referral::ReferralFactory};

mod get_overdue;
mod get_unassigned;
mod list;
mod update;

fn form() -> CreateReferralDto {
    serde_json::from_value(serde_json::json!({
        "firstName": "Alex",
        "lastName": "Taylor",
        "dateOfBirth": "1985-04-12",
        "phoneNumber": "0400111222",
        "emailAddress": "alex@example.com",
        "streetAddress": "12 King St",
        "city": "Newtown",
        "state": "NSW",
        "postcode": "2042",
        "planType": "self-managed",
        "planStartDate": "2026-01-01",
        "planReviewDate": "2027-01-01",
        "clientGoals": "Walk unaided",
        "referrerFirstName": "Sam",
        "referrerLastName": "Lee",
        "referrerEmail": "sam@clinic.example.com",
        "referrerPhone": "0299990000",
        "referredFor": "physiotherapy",
        "reasonForReferral": "Post-operative rehabilitation",
        "consentCheckbox": true
    }))
    .unwrap()
}
