use crate::{
    model::referral::{CreateReferralDto, ReferralStatus, UpdateReferralDto},
    server::{error::AppError, service::referral::ReferralService},
};
use test_utils::{builder::TestBuilder, factory};

mod create;

/// A complete, valid web form submission.
fn submission() -> CreateReferralDto {
    serde_json::from_value(serde_json::json!({
        "firstName": "Jamie",
        "lastName": "Nguyen",
        "dateOfBirth": "1988-04-12",
        "phoneNumber": "0400123456",
        "emailAddress": "jamie@example.com",
        "streetAddress": "12 Harbour Road",
        "city": "Newcastle",
        "state": "NSW",
        "postcode": "2300",
        "planType": "self-managed",
        "planStartDate": "2026-01-01",
        "planReviewDate": "2027-01-01",
        "clientGoals": "Return to independent walking",
        "referrerFirstName": "Sam",
        "referrerLastName": "Patel",
        "referrerEmail": "sam.patel@example.com",
        "referrerPhone": "0299990000",
        "referredFor": "physiotherapy",
        "reasonForReferral": "Post-surgery rehabilitation required",
        "consentCheckbox": true
    }))
    .unwrap()
}
