use crate::server::{
    data::appointment::{session_note::SessionNoteRepository, AppointmentRepository},
    model::appointment::{CreateAppointmentParams, CreateSessionNoteParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::appointment::AppointmentFactory};

mod appointment;
mod session_note;
