use crate::server::{data::reserva::ReservaRepository, model::reserva::CreateReservaParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
