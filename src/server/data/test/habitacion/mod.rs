use crate::server::{
    data::habitacion::HabitacionRepository, model::habitacion::CreateHabitacionParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
