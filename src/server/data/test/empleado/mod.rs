use crate::server::{data::empleado::EmpleadoRepository, model::empleado::CreateEmpleadoParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
