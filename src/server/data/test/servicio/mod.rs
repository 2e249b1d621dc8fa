use crate::server::{data::servicio::ServicioRepository, model::servicio::CreateServicioParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
