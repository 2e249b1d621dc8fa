use crate::server::{data::cliente::ClienteRepository, model::cliente::CreateClienteParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
