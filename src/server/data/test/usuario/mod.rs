use crate::server::{data::usuario::UsuarioRepository, model::usuario::CreateUsuarioParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
