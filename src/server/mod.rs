//! HTTP backend for the hotel.
//!
//! Requests enter through `router`, which hands them to a handler in `controller`.
//! Handlers turn wire DTOs into parameter types from `model` and call a service in
//! `service`. Services run one repository call in `data` each, except the credential
//! flow which also hashes or verifies a password. Failures are `error::AppError`
//! values that render themselves as responses.
//!
//! `config`, `startup` and `state` cover process wiring: environment settings, the
//! tracing subscriber and database connection, and the handle shared with handlers.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
