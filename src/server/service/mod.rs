//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models. The collection
//! services are thin: each operation maps to one repository call.

pub mod auth;
pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod reserva;
pub mod servicio;
