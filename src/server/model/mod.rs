//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod auth;
pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod reserva;
pub mod servicio;
pub mod usuario;
