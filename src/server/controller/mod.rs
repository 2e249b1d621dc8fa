//! HTTP request handlers.
//!
//! Controllers convert DTOs to parameters, call the service layer and turn the result
//! into a response. Every collection controller exposes the same three handlers: list,
//! create and delete.

pub mod auth;
pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod reserva;
pub mod servicio;
