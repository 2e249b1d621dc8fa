//! Wire types shared by the HTTP boundary.
//!
//! Request and response bodies for every endpoint. Field names are the ones clients
//! send and receive, so several keep their original Spanish spelling.

pub mod api;
pub mod auth;
pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod reserva;
pub mod servicio;
