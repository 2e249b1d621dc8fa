//! SeaORM entities for the hotel record store.
//!
//! One module per table. Every table uses a store-assigned string identifier as its
//! primary key; none of them declare relations, so reference-like columns such as
//! `reserva.habitacion` are plain values.

pub mod prelude;

pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod reserva;
pub mod servicio;
pub mod usuario;
