//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! the entity types out of the service layer. Every collection repository performs a
//! single statement per operation.

pub mod cliente;
pub mod empleado;
pub mod habitacion;
pub mod reserva;
pub mod servicio;
pub mod usuario;

#[cfg(test)]
mod test;
