//! Reservation domain model and parameters.
//!
//! A reservation names its client and room as free text. Neither is checked against
//! the client or room collections, and overlapping stays are not detected.

use chrono::NaiveDate;

use crate::model::reserva::{CreateReservaDto, ReservaDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Reserva {
    pub id: String,
    /// Client name as typed by the caller.
    pub cliente: String,
    /// Room as typed by the caller.
    pub habitacion: String,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: NaiveDate,
}

impl Reserva {
    pub fn from_entity(entity: entity::reserva::Model) -> Self {
        Self {
            id: entity.id,
            cliente: entity.cliente,
            habitacion: entity.habitacion,
            fecha_entrada: entity.fecha_entrada,
            fecha_salida: entity.fecha_salida,
        }
    }

    pub fn into_dto(self) -> ReservaDto {
        ReservaDto {
            id: self.id,
            cliente: self.cliente,
            habitacion: self.habitacion,
            fecha_entrada: self.fecha_entrada,
            fecha_salida: self.fecha_salida,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservaParams {
    pub cliente: String,
    pub habitacion: String,
    pub fecha_entrada: NaiveDate,
    pub fecha_salida: NaiveDate,
}

impl CreateReservaParams {
    pub fn from_dto(dto: CreateReservaDto) -> Self {
        Self {
            cliente: dto.cliente,
            habitacion: dto.habitacion,
            fecha_entrada: dto.fecha_entrada,
            fecha_salida: dto.fecha_salida,
        }
    }
}
