//! Room domain model and parameters.

use crate::model::habitacion::{CreateHabitacionDto, HabitacionDto};

/// Hotel room. Several rooms may share a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Habitacion {
    pub id: String,
    pub numero: i32,
    /// Room category, e.g. "suite" or "doble".
    pub tipo: String,
    /// Nightly price.
    pub precio: f64,
}

impl Habitacion {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::habitacion::Model) -> Self {
        Self {
            id: entity.id,
            numero: entity.numero,
            tipo: entity.tipo,
            precio: entity.precio,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> HabitacionDto {
        HabitacionDto {
            id: self.id,
            numero: self.numero,
            tipo: self.tipo,
            precio: self.precio,
        }
    }
}

/// Parameters for creating a room.
#[derive(Debug, Clone)]
pub struct CreateHabitacionParams {
    pub numero: i32,
    pub tipo: String,
    pub precio: f64,
}

impl CreateHabitacionParams {
    pub fn from_dto(dto: CreateHabitacionDto) -> Self {
        Self {
            numero: dto.numero,
            tipo: dto.tipo,
            precio: dto.precio,
        }
    }
}
