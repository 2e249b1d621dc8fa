//! Employee domain model and parameters.

use crate::model::empleado::{CreateEmpleadoDto, EmpleadoDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Empleado {
    pub id: String,
    pub nombre: String,
    /// Job title, e.g. "Recepción".
    pub puesto: String,
    pub telefono: String,
}

impl Empleado {
    pub fn from_entity(entity: entity::empleado::Model) -> Self {
        Self {
            id: entity.id,
            nombre: entity.nombre,
            puesto: entity.puesto,
            telefono: entity.telefono,
        }
    }

    pub fn into_dto(self) -> EmpleadoDto {
        EmpleadoDto {
            id: self.id,
            nombre: self.nombre,
            puesto: self.puesto,
            telefono: self.telefono,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmpleadoParams {
    pub nombre: String,
    pub puesto: String,
    pub telefono: String,
}

impl CreateEmpleadoParams {
    pub fn from_dto(dto: CreateEmpleadoDto) -> Self {
        Self {
            nombre: dto.nombre,
            puesto: dto.puesto,
            telefono: dto.telefono,
        }
    }
}
