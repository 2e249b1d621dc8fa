//! Hotel client domain model and parameters.

use crate::model::cliente::{ClienteDto, CreateClienteDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Cliente {
    pub id: String,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

impl Cliente {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::cliente::Model) -> Self {
        Self {
            id: entity.id,
            nombre: entity.nombre,
            email: entity.email,
            telefono: entity.telefono,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ClienteDto {
        ClienteDto {
            id: self.id,
            nombre: self.nombre,
            email: self.email,
            telefono: self.telefono,
        }
    }
}

/// Parameters for creating a client.
#[derive(Debug, Clone)]
pub struct CreateClienteParams {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
}

impl CreateClienteParams {
    pub fn from_dto(dto: CreateClienteDto) -> Self {
        Self {
            nombre: dto.nombre,
            email: dto.email,
            telefono: dto.telefono,
        }
    }
}
