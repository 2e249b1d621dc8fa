use crate::model::servicio::{CreateServicioDto, ServicioDto};

/// Extra service charged to a room number.
#[derive(Debug, Clone, PartialEq)]
pub struct Servicio {
    pub id: String,
    pub nombre_s: String,
    pub habitacion: i32,
    pub costo: f64,
}

impl Servicio {
    pub fn from_entity(entity: entity::servicio::Model) -> Self {
        Self {
            id: entity.id,
            nombre_s: entity.nombre_s,
            habitacion: entity.habitacion,
            costo: entity.costo,
        }
    }

    pub fn into_dto(self) -> ServicioDto {
        ServicioDto {
            id: self.id,
            nombre_s: self.nombre_s,
            habitacion: self.habitacion,
            costo: self.costo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServicioParams {
    pub nombre_s: String,
    pub habitacion: i32,
    pub costo: f64,
}

impl CreateServicioParams {
    pub fn from_dto(dto: CreateServicioDto) -> Self {
        Self {
            nombre_s: dto.nombre_s,
            habitacion: dto.habitacion,
            costo: dto.costo,
        }
    }
}
