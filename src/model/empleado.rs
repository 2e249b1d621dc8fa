use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEmpleadoDto {
    pub nombre: String,
    pub puesto: String,
    pub telefono: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EmpleadoDto {
    pub id: String,
    pub nombre: String,
    pub puesto: String,
    pub telefono: String,
}
