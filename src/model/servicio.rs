use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateServicioDto {
    pub nombre_s: String,
    /// Room number the service is charged to.
    pub habitacion: i32,
    pub costo: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicioDto {
    pub id: String,
    pub nombre_s: String,
    pub habitacion: i32,
    pub costo: f64,
}
